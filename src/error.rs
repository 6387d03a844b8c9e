use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Any failure that cannot be confidently attributed to any other error
    /// category in this enum.
    ///
    /// In particular this means that use of Internal is never a guarantee
    /// the error is not, for example, due to a user error - merely that it
    /// cannot be confidently determined by the code.
    Internal,

    /// The user provided invalid input or performed an action that is
    /// unsupported or impossible to complete.
    User,
}

/// Fine-grained condition flags for consumers that want to branch on error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input file does not exist.
    InputNotFound,
    /// The input file could not be opened or read.
    InputUnreadable,
    /// The output file could not be created, written or put in place.
    OutputUnwritable,
    /// The interactive input stream reached end of input.
    InputClosed,
    /// Interaction with stdin/stdout or other I/O failed.
    Io,
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct ShiftboxError {
    /// Broad error category, always provided.
    pub category: ErrorCategory,
    /// Optional specific condition tag. Any code consuming errors MUST
    /// handle the absence of a defined kind.
    pub kind: Option<ErrorKind>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    msg: String,
}

impl ShiftboxError {
    /// Creates a new error that also tags the failure with a kind.
    pub fn with_kind(category: ErrorCategory, kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that carries both a kind tag and the originating source error.
    pub fn with_kind_and_source(
        category: ErrorCategory,
        kind: ErrorKind,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// Process exit status for this error: 1 for user errors, 2 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self.category {
            ErrorCategory::User => 1,
            ErrorCategory::Internal => 2,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ShiftboxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_code_follows_category() {
        let user = ShiftboxError::with_kind(
            ErrorCategory::User,
            ErrorKind::InputClosed,
            "unexpected end of input",
        );
        assert_eq!(user.exit_code(), 1);

        let internal = ShiftboxError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to write output",
            io::Error::from(io::ErrorKind::BrokenPipe),
        );
        assert_eq!(internal.exit_code(), 2);
        assert!(StdError::source(&internal).is_some());
    }
}
