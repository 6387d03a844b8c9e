//! Interactive menu loop
//!
//! Repeatedly asks for an operation, an input path, an output path and a
//! shift amount, then runs the file transform. Invalid answers are
//! re-prompted; failed transforms are reported and the loop continues.

use crate::error::{ErrorCategory, ErrorKind, Result, ShiftboxError};
use crate::file_ops;
use crate::shifter::Shift;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const INPUT_PROMPT: &str = "Enter an input file: ";
pub const OUTPUT_PROMPT: &str = "Enter an output file: ";
pub const SHIFT_PROMPT: &str = "Enter a shift amount: ";

pub const INVALID_VALUE: &str = "ERROR! Enter a valid value!";
pub const EMPTY_INPUT: &str = "ERROR! Empty Input Not Allowed!";
pub const FINISHED: &str = "Finished writing to file.";
pub const GOODBYE: &str = "Goodbye!";

/// An operation picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Encode,
    Decode,
    Quit,
}

impl Choice {
    /// Parse a menu answer: a single letter, in either case.
    pub fn parse(answer: &str) -> Option<Self> {
        let mut chars = answer.trim().chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match c.to_ascii_uppercase() {
            'E' => Some(Choice::Encode),
            'D' => Some(Choice::Decode),
            'Q' => Some(Choice::Quit),
            _ => None,
        }
    }
}

/// Menu session over an input line source and an output sink.
///
/// Both encode and decode apply the shift exactly as entered; decoding a
/// file means entering the negated shift.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the menu, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user quits.
    ///
    /// Returns an error only when the interactive streams themselves fail,
    /// including end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.display_menu()?;
            let choice = self.get_choice()?;
            if choice == Choice::Quit {
                self.say("")?;
                self.say(GOODBYE)?;
                return Ok(());
            }

            let input_path = self.prompt_for_path(INPUT_PROMPT)?;
            let output_path = self.prompt_for_path(OUTPUT_PROMPT)?;
            let shift = self.prompt_for_shift()?;
            tracing::debug!(?choice, %shift, "running transform");

            match file_ops::transform_file(&input_path, &output_path, shift) {
                Ok(_) => self.say(FINISHED)?,
                Err(e) => {
                    tracing::warn!(error = %e, "transform failed");
                    if e.kind == Some(ErrorKind::InputNotFound) {
                        self.say(&format!("ERROR - {}", e))?;
                    } else {
                        self.say(&format!("ERROR! {}", e))?;
                    }
                }
            }
            self.say("")?;
        }
    }

    pub fn display_menu(&mut self) -> Result<()> {
        self.say("[E]ncode a file")?;
        self.say("[D]ecode a file")?;
        self.say("[Q]uit")?;
        self.prompt(CHOICE_PROMPT)
    }

    /// Read menu answers until one is valid. The prompt itself is expected
    /// to have been shown already by [`Menu::display_menu`].
    pub fn get_choice(&mut self) -> Result<Choice> {
        loop {
            let answer = self.read_line()?;
            if let Some(choice) = Choice::parse(&answer) {
                return Ok(choice);
            }
            tracing::debug!(answer = %answer, "rejected menu choice");
            self.say(INVALID_VALUE)?;
            self.prompt(CHOICE_PROMPT)?;
        }
    }

    /// Prompt for a non-empty path. Surrounding whitespace is trimmed.
    pub fn prompt_for_path(&mut self, prompt: &str) -> Result<PathBuf> {
        self.prompt(prompt)?;
        loop {
            let answer = self.read_line()?;
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(PathBuf::from(answer));
            }
            self.say(EMPTY_INPUT)?;
            self.prompt(prompt)?;
        }
    }

    /// Prompt for a signed integer shift amount.
    pub fn prompt_for_shift(&mut self) -> Result<Shift> {
        self.prompt(SHIFT_PROMPT)?;
        loop {
            let answer = self.read_line()?;
            match answer.trim().parse::<i64>() {
                Ok(amount) => return Ok(Shift::new(amount)),
                Err(e) => {
                    tracing::debug!(answer = %answer, error = %e, "rejected shift amount");
                    self.say(INVALID_VALUE)?;
                    self.prompt(SHIFT_PROMPT)?;
                }
            }
        }
    }

    /// Read one line without its terminator.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line).map_err(|e| {
            ShiftboxError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                format!("failed to read input: {}", e),
                e,
            )
        })?;
        if n == 0 {
            return Err(ShiftboxError::with_kind(
                ErrorCategory::User,
                ErrorKind::InputClosed,
                "unexpected end of input",
            ));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn say(&mut self, msg: &str) -> Result<()> {
        writeln!(self.output, "{}", msg).map_err(|e| {
            ShiftboxError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                format!("failed to write output: {}", e),
                e,
            )
        })
    }

    fn prompt(&mut self, msg: &str) -> Result<()> {
        self.output.write_all(msg.as_bytes()).map_err(prompt_error)?;
        self.output.flush().map_err(prompt_error)
    }
}

fn prompt_error(e: std::io::Error) -> ShiftboxError {
    ShiftboxError::with_kind_and_source(
        ErrorCategory::Internal,
        ErrorKind::Io,
        format!("failed to write prompt: {}", e),
        e,
    )
}
