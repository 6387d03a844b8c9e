//! File transform operations
//!
//! Reads an input file, shifts every line and writes the result to an
//! output file. The input is read in full before the output is opened, so
//! a missing or unreadable input never creates or truncates the output.

use crate::error::{ErrorCategory, ErrorKind, Result, ShiftboxError};
use crate::shifter::Shift;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Read, Write};
use std::path::Path;

#[cfg(windows)]
const LINE_ENDING: &[u8] = b"\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &[u8] = b"\n";

/// Outcome of a successful transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformReport {
    /// Number of lines written to the output.
    pub lines: usize,
}

/// Shift every line of `input_path` by `shift` and write the result to `output_path`
///
/// Each output line is terminated with the platform line terminator.
/// `output_path` is opened for writing like any other file: it is created
/// or truncated, symlinks are followed and special files (pipes, devices)
/// are written to rather than replaced. It is only opened once the whole
/// input has been read.
pub fn transform_file(
    input_path: &Path,
    output_path: &Path,
    shift: Shift,
) -> Result<TransformReport> {
    let contents = read_input(input_path)?;
    tracing::debug!(input = %input_path.display(), bytes = contents.len(), "read input");

    let output = File::create(output_path)
        .map_err(|e| open_output_error(output_path, e))?;
    tracing::debug!(output = %output_path.display(), "opened output");

    let mut writer = BufWriter::new(output);
    let lines = shift_lines(
        &contents[..],
        &mut writer,
        shift,
        input_path,
        output_path,
    )?;
    writer.flush().map_err(|e| write_error(output_path, e))?;

    tracing::info!(
        input = %input_path.display(),
        output = %output_path.display(),
        shift = %shift,
        lines,
        "transform complete"
    );
    Ok(TransformReport { lines })
}

fn read_input(input_path: &Path) -> Result<Vec<u8>> {
    let mut input = File::open(input_path)
        .map_err(|e| read_error(input_path, e))?;
    if input.metadata().is_ok_and(|m| m.is_dir()) {
        return Err(ShiftboxError::with_kind(
            ErrorCategory::User,
            ErrorKind::InputUnreadable,
            format!("cannot read input file {}: is a directory", input_path.display()),
        ));
    }
    let mut contents = Vec::new();
    input
        .read_to_end(&mut contents)
        .map_err(|e| read_error(input_path, e))?;
    Ok(contents)
}

/// Copy lines from `reader` to `writer`, shifting each one.
///
/// A line ends at `\n`, with an optional preceding `\r`. A trailing
/// fragment without a terminator still counts as a line.
fn shift_lines(
    mut reader: impl BufRead,
    writer: &mut impl Write,
    shift: Shift,
    input_path: &Path,
    output_path: &Path,
) -> Result<usize> {
    let mut line = Vec::new();
    let mut count = 0;
    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| read_error(input_path, e))?;
        if n == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        shift.apply_in_place(&mut line);
        line.extend_from_slice(LINE_ENDING);
        writer
            .write_all(&line)
            .map_err(|e| write_error(output_path, e))?;
        count += 1;
    }
    Ok(count)
}

fn read_error(path: &Path, err: io::Error) -> ShiftboxError {
    if err.kind() == io::ErrorKind::NotFound {
        return ShiftboxError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::InputNotFound,
            format!("File {} not found!", path.display()),
            err,
        );
    }
    ShiftboxError::with_kind_and_source(
        ErrorCategory::Internal,
        ErrorKind::InputUnreadable,
        format!("cannot read input file {}: {}", path.display(), err),
        err,
    )
}

fn open_output_error(path: &Path, err: io::Error) -> ShiftboxError {
    ShiftboxError::with_kind_and_source(
        ErrorCategory::User,
        ErrorKind::OutputUnwritable,
        format!("cannot write output file {}: {}", path.display(), err),
        err,
    )
}

fn write_error(path: &Path, err: io::Error) -> ShiftboxError {
    ShiftboxError::with_kind_and_source(
        ErrorCategory::Internal,
        ErrorKind::OutputUnwritable,
        format!("cannot write output file {}: {}", path.display(), err),
        err,
    )
}
