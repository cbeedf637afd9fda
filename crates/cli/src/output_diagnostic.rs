// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output for failed and regressed comparisons.
//!
//! Errors and warnings go to stderr only, so a failed run never leaves anything on stdout
//! that the CI log viewer could mistake for an annotation. Colored when stderr
//! is a terminal, plain text otherwise.

use std::io::{self, IsTerminal, Write};

use bfs_summary::ResultError;

use crate::runner::RunError;

/// Print a failed run's error, plus a hint when one applies, to stderr.
pub fn print_error(err: &RunError) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), err, is_tty);
}

fn write_error<W: Write>(writer: &mut W, err: &RunError, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", err);
    } else {
        let _ = writeln!(writer, "Error: {}", err);
    }
    if let Some(hint) = hint_for(err) {
        let _ = writeln!(writer, "Hint: {}", hint);
    }
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

/// Suggest where to look for the commonest CI misconfigurations.
fn hint_for(err: &RunError) -> Option<&'static str> {
    match err {
        RunError::Input(ResultError::MissingFile { .. }) => Some(
            "run from the directory holding the result files, or pass --current/--baseline",
        ),
        RunError::Input(ResultError::Empty { .. }) => {
            Some("the result file must map a run label to its counts")
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
