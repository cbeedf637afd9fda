// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-shot comparison run: load both files, annotate, pick an exit code.

use std::io::Write;

use bfs_summary::{Comparison, ResultError, ResultFile};
use thiserror::Error;

use crate::cli::Cli;

/// Process exit codes
pub mod exit_codes {
    /// Pass count held or improved
    pub const SUCCESS: i32 = 0;
    /// Pass count dropped below the baseline
    pub const REGRESSION: i32 = 1;
    /// Unreadable, malformed or incomplete input
    pub const ERROR: i32 = 2;
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] ResultError),

    #[error("failed to write annotation: {0}")]
    Io(#[from] std::io::Error),
}

impl RunError {
    pub fn exit_code(&self) -> i32 {
        exit_codes::ERROR
    }
}

/// Compare the files named by `cli` and write the annotation to `out`.
///
/// Both files are loaded before anything is written, so an error leaves
/// `out` untouched.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Comparison, RunError> {
    let current = ResultFile::load(&cli.current)?;
    let baseline = ResultFile::load(&cli.baseline)?;

    let comparison = Comparison::new(current.into_record(), baseline.into_record())?;
    tracing::info!(
        pass = %comparison.pass,
        fail = %comparison.fail,
        current = %comparison.current.label,
        baseline = %comparison.baseline.label,
        "compared against baseline"
    );

    writeln!(out, "{}", comparison.annotation())?;
    out.flush()?;

    Ok(comparison)
}

/// Message for a dropped pass count, `None` when the pass count held.
pub fn regression_message(comparison: &Comparison) -> Option<String> {
    comparison.regressed().then(|| {
        format!(
            "pass count dropped from {} to {}",
            comparison.baseline.pass, comparison.current.pass
        )
    })
}

/// Exit code for a completed comparison.
pub fn exit_code(comparison: &Comparison) -> i32 {
    if comparison.regressed() {
        exit_codes::REGRESSION
    } else {
        exit_codes::SUCCESS
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
