// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Baseline comparison and CI annotation formatting.

use crate::error::ResultError;
use crate::record::ResultRecord;
use std::fmt;

/// Workflow command prefix recognised by the CI log viewer.
pub const ANNOTATION_PREFIX: &str = "::warning ::";

/// Signed change of a count, current minus baseline.
///
/// Displays with an explicit sign: `+3`, `-2`, `+0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Delta(pub i64);

impl Delta {
    fn between(current: i64, baseline: i64, field: &'static str) -> Result<Self, ResultError> {
        current
            .checked_sub(baseline)
            .map(Delta)
            .ok_or(ResultError::Overflow { field })
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// Outcome of comparing a current record against its baseline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub current: ResultRecord,
    pub baseline: ResultRecord,
    pub pass: Delta,
    pub fail: Delta,
}

impl Comparison {
    pub fn new(current: ResultRecord, baseline: ResultRecord) -> Result<Self, ResultError> {
        let pass = Delta::between(current.pass, baseline.pass, "pass")?;
        let fail = Delta::between(current.fail, baseline.fail, "fail")?;
        Ok(Self {
            current,
            baseline,
            pass,
            fail,
        })
    }

    /// True when fewer tests pass than on the baseline.
    ///
    /// Only the pass count gates; a higher fail count alone is not a regression.
    pub fn regressed(&self) -> bool {
        self.pass.is_negative()
    }

    /// The single annotation line, without trailing newline.
    pub fn annotation(&self) -> String {
        format!(
            "{ANNOTATION_PREFIX}Changes from main: PASS {} / FAIL {}",
            self.pass, self.fail
        )
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
