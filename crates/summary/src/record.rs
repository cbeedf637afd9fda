// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A single run's result record.

use crate::count::coerce_count;
use crate::error::{FieldProblem, ResultError};
use serde_json::{Map, Value};
use std::path::Path;

/// Counts extracted from the record selected out of a result file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRecord {
    /// Top-level key the record was stored under
    pub label: String,
    pub pass: i64,
    pub fail: i64,
    /// Commit the results were produced from, when recorded
    pub sha: Option<String>,
    pub total: Option<i64>,
    pub skip: Option<i64>,
}

impl ResultRecord {
    /// Build a record from the JSON value stored under `label`.
    ///
    /// `pass` and `fail` are required. `sha`, `total` and `skip` are
    /// informational; a malformed optional count is dropped.
    pub fn from_value(path: &Path, label: String, value: &Value) -> Result<Self, ResultError> {
        let Some(fields) = value.as_object() else {
            return Err(ResultError::NotARecord {
                path: path.to_path_buf(),
                label,
            });
        };

        let pass = match required_count(fields, "pass") {
            Ok(n) => n,
            Err(reason) => return Err(field_error(path, label, "pass", reason)),
        };
        let fail = match required_count(fields, "fail") {
            Ok(n) => n,
            Err(reason) => return Err(field_error(path, label, "fail", reason)),
        };

        let sha = fields
            .get("sha")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            total: optional_count(fields, "total", &label),
            skip: optional_count(fields, "skip", &label),
            label,
            pass,
            fail,
            sha,
        })
    }
}

fn required_count(fields: &Map<String, Value>, name: &str) -> Result<i64, FieldProblem> {
    let value = fields.get(name).ok_or(FieldProblem::Missing)?;
    coerce_count(value)
}

fn optional_count(fields: &Map<String, Value>, name: &str, label: &str) -> Option<i64> {
    let value = fields.get(name)?;
    match coerce_count(value) {
        Ok(n) => Some(n),
        Err(problem) => {
            tracing::debug!(label, field = name, %problem, "ignoring malformed optional count");
            None
        }
    }
}

fn field_error(path: &Path, label: String, field: &str, reason: FieldProblem) -> ResultError {
    ResultError::Field {
        path: path.to_path_buf(),
        label,
        field: field.to_string(),
        reason,
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
