// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while loading and comparing result files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading a result file
#[derive(Debug, Error)]
pub enum ResultError {
    #[error("failed to read result file '{}': {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse result file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("result file '{}' is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("result file '{}' contains no records", path.display())]
    Empty { path: PathBuf },

    #[error("record '{label}' in '{}' is not an object", path.display())]
    NotARecord { path: PathBuf, label: String },

    #[error("record '{label}' in '{}': field '{field}' {reason}", path.display())]
    Field {
        path: PathBuf,
        label: String,
        field: String,
        reason: FieldProblem,
    },

    #[error("{field} delta does not fit in a 64-bit integer")]
    Overflow { field: &'static str },
}

/// Why a record field could not be turned into a count
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldProblem {
    #[error("is missing")]
    Missing,

    /// Holds the offending value as it appeared in the JSON
    #[error("is not an integer: {0}")]
    NotNumeric(String),

    #[error("is out of range")]
    OutOfRange,
}
