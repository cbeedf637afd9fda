// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! bfs result summaries and their comparison against a baseline.
//!
//! A result file is a JSON object keyed by an arbitrary run label. Only the
//! first entry in source order is read; its `pass` and `fail` counts are
//! compared against the same counts from a baseline file.

mod compare;
mod count;
mod error;
mod file;
mod record;

pub use compare::{Comparison, Delta, ANNOTATION_PREFIX};
pub use count::coerce_count;
pub use error::{FieldProblem, ResultError};
pub use file::ResultFile;
pub use record::ResultRecord;
