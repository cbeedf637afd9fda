// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Count coercion for result fields.
//!
//! Result producers write counts either as JSON numbers or as strings, so
//! every count goes through [`coerce_count`] before any arithmetic.

use crate::error::FieldProblem;
use serde_json::Value;
use std::num::IntErrorKind;

/// Exclusive upper bound of `i64` as a float (2^63).
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Convert a JSON value into a count.
///
/// Integers are taken as is, finite floats are truncated toward zero, and
/// strings are trimmed and parsed as base-10 integers with an optional sign.
/// Everything else is rejected.
pub fn coerce_count(value: &Value) -> Result<i64, FieldProblem> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if n.is_u64() {
                Err(FieldProblem::OutOfRange)
            } else {
                match n.as_f64() {
                    Some(f) => float_count(f),
                    None => Err(FieldProblem::NotNumeric(n.to_string())),
                }
            }
        }
        Value::String(s) => parse_count(s),
        other => Err(FieldProblem::NotNumeric(other.to_string())),
    }
}

fn float_count(f: f64) -> Result<i64, FieldProblem> {
    if !f.is_finite() {
        return Err(FieldProblem::NotNumeric(f.to_string()));
    }
    let truncated = f.trunc();
    if truncated < -I64_BOUND || truncated >= I64_BOUND {
        return Err(FieldProblem::OutOfRange);
    }
    Ok(truncated as i64)
}

fn parse_count(s: &str) -> Result<i64, FieldProblem> {
    s.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => FieldProblem::OutOfRange,
        _ => FieldProblem::NotNumeric(format!("{s:?}")),
    })
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
