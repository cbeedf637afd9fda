// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result file loading.
//!
//! The record of interest is the first top-level entry in source order. The
//! object is read with a streaming visitor that keeps that entry and skips the
//! rest, so textual order is preserved without an ordered map.

use crate::error::ResultError;
use crate::record::ResultRecord;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

/// A loaded result file and the record selected from it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultFile {
    path: PathBuf,
    record: ResultRecord,
}

impl ResultFile {
    /// Read and parse a result file from disk.
    pub fn load(path: &Path) -> Result<Self, ResultError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            let path = path.to_path_buf();
            match source.kind() {
                std::io::ErrorKind::InvalidData => ResultError::Encoding { path, source },
                _ => ResultError::MissingFile { path, source },
            }
        })?;
        Self::parse(path, &content)
    }

    /// Parse result file content; `path` is used for error reporting.
    pub fn parse(path: &Path, content: &str) -> Result<Self, ResultError> {
        let FirstEntry(entry) =
            serde_json::from_str(content).map_err(|source| ResultError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let Some((label, value)) = entry else {
            return Err(ResultError::Empty {
                path: path.to_path_buf(),
            });
        };

        let record = ResultRecord::from_value(path, label, &value)?;
        tracing::debug!(
            path = %path.display(),
            label = %record.label,
            pass = record.pass,
            fail = record.fail,
            sha = ?record.sha,
            total = ?record.total,
            skip = ?record.skip,
            "loaded result file"
        );

        Ok(Self {
            path: path.to_path_buf(),
            record,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &ResultRecord {
        &self.record
    }

    pub fn into_record(self) -> ResultRecord {
        self.record
    }
}

/// The first entry of a JSON object, if it has one.
struct FirstEntry(Option<(String, Value)>);

impl<'de> Deserialize<'de> for FirstEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FirstEntryVisitor)
    }
}

struct FirstEntryVisitor;

impl<'de> Visitor<'de> for FirstEntryVisitor {
    type Value = FirstEntry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object of result records")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let Some((label, mut value)) = map.next_entry::<String, Value>()? else {
            return Ok(FirstEntry(None));
        };

        // A repeated first key keeps its position but takes the later value.
        while let Some(key) = map.next_key::<String>()? {
            if key == label {
                value = map.next_value()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(FirstEntry(Some((label, value))))
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
