// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for bfs-compare binary tests.

#![allow(dead_code)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

pub const CURRENT: &str = "bfs-result.json";
pub const BASELINE: &str = "latest-bfs-result.json";

/// A scratch working directory holding result files.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Workspace with both default result files written from JSON values.
    pub fn with_results(current: Value, baseline: Value) -> Self {
        let ws = Self::new();
        ws.write(CURRENT, &current.to_string());
        ws.write(BASELINE, &baseline.to_string());
        ws
    }

    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).unwrap();
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// bfs-compare running inside this workspace with logging pinned off.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("bfs-compare").unwrap();
        cmd.current_dir(self.dir.path()).env_remove("BFS_COMPARE_LOG");
        cmd
    }
}

/// Result file with a single record.
pub fn results(label: &str, pass: Value, fail: Value) -> Value {
    serde_json::json!({ label: { "pass": pass, "fail": fail } })
}
