// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Result file written by the current CI run
pub const DEFAULT_CURRENT: &str = "bfs-result.json";
/// Result file fetched from the latest main branch run
pub const DEFAULT_BASELINE: &str = "latest-bfs-result.json";

/// Compare bfs results against the main branch baseline
#[derive(Parser, Clone, Debug)]
#[command(
    name = "bfs-compare",
    version,
    about = "Compare bfs test results against the main branch baseline"
)]
pub struct Cli {
    /// Results of the current run
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CURRENT)]
    pub current: PathBuf,

    /// Results of the main branch run to compare against
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BASELINE)]
    pub baseline: PathBuf,

    /// Log loaded records and computed deltas to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Tracing level used when `BFS_COMPARE_LOG` is not set
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
