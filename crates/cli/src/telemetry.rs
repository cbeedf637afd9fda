// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup. Events go to stderr; stdout is reserved for the annotation.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Variable holding an `EnvFilter` directive that overrides the default level
pub const LOG_ENV: &str = "BFS_COMPARE_LOG";

/// Install the global subscriber. A second call is a no-op.
pub fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
