// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! bfs-compare binary entry point.

use clap::Parser;

use bfs_compare::cli::Cli;
use bfs_compare::output_diagnostic::{print_error, print_warning};
use bfs_compare::runner::{exit_code, regression_message, run};
use bfs_compare::telemetry::init_tracing;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.default_log_level());

    let code = match run(&cli, &mut std::io::stdout().lock()) {
        Ok(comparison) => {
            if let Some(msg) = regression_message(&comparison) {
                print_warning(msg);
            }
            exit_code(&comparison)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "comparison failed");
            print_error(&e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}
