// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! bfs result comparator
//!
//! Compares the current CI run's bfs results with the latest main branch
//! results and reports the change as a workflow annotation.
//!
#![doc = include_str!("../README.md")]

pub mod cli;
pub mod output_diagnostic;
pub mod runner;
pub mod telemetry;
