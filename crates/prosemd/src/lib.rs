//! # prosemd
//!
//! **CLI Binary**
//!
//! This is the entry point for the `prosemd` command-line application.
//! It wires configuration, lexicon loading and output rendering around
//! `prosemd-core`.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Discover and merge configuration
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod error_hints;
mod logging;
mod progress;
mod render;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use prosemd_config::Cli;

/// Exit status when at least one document could not be scored.
pub const EXIT_PARTIAL_FAILURE: u8 = 2;

/// Entry point used by the `prosemd` binary.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);
    commands::dispatch(cli)
}

/// Render an error chain with actionable hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

fn now_ms() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
