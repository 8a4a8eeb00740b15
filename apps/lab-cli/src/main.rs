//! # solid-lab
//!
//! Command-line driver for the lab-core exercises.
//!
//! ## Usage
//! ```bash
//! solid-lab register 24111 26                 # rejected by SksLimitRule
//! solid-lab register 0244 20 --no-prerequisite
//! solid-lab price 999 33                      # final 736.26
//! solid-lab checkout Andi 50000000 --method qris
//! solid-lab --json demo
//!
//! LAB_SKS_LIMIT=20 RUST_LOG=debug solid-lab register 1049 22
//! ```
//!
//! Results go to stdout, logs to stderr. Exit code 1 means the business
//! outcome was negative (registration rejected, payment failed).

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::LabConfig;

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();

    let config = LabConfig::load()?;
    info!(
        sks_limit = config.sks_limit,
        conflicts = config.schedule_conflicts.len(),
        "Configuration loaded"
    );
    debug!(?config, "Full configuration");

    let report = commands::run(cli.command, &config)?;
    report.print(cli.json)?;

    Ok(if report.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=lab_core=warn` - Only rule failures from the core
/// - Default: `info,lab_core=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lab_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
