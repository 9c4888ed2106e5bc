// SPDX-License-Identifier: PMPL-1.0-or-later
//! dbinspect binary
//!
//! Prints a structural report for a database snapshot.

use clap::Parser;

use dbinspect_cli::Cli;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "Parsed arguments");

    dbinspect_cli::run(&cli)
}
