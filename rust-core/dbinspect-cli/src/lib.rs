// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//!
//! dbinspect: print a structural report for a database snapshot.
//!
//! Reads a JSON metadata snapshot (as produced by
//! `InMemoryDatabase::snapshot`/`DatabaseSnapshot::to_json`) and writes the
//! report to stdout or to a file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use dbinspect_report::{Inspector, InspectorConfig, TableOrder};
use dbinspect_storage::DatabaseSnapshot;

/// dbinspect: structural report for a database snapshot.
#[derive(Parser, Debug)]
#[command(name = "dbinspect", version, about = "Database inspection reports")]
pub struct Cli {
    /// JSON metadata snapshot to report on.
    pub snapshot: PathBuf,

    /// Order of table blocks: `name` or `as-reported`.
    #[arg(long, default_value = "name")]
    pub order: TableOrder,

    /// Write the report to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Load the snapshot named on the command line.
pub fn load_snapshot(path: &Path) -> Result<DatabaseSnapshot> {
    DatabaseSnapshot::from_path(path)
        .with_context(|| format!("Failed to load snapshot {}", path.display()))
}

/// Load the snapshot and render the complete report text.
pub fn render(cli: &Cli) -> Result<String> {
    let snapshot = load_snapshot(&cli.snapshot)?;
    let inspector = Inspector::new(InspectorConfig::with_table_order(cli.order));
    let text = inspector
        .render(&snapshot)
        .context("Failed to generate report")?;
    info!(
        snapshot = %cli.snapshot.display(),
        tables = snapshot.tables.len(),
        "Report rendered"
    );
    Ok(text)
}

/// Render the report for `cli` into `sink`.
pub fn run_to<W: Write>(cli: &Cli, sink: &mut W) -> Result<()> {
    let text = render(cli)?;
    sink.write_all(text.as_bytes())
        .context("Failed to write report")
}

/// Render the report to the destination chosen on the command line.
///
/// The output file is only created once the report has rendered, so a
/// failed run leaves an existing file untouched.
pub fn run(cli: &Cli) -> Result<()> {
    let text = render(cli)?;
    match &cli.output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(text.as_bytes())
                .context("Failed to write report")?;
            lock.flush().context("Failed to flush stdout")
        }
    }
}
