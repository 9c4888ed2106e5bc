// SPDX-License-Identifier: PMPL-1.0-or-later
//! Whole-database reports.
//!
//! The report is assembled completely in memory before anything is written,
//! so a failing collaborator query never leaves a partial report in the
//! sink.

use std::io::Write;

use dbinspect_storage::{DatabaseView, TableView};
use tracing::debug;

use crate::config::{InspectorConfig, TableOrder};
use crate::error::InspectError;
use crate::layout::ReportLayout;
use crate::size::format_size;
use crate::table::render_table;

/// Renders database reports according to an [`InspectorConfig`].
///
/// ```rust
/// use dbinspect_report::Inspector;
/// use dbinspect_storage::InMemoryDatabase;
///
/// let db = InMemoryDatabase::new("/tmp/db");
/// let text = Inspector::default().render(&db).unwrap();
/// assert!(text.starts_with("Database\n  Path:       </tmp/db>\n"));
/// assert!(text.ends_with("  Tables:\n    None\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    config: InspectorConfig,
}

impl Inspector {
    pub fn new(config: InspectorConfig) -> Self {
        Self { config }
    }

    /// Render the full report as text.
    pub fn render<D: DatabaseView>(&self, db: &D) -> Result<String, InspectError> {
        Ok(self.layout(db)?.finish())
    }

    /// Render the full report and write it to `sink` in one piece.
    pub fn report<D: DatabaseView, W: Write>(
        &self,
        db: &D,
        sink: &mut W,
    ) -> Result<(), InspectError> {
        let text = self.render(db)?;
        sink.write_all(text.as_bytes())?;
        Ok(())
    }

    fn layout<D: DatabaseView>(&self, db: &D) -> Result<ReportLayout, InspectError> {
        let mut tables = db.tables()?;
        if self.config.table_order == TableOrder::ByName {
            tables.sort_by(|a, b| a.name().cmp(b.name()));
        }
        let plugins = db.registered_plugins()?;

        let mut layout = ReportLayout::default();
        layout.line("Database");
        layout.try_nested(|l| -> Result<(), InspectError> {
            l.field("Path", format_args!("<{}>", db.path()))
                .field("Disk usage", format_size(db.disk_usage()?))
                .field("N records", db.total_record_count()?)
                .field("N tables", tables.len())
                .field("N columns", db.total_column_count()?);

            l.section("Plugins").nested(|l| {
                if plugins.is_empty() {
                    l.line("None");
                }
                for plugin in &plugins {
                    l.item(plugin.display_name());
                }
            });

            l.section("Tables");
            if tables.is_empty() {
                l.nested(|l| {
                    l.line("None");
                });
            }
            for table in &tables {
                let block = render_table(*table, l.level() + 1)?;
                l.extend(block);
            }
            Ok(())
        })?;

        debug!(
            path = %db.path(),
            tables = tables.len(),
            plugins = plugins.len(),
            "Rendered database report"
        );
        Ok(layout)
    }
}
