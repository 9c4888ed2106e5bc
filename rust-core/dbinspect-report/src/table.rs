// SPDX-License-Identifier: PMPL-1.0-or-later
//! Per-table report blocks.

use dbinspect_storage::TableView;
use tracing::debug;

use crate::classify::{classify, key_type_name};
use crate::error::InspectError;
use crate::layout::ReportLayout;
use crate::size::format_size;

/// Render one table's block with its heading at `level`.
///
/// ```text
/// Users:
///   ID:         256
///   Type:       hash
///   Key type:   ShortText
///   Path:       </tmp/db.0000100>
///   Disk usage: 16.000KiB
///   N records:  0
/// ```
pub fn render_table<T: TableView + ?Sized>(
    table: &T,
    level: usize,
) -> Result<ReportLayout, InspectError> {
    let kind = classify(table)?;
    let key_type = key_type_name(table, kind)?;
    let disk_usage = table.disk_usage()?;
    let n_records = table.record_count()?;

    let mut layout = ReportLayout::at_level(level);
    layout.section(table.name()).nested(|l| {
        l.field("ID", table.id())
            .field("Type", kind)
            .field("Key type", &key_type)
            .field("Path", format_args!("<{}>", table.path()))
            .field("Disk usage", format_size(disk_usage))
            .field("N records", n_records);
    });

    debug!(table = %table.name(), kind = %kind, records = n_records, "Rendered table block");
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbinspect_storage::{TableCapabilities, TableSnapshot};

    fn users() -> TableSnapshot {
        TableSnapshot {
            id: 256,
            name: "Users".to_string(),
            path: "/tmp/db.0000100".to_string(),
            disk_usage: 16 * 1024,
            n_records: 3,
            n_columns: 0,
            capabilities: TableCapabilities::HASH,
            key_type: Some("ShortText".to_string()),
        }
    }

    #[test]
    fn test_block_at_level_zero() {
        let text = render_table(&users(), 0).unwrap().finish();
        assert_eq!(
            text,
            "Users:\n\
             \x20 ID:         256\n\
             \x20 Type:       hash\n\
             \x20 Key type:   ShortText\n\
             \x20 Path:       </tmp/db.0000100>\n\
             \x20 Disk usage: 16.000KiB\n\
             \x20 N records:  3\n"
        );
    }

    #[test]
    fn test_indent_applies_to_every_line() {
        let layout = render_table(&users(), 2).unwrap();
        let lines = layout.lines();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "    Users:");
        assert!(lines[1..].iter().all(|l| l.starts_with("      ") && !l.starts_with("       ")));
    }

    #[test]
    fn test_array_table_has_no_key() {
        let mut table = users();
        table.capabilities = TableCapabilities::ARRAY;
        table.key_type = None;
        let text = render_table(&table, 0).unwrap().finish();
        assert!(text.contains("  Type:       array\n"));
        assert!(text.contains("  Key type:   (no key)\n"));
    }

    #[test]
    fn test_unknown_structure_fails() {
        let mut table = users();
        table.capabilities.keyed = false;
        table.capabilities.key_update = true;
        assert!(matches!(
            render_table(&table, 0),
            Err(InspectError::UnknownStructure { .. })
        ));
    }
}
