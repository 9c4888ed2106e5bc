// SPDX-License-Identifier: PMPL-1.0-or-later
//! Table structure classification.
//!
//! Maps a table's capability flags onto the closed set of structures the
//! report knows how to name. Capability combinations outside that set are
//! rejected instead of being rendered as something else.

use std::fmt;

use dbinspect_storage::{TableCapabilities, TableView};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::InspectError;

/// Rendered in place of a key type for tables without a key.
pub const NO_KEY: &str = "(no key)";

/// Storage structure of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Array,
    Hash,
    PatriciaTrie,
    DoubleArrayTrie,
}

impl TableKind {
    /// All structures, in declaration order.
    pub const ALL: [TableKind; 4] = [
        TableKind::Array,
        TableKind::Hash,
        TableKind::PatriciaTrie,
        TableKind::DoubleArrayTrie,
    ];

    /// Derive the structure from capability flags.
    ///
    /// Returns `None` for combinations no known structure has.
    pub fn from_capabilities(caps: TableCapabilities) -> Option<Self> {
        match caps {
            TableCapabilities::ARRAY => Some(TableKind::Array),
            TableCapabilities::HASH => Some(TableKind::Hash),
            TableCapabilities::PATRICIA_TRIE => Some(TableKind::PatriciaTrie),
            TableCapabilities::DOUBLE_ARRAY_TRIE => Some(TableKind::DoubleArrayTrie),
            _ => None,
        }
    }

    /// Whether records of this structure are addressed by key.
    pub fn supports_key(self) -> bool {
        !matches!(self, TableKind::Array)
    }

    /// Lower-case, space-separated label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            TableKind::Array => "array",
            TableKind::Hash => "hash",
            TableKind::PatriciaTrie => "patricia trie",
            TableKind::DoubleArrayTrie => "double array trie",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a table by probing its capabilities.
pub fn classify<T: TableView + ?Sized>(table: &T) -> Result<TableKind, InspectError> {
    let capabilities = table.capabilities();
    TableKind::from_capabilities(capabilities).ok_or_else(|| {
        warn!(table = %table.name(), ?capabilities, "Unrecognised table structure");
        InspectError::UnknownStructure {
            table: table.name().to_string(),
            capabilities,
        }
    })
}

/// Whether the table supports keyed lookup.
pub fn supports_key<T: TableView + ?Sized>(table: &T) -> Result<bool, InspectError> {
    Ok(classify(table)?.supports_key())
}

/// The key type shown for a table: its key domain, or [`NO_KEY`].
///
/// The key domain is only queried when the structure supports keys.
pub fn key_type_name<T: TableView + ?Sized>(
    table: &T,
    kind: TableKind,
) -> Result<String, InspectError> {
    if kind.supports_key() {
        Ok(table.key_domain_name()?)
    } else {
        Ok(NO_KEY.to_string())
    }
}
