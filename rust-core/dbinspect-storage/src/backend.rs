// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Read-only database and table views.
//
// Defines the traits an inspector uses to walk a database's structural
// metadata. Views are borrowed for the duration of a single report; they
// never mutate the engine and carry no state of their own beyond what the
// engine hands out.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Capability flags exposed by a table's storage structure.
///
/// Engines do not advertise a structure name. Instead each table answers
/// what it can do, and consumers derive the structure from that.
///
/// | Structure          | keyed | prefix_search | key_update |
/// |--------------------|-------|---------------|------------|
/// | array              |       |               |            |
/// | hash               | x     |               |            |
/// | patricia trie      | x     | x             |            |
/// | double array trie  | x     | x             | x          |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TableCapabilities {
    /// Records are addressed by a key of the table's key domain.
    pub keyed: bool,
    /// Keys can be enumerated by common prefix.
    pub prefix_search: bool,
    /// Existing keys can be renamed in place.
    pub key_update: bool,
}

impl TableCapabilities {
    /// Capabilities of an array table (record ids only, no key).
    pub const ARRAY: Self = Self {
        keyed: false,
        prefix_search: false,
        key_update: false,
    };

    /// Capabilities of a hash table.
    pub const HASH: Self = Self {
        keyed: true,
        prefix_search: false,
        key_update: false,
    };

    /// Capabilities of a patricia trie table.
    pub const PATRICIA_TRIE: Self = Self {
        keyed: true,
        prefix_search: true,
        key_update: false,
    };

    /// Capabilities of a double array trie table.
    pub const DOUBLE_ARRAY_TRIE: Self = Self {
        keyed: true,
        prefix_search: true,
        key_update: true,
    };
}

/// A plugin registered against a database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    /// Registration name, e.g. `query_expanders/tsv`.
    pub name: String,
    /// Loadable-module suffix supplied by the plugin loader (e.g. `.so`).
    #[serde(default)]
    pub suffix: String,
}

impl Plugin {
    /// Create a plugin descriptor with an explicit module suffix.
    pub fn new(name: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suffix: suffix.into(),
        }
    }

    /// The name as shown to users: registration name followed by the suffix.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.name, self.suffix)
    }
}

/// A read-only view over one table of a database.
pub trait TableView {
    /// Engine-assigned object id, stable for the life of the table.
    fn id(&self) -> u32;

    /// Table name, unique within its database.
    fn name(&self) -> &str;

    /// Filesystem path of the table's backing file.
    fn path(&self) -> &str;

    /// Bytes occupied on disk by the table's backing files.
    fn disk_usage(&self) -> Result<u64, StorageError>;

    /// Number of records currently stored.
    fn record_count(&self) -> Result<u64, StorageError>;

    /// Number of columns defined on the table.
    fn column_count(&self) -> Result<u64, StorageError>;

    /// Capability flags of the table's storage structure.
    fn capabilities(&self) -> TableCapabilities;

    /// Name of the key domain (the key's type).
    ///
    /// Only meaningful for keyed tables; tables without a key return
    /// [`StorageError::NoKeyDomain`].
    fn key_domain_name(&self) -> Result<String, StorageError>;
}

/// A read-only view over a whole database.
pub trait DatabaseView {
    /// Concrete table view handed out by this database.
    type Table: TableView;

    /// Filesystem path of the database.
    fn path(&self) -> &str;

    /// Aggregate bytes occupied on disk by the database.
    fn disk_usage(&self) -> Result<u64, StorageError>;

    /// All user tables, in the engine's iteration order.
    fn tables(&self) -> Result<Vec<&Self::Table>, StorageError>;

    /// Registered plugins, in registration order.
    fn registered_plugins(&self) -> Result<Vec<Plugin>, StorageError>;

    /// Sum of `record_count()` over all tables, saturating at `u64::MAX`.
    fn total_record_count(&self) -> Result<u64, StorageError> {
        self.tables()?
            .into_iter()
            .try_fold(0u64, |total, table| Ok(total.saturating_add(table.record_count()?)))
    }

    /// Sum of `column_count()` over all tables, saturating at `u64::MAX`.
    fn total_column_count(&self) -> Result<u64, StorageError> {
        self.tables()?
            .into_iter()
            .try_fold(0u64, |total, table| Ok(total.saturating_add(table.column_count()?)))
    }
}
