// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory storage engine for dbinspect.
//
// Keeps tables in a name-ordered `BTreeMap`, so iteration is ascending by
// table name. Supports the four table structures, columns, keyed and
// unkeyed records and plugin registration. Disk usage is not measured from
// real files; it follows a deterministic footprint model so reports over an
// in-memory database are reproducible. Intended for testing, benchmarks and
// producing snapshots.

use std::collections::BTreeMap;

use tracing::debug;

use crate::backend::{DatabaseView, Plugin, TableCapabilities, TableView};
use crate::error::StorageError;
use crate::snapshot::{DatabaseSnapshot, PluginSnapshot, TableSnapshot};

/// Ids below this value are reserved for built-in types.
pub const FIRST_USER_ID: u32 = 256;

/// Fixed bytes for the database's own header and object registry.
pub const DATABASE_HEADER_BYTES: u64 = 16 * 1024;

/// Fixed bytes for a column's header segment.
pub const COLUMN_HEADER_BYTES: u64 = 4 * 1024;

/// Bytes per record slot, in tables and in columns.
pub const RECORD_SLOT_BYTES: u64 = 8;

/// Storage structure of an in-memory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Structure {
    Array,
    Hash,
    PatriciaTrie,
    DoubleArrayTrie,
}

impl Structure {
    fn capabilities(self) -> TableCapabilities {
        match self {
            Structure::Array => TableCapabilities::ARRAY,
            Structure::Hash => TableCapabilities::HASH,
            Structure::PatriciaTrie => TableCapabilities::PATRICIA_TRIE,
            Structure::DoubleArrayTrie => TableCapabilities::DOUBLE_ARRAY_TRIE,
        }
    }

    fn header_bytes(self) -> u64 {
        match self {
            Structure::Array => 4 * 1024,
            Structure::Hash => 16 * 1024,
            Structure::PatriciaTrie => 32 * 1024,
            Structure::DoubleArrayTrie => 64 * 1024,
        }
    }
}

/// Options for [`InMemoryDatabase::create_table`].
///
/// The default is an array table, which has no key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    structure: Structure,
    key_type: Option<String>,
}

impl TableOptions {
    /// An array table: records are addressed by id only.
    pub fn array() -> Self {
        Self {
            structure: Structure::Array,
            key_type: None,
        }
    }

    /// A hash table keyed by `key_type`.
    pub fn hash(key_type: impl Into<String>) -> Self {
        Self::keyed(Structure::Hash, key_type)
    }

    /// A patricia trie table keyed by `key_type`.
    pub fn patricia_trie(key_type: impl Into<String>) -> Self {
        Self::keyed(Structure::PatriciaTrie, key_type)
    }

    /// A double array trie table keyed by `key_type`.
    pub fn double_array_trie(key_type: impl Into<String>) -> Self {
        Self::keyed(Structure::DoubleArrayTrie, key_type)
    }

    fn keyed(structure: Structure, key_type: impl Into<String>) -> Self {
        Self {
            structure,
            key_type: Some(key_type.into()),
        }
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::array()
    }
}

#[derive(Debug, Clone)]
struct MemoryColumn {
    name: String,
    value_type: String,
}

/// A table owned by an [`InMemoryDatabase`].
#[derive(Debug, Clone)]
pub struct MemoryTable {
    id: u32,
    name: String,
    path: String,
    structure: Structure,
    key_type: Option<String>,
    columns: Vec<MemoryColumn>,
    /// Key -> record id, keyed tables only.
    keys: BTreeMap<String, u64>,
    n_records: u64,
    key_bytes: u64,
}

impl MemoryTable {
    /// Column names in definition order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Value type of the named column, if it exists.
    pub fn column_type(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value_type.as_str())
    }

    fn table_bytes(&self) -> u64 {
        self.structure.header_bytes() + self.n_records * RECORD_SLOT_BYTES + self.key_bytes
    }

    fn columns_bytes(&self) -> u64 {
        self.columns.len() as u64 * (COLUMN_HEADER_BYTES + self.n_records * RECORD_SLOT_BYTES)
    }
}

impl TableView for MemoryTable {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn disk_usage(&self) -> Result<u64, StorageError> {
        Ok(self.table_bytes())
    }

    fn record_count(&self) -> Result<u64, StorageError> {
        Ok(self.n_records)
    }

    fn column_count(&self) -> Result<u64, StorageError> {
        Ok(self.columns.len() as u64)
    }

    fn capabilities(&self) -> TableCapabilities {
        self.structure.capabilities()
    }

    fn key_domain_name(&self) -> Result<String, StorageError> {
        self.key_type
            .clone()
            .ok_or_else(|| StorageError::NoKeyDomain(self.name.clone()))
    }
}

/// An in-memory database.
///
/// # Example
///
/// ```rust
/// use dbinspect_storage::backend::{DatabaseView, TableView};
/// use dbinspect_storage::memory::{InMemoryDatabase, TableOptions};
///
/// let mut db = InMemoryDatabase::new("/tmp/db");
/// db.create_table("Users", TableOptions::default()).unwrap();
/// db.add_column("Users", "name", "ShortText").unwrap();
/// db.add_record("Users", None).unwrap();
///
/// let tables = db.tables().unwrap();
/// assert_eq!(tables[0].name(), "Users");
/// assert_eq!(db.total_column_count().unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryDatabase {
    path: String,
    next_id: u32,
    tables: BTreeMap<String, MemoryTable>,
    plugins: Vec<Plugin>,
}

impl InMemoryDatabase {
    /// Create an empty database located at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            next_id: FIRST_USER_ID,
            tables: BTreeMap::new(),
            plugins: Vec::new(),
        }
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&MemoryTable> {
        self.tables.get(name)
    }

    /// Create a table and return its object id.
    pub fn create_table(&mut self, name: &str, options: TableOptions) -> Result<u32, StorageError> {
        if self.tables.contains_key(name) {
            return Err(StorageError::DuplicateTable(name.to_string()));
        }

        let id = self.allocate_id();
        let table = MemoryTable {
            id,
            name: name.to_string(),
            path: self.object_path(id),
            structure: options.structure,
            key_type: options.key_type,
            columns: Vec::new(),
            keys: BTreeMap::new(),
            n_records: 0,
            key_bytes: 0,
        };
        debug!(id = id, table = %name, structure = ?table.structure, "Created table");
        self.tables.insert(name.to_string(), table);
        Ok(id)
    }

    /// Define a column on `table` and return its object id.
    pub fn add_column(
        &mut self,
        table: &str,
        name: &str,
        value_type: &str,
    ) -> Result<u32, StorageError> {
        let exists = self
            .table(table)
            .ok_or_else(|| StorageError::TableNotFound(table.to_string()))?
            .columns
            .iter()
            .any(|c| c.name == name);
        if exists {
            return Err(StorageError::DuplicateColumn {
                table: table.to_string(),
                column: name.to_string(),
            });
        }

        let id = self.allocate_id();
        let target = self.table_mut(table)?;
        target.columns.push(MemoryColumn {
            name: name.to_string(),
            value_type: value_type.to_string(),
        });
        debug!(id = id, table = %table, column = %name, "Added column");
        Ok(id)
    }

    /// Add a record and return its record id (ids start at 1 and are never
    /// reused, so the newest id equals the table's record count).
    ///
    /// Array tables reject keys and keyed tables require one. Adding a key
    /// that already exists returns the existing record id.
    pub fn add_record(&mut self, table: &str, key: Option<&str>) -> Result<u64, StorageError> {
        let target = self.table_mut(table)?;
        let keyed = target.structure.capabilities().keyed;

        match (keyed, key) {
            (false, Some(_)) => Err(StorageError::KeyNotAllowed(table.to_string())),
            (true, None) => Err(StorageError::KeyRequired(table.to_string())),
            (false, None) => {
                target.n_records += 1;
                Ok(target.n_records)
            }
            (true, Some(key)) => {
                if let Some(&existing) = target.keys.get(key) {
                    return Ok(existing);
                }
                target.n_records += 1;
                let id = target.n_records;
                target.key_bytes += key.len() as u64;
                target.keys.insert(key.to_string(), id);
                Ok(id)
            }
        }
    }

    /// Register a plugin by name.
    ///
    /// The platform's loadable-module suffix is attached to the descriptor.
    /// Registering the same name twice is a no-op.
    pub fn register_plugin(&mut self, name: &str) {
        if self.plugins.iter().any(|p| p.name == name) {
            return;
        }
        debug!(plugin = %name, "Registered plugin");
        self.plugins
            .push(Plugin::new(name, std::env::consts::DLL_SUFFIX));
    }

    /// Export a point-in-time snapshot of the database's metadata.
    pub fn snapshot(&self) -> DatabaseSnapshot {
        DatabaseSnapshot {
            path: self.path.clone(),
            disk_usage: self.footprint(),
            tables: self
                .tables
                .values()
                .map(|t| TableSnapshot {
                    id: t.id,
                    name: t.name.clone(),
                    path: t.path.clone(),
                    disk_usage: t.table_bytes(),
                    n_records: t.n_records,
                    n_columns: t.columns.len() as u64,
                    capabilities: t.structure.capabilities(),
                    key_type: t.key_type.clone(),
                })
                .collect(),
            plugins: self
                .plugins
                .iter()
                .map(|p| PluginSnapshot {
                    name: p.name.clone(),
                    suffix: p.suffix.clone(),
                })
                .collect(),
        }
    }

    fn footprint(&self) -> u64 {
        DATABASE_HEADER_BYTES
            + self
                .tables
                .values()
                .map(|t| t.table_bytes() + t.columns_bytes())
                .sum::<u64>()
    }

    fn table_mut(&mut self, name: &str) -> Result<&mut MemoryTable, StorageError> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| StorageError::TableNotFound(name.to_string()))
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn object_path(&self, id: u32) -> String {
        format!("{}.{:07X}", self.path, id)
    }
}

impl DatabaseView for InMemoryDatabase {
    type Table = MemoryTable;

    fn path(&self) -> &str {
        &self.path
    }

    fn disk_usage(&self) -> Result<u64, StorageError> {
        Ok(self.footprint())
    }

    fn tables(&self) -> Result<Vec<&MemoryTable>, StorageError> {
        Ok(self.tables.values().collect())
    }

    fn registered_plugins(&self) -> Result<Vec<Plugin>, StorageError> {
        Ok(self.plugins.clone())
    }
}
