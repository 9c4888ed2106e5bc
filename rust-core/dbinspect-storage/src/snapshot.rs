// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Serializable metadata snapshots.
//
// A snapshot is a frozen copy of everything an inspector reads from a
// database. It implements the same `DatabaseView`/`TableView` traits as a
// live engine, so reports can be produced offline from a JSON file. Field
// values are taken as-is: a snapshot may describe capability combinations
// no engine produces, and it is up to consumers to reject them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::backend::{DatabaseView, Plugin, TableCapabilities, TableView};
use crate::error::StorageError;

/// Frozen metadata for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub id: u32,
    pub name: String,
    pub path: String,
    pub disk_usage: u64,
    #[serde(default)]
    pub n_records: u64,
    #[serde(default)]
    pub n_columns: u64,
    #[serde(default)]
    pub capabilities: TableCapabilities,
    /// Key domain name, present for keyed tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
}

/// Frozen descriptor for one registered plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSnapshot {
    pub name: String,
    #[serde(default)]
    pub suffix: String,
}

/// Frozen metadata for a whole database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSnapshot {
    pub path: String,
    pub disk_usage: u64,
    /// Tables in the order the engine reported them.
    #[serde(default)]
    pub tables: Vec<TableSnapshot>,
    /// Plugins in registration order.
    #[serde(default)]
    pub plugins: Vec<PluginSnapshot>,
}

impl DatabaseSnapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON snapshot file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl TableView for TableSnapshot {
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
        Ok(self.disk_usage)
    }

    fn record_count(&self) -> Result<u64, StorageError> {
        Ok(self.n_records)
    }

    fn column_count(&self) -> Result<u64, StorageError> {
        Ok(self.n_columns)
    }

    fn capabilities(&self) -> TableCapabilities {
        self.capabilities
    }

    fn key_domain_name(&self) -> Result<String, StorageError> {
        self.key_type
            .clone()
            .ok_or_else(|| StorageError::NoKeyDomain(self.name.clone()))
    }
}

impl DatabaseView for DatabaseSnapshot {
    type Table = TableSnapshot;

    fn path(&self) -> &str {
        &self.path
    }

    fn disk_usage(&self) -> Result<u64, StorageError> {
        Ok(self.disk_usage)
    }

    fn tables(&self) -> Result<Vec<&TableSnapshot>, StorageError> {
        Ok(self.tables.iter().collect())
    }

    fn registered_plugins(&self) -> Result<Vec<Plugin>, StorageError> {
        Ok(self
            .plugins
            .iter()
            .map(|p| Plugin::new(p.name.clone(), p.suffix.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "path": "/var/lib/db/main.db",
        "disk_usage": 2097152,
        "tables": [
            {
                "id": 257,
                "name": "Bookmarks",
                "path": "/var/lib/db/main.db.0000101",
                "disk_usage": 4104,
                "n_records": 2,
                "capabilities": { "keyed": true },
                "key_type": "ShortText"
            },
            {
                "id": 256,
                "name": "Users",
                "path": "/var/lib/db/main.db.0000100",
                "disk_usage": 4096,
                "n_records": 1,
                "n_columns": 2
            }
        ],
        "plugins": [ { "name": "query_expanders/tsv", "suffix": ".so" } ]
    }"#;

    #[test]
    fn test_from_json() {
        let snapshot = DatabaseSnapshot::from_json(SAMPLE).unwrap();
        assert_eq!(snapshot.path(), "/var/lib/db/main.db");
        assert_eq!(snapshot.tables.len(), 2);
        assert_eq!(snapshot.tables[0].capabilities, TableCapabilities::HASH);
        assert_eq!(snapshot.tables[1].capabilities, TableCapabilities::ARRAY);
        assert_eq!(snapshot.tables[1].key_type, None);
    }

    #[test]
    fn test_totals_are_sums() {
        let snapshot = DatabaseSnapshot::from_json(SAMPLE).unwrap();
        assert_eq!(snapshot.total_record_count().unwrap(), 3);
        assert_eq!(snapshot.total_column_count().unwrap(), 2);
    }

    #[test]
    fn test_tables_keep_reported_order() {
        let snapshot = DatabaseSnapshot::from_json(SAMPLE).unwrap();
        let names: Vec<&str> = snapshot.tables().unwrap().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Bookmarks", "Users"]);
    }

    #[test]
    fn test_plugins() {
        let snapshot = DatabaseSnapshot::from_json(SAMPLE).unwrap();
        let plugins = snapshot.registered_plugins().unwrap();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].display_name(), "query_expanders/tsv.so");
    }

    #[test]
    fn test_missing_key_type_is_an_error() {
        let snapshot = DatabaseSnapshot::from_json(SAMPLE).unwrap();
        let users = &snapshot.tables[1];
        assert!(matches!(
            users.key_domain_name(),
            Err(StorageError::NoKeyDomain(name)) if name == "Users"
        ));
    }

    #[test]
    fn test_json_survives_reload() {
        let snapshot = DatabaseSnapshot::from_json(SAMPLE).unwrap();
        let reloaded = DatabaseSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(reloaded, snapshot);
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("dbinspect-snapshot-does-not-exist.json");
        let err = DatabaseSnapshot::from_path(&path).unwrap_err();
        assert!(matches!(err, StorageError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_from_path_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "dbinspect-snapshot-{}.json",
            std::process::id()
        ));
        fs::write(&path, SAMPLE).unwrap();
        let loaded = DatabaseSnapshot::from_path(&path);
        fs::remove_file(&path).ok();
        assert_eq!(loaded.unwrap(), DatabaseSnapshot::from_json(SAMPLE).unwrap());
    }

    #[test]
    fn test_invalid_json() {
        let err = DatabaseSnapshot::from_json("{ \"path\": 1 }").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
