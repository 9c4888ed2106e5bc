// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Storage error types for dbinspect collaborator views.
//
// Provides a unified error enum covering every failure a database or table
// view may report: I/O errors, missing or duplicate schema objects, key
// misuse, snapshot (de)serialization and engine unavailability.

use thiserror::Error;

/// Errors that can occur when querying or mutating a storage engine.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred in the underlying storage layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The named table does not exist.
    #[error("table not found: {0}")]
    TableNotFound(String),

    /// A table with this name already exists.
    #[error("table already exists: {0}")]
    DuplicateTable(String),

    /// The table already has a column with this name.
    #[error("column already exists: {table}.{column}")]
    DuplicateColumn {
        /// Owning table.
        table: String,
        /// Column name.
        column: String,
    },

    /// A keyed table was given a record without a key.
    #[error("table {0} requires a key for new records")]
    KeyRequired(String),

    /// A key was given for a table that does not support keys.
    #[error("table {0} does not support keys")]
    KeyNotAllowed(String),

    /// The key domain was requested from a table without a key.
    #[error("table {0} has no key domain")]
    NoKeyDomain(String),

    /// Failed to serialize or deserialize a snapshot.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The storage engine is not available (e.g. closed or poisoned).
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file gone");
        let err = StorageError::Io(io_err);
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_table_not_found_display() {
        let err = StorageError::TableNotFound("Users".to_string());
        assert_eq!(err.to_string(), "table not found: Users");
    }

    #[test]
    fn test_duplicate_column_display() {
        let err = StorageError::DuplicateColumn {
            table: "Users".to_string(),
            column: "name".to_string(),
        };
        assert_eq!(err.to_string(), "column already exists: Users.name");
    }

    #[test]
    fn test_key_errors_display() {
        assert!(StorageError::KeyRequired("Users".to_string())
            .to_string()
            .contains("requires a key"));
        assert!(StorageError::KeyNotAllowed("Logs".to_string())
            .to_string()
            .contains("does not support keys"));
        assert_eq!(
            StorageError::NoKeyDomain("Logs".to_string()).to_string(),
            "table Logs has no key domain"
        );
    }

    #[test]
    fn test_serialization_error_from_json() {
        let json_err = serde_json::from_str::<u64>("not a number").unwrap_err();
        let err: StorageError = json_err.into();
        assert!(err.to_string().contains("serialization error"));
    }

    #[test]
    fn test_backend_unavailable_display() {
        let err = StorageError::BackendUnavailable("database closed".to_string());
        assert!(err.to_string().contains("backend unavailable"));
    }
}
