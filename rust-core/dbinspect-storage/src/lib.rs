// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// dbinspect storage views
//
// This crate defines the read-only views an inspector consumes from a
// table-oriented storage engine. The `DatabaseView` and `TableView` traits
// are the whole contract: anything that can answer them can be reported on.
//
// # Modules
//
// - [`backend`] -- The `DatabaseView`/`TableView` traits, table capability
//   flags and plugin descriptors.
// - [`error`] -- The `StorageError` enum covering all collaborator failures.
// - [`memory`] -- A small in-memory engine with the four table structures
//   (array, hash, patricia trie, double array trie).
// - [`snapshot`] -- A serde snapshot format that implements the views, so a
//   report can be produced from a JSON file.
//
// # Example
//
// ```rust
// use dbinspect_storage::backend::DatabaseView;
// use dbinspect_storage::memory::{InMemoryDatabase, TableOptions};
//
// let mut db = InMemoryDatabase::new("/tmp/db");
// db.create_table("Users", TableOptions::hash("ShortText")).unwrap();
// db.add_record("Users", Some("alice")).unwrap();
//
// assert_eq!(db.total_record_count().unwrap(), 1);
// ```

pub mod backend;
pub mod error;
pub mod memory;
pub mod snapshot;

// Re-export the most commonly used types at the crate root for convenience.
pub use backend::{DatabaseView, Plugin, TableCapabilities, TableView};
pub use error::StorageError;
pub use memory::{InMemoryDatabase, TableOptions};
pub use snapshot::{DatabaseSnapshot, PluginSnapshot, TableSnapshot};
