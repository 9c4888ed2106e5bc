// SPDX-License-Identifier: PMPL-1.0-or-later
//! Inspector error types.

use dbinspect_storage::{StorageError, TableCapabilities};
use thiserror::Error;

/// Errors that abort report generation.
#[derive(Error, Debug)]
pub enum InspectError {
    /// A database, table or plugin query failed.
    #[error("storage query failed: {0}")]
    Storage(#[from] StorageError),

    /// The table's capabilities match none of the known structures.
    #[error("table {table} has an unrecognised structure: {capabilities:?}")]
    UnknownStructure {
        table: String,
        capabilities: TableCapabilities,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
