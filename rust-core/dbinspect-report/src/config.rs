// SPDX-License-Identifier: PMPL-1.0-or-later
//! Inspector configuration.
//!
//! Defaults reproduce the reference report layout:
//! - table_order: by name (ascending)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Order in which table blocks appear under `Tables:`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableOrder {
    /// Sort by table name, byte-wise ascending.
    #[default]
    ByName,
    /// Keep whatever order the database view returns.
    AsReported,
}

impl FromStr for TableOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" | "by-name" | "by_name" => Ok(TableOrder::ByName),
            "as-reported" | "as_reported" | "engine" => Ok(TableOrder::AsReported),
            other => Err(format!(
                "Unknown table order '{other}'. Valid orders: name, as-reported"
            )),
        }
    }
}

/// Configuration for an [`Inspector`](crate::Inspector).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Order of table blocks.
    pub table_order: TableOrder,
}

impl InspectorConfig {
    /// Config with an explicit table order.
    pub fn with_table_order(table_order: TableOrder) -> Self {
        Self { table_order }
    }
}
