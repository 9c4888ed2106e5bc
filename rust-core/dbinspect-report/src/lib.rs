// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//!
//! dbinspect report generation.
//!
//! Walks a database view's structural metadata and renders a deterministic,
//! indented plain-text report:
//!
//! ```text
//! Database
//!   Path:       </var/lib/db/main.db>
//!   Disk usage: 16.000KiB
//!   N records:  0
//!   N tables:   0
//!   N columns:  0
//!   Plugins:
//!     None
//!   Tables:
//!     None
//! ```
//!
//! - [`size`]: byte counts as KiB/MiB.
//! - [`classify`]: table structure from capability flags.
//! - [`table`]: one table's block.
//! - [`database`]: the whole report and the [`Inspector`] entry point.
//! - [`layout`]: indentation and label alignment shared by all of the above.

pub mod classify;
pub mod config;
pub mod database;
pub mod error;
pub mod layout;
pub mod size;
pub mod table;

pub use classify::{classify, supports_key, TableKind, NO_KEY};
pub use config::{InspectorConfig, TableOrder};
pub use database::Inspector;
pub use error::InspectError;
pub use layout::ReportLayout;
pub use size::format_size;
pub use table::render_table;
