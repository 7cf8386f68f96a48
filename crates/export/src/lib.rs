//! Serialization boundary: flat table export and full-state snapshots.
//!
//! Pure serialization only — nothing here touches engine correctness.

pub mod snapshot;
pub mod table;

pub use snapshot::{Snapshot, SnapshotError};
pub use table::{Tabular, export_table};
