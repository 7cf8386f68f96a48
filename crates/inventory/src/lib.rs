//! Stock movements: the append-only log of inventory changes.

pub mod movement;

pub use movement::{MovementKind, RecordMovement, StockMovement};
