//! Financial entries: the append-only log of sales and expenses.

pub mod entry;

pub use entry::{EntryKind, FinancialEntry, RecordEntry};
