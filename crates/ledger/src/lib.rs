//! `trastienda-ledger` — the entity store, the appliers, and the aggregator.
//!
//! A [`Store`] owns the three ordered collections (products, stock
//! movements, financial entries) plus the running cash balance. The apply
//! operations validate a request, mutate the store, and append to the
//! relevant log; malformed requests are dropped without touching state.
//! [`Summary`] derives the dashboard metrics fresh from a store snapshot on
//! every call.

pub mod aggregate;
pub mod report;
pub mod shared;
pub mod store;

pub use aggregate::Summary;
pub use report::{Budget, MonthlyPerformance};
pub use shared::SharedStore;
pub use store::{EntryApplied, MovementApplied, Store};
