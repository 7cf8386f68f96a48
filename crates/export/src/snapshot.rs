//! Full-state snapshot: capture a store into one structured document and
//! reload it later.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use trastienda_finance::FinancialEntry;
use trastienda_inventory::StockMovement;
use trastienda_ledger::Store;
use trastienda_products::Product;

/// Snapshot codec failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot JSON codec failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// One document holding the whole store: the three collections plus the
/// cash balance. Field order is not significant on reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub movements: Vec<StockMovement>,
    pub finances: Vec<FinancialEntry>,
    pub cash_balance: f64,
}

impl Snapshot {
    /// Capture the current store state, collection order preserved.
    pub fn capture(store: &Store) -> Self {
        Self {
            products: store.products().to_vec(),
            movements: store.movements().to_vec(),
            finances: store.finances().to_vec(),
            cash_balance: store.cash_balance(),
        }
    }

    /// Rebuild an equivalent store from this snapshot.
    pub fn restore(self) -> Store {
        Store::from_parts(
            self.products,
            self.movements,
            self.finances,
            self.cash_balance,
        )
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }
}
