use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use trastienda_core::{DomainError, DomainResult, MovementId};
use trastienda_products::Product;

/// Direction of a stock movement. Determines the sign of the stored
/// quantity regardless of the sign the caller typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Inbound,
    Outbound,
    Adjustment,
}

impl MovementKind {
    /// Normalize a raw caller-typed quantity into a signed one.
    ///
    /// Inbound forces positive, outbound forces negative, adjustment trusts
    /// the caller's sign. Saturating so `i64::MIN` cannot panic the
    /// normalization.
    pub fn signed(self, raw: i64) -> i64 {
        match self {
            MovementKind::Inbound => raw.saturating_abs(),
            MovementKind::Outbound => -raw.saturating_abs(),
            MovementKind::Adjustment => raw,
        }
    }
}

/// One recorded stock movement. Immutable once created (append-only log).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: MovementId,
    pub kind: MovementKind,
    /// Advisory reference to `Product.sku`. Unmatched is not an error.
    pub sku: String,
    pub lot: String,
    /// Signed quantity, sign already normalized from `kind`.
    pub quantity: i64,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

/// Request: record a stock movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMovement {
    pub kind: MovementKind,
    pub sku: String,
    pub lot: String,
    /// Raw quantity as typed. `None` means absent or unparseable.
    pub quantity: Option<i64>,
    pub reason: String,
}

impl StockMovement {
    /// Validate a request and build the movement record.
    ///
    /// Rejects an empty SKU or a missing quantity; everything else is
    /// accepted. The occurrence instant is passed in so callers stamp "now"
    /// and tests stay deterministic.
    pub fn record(req: RecordMovement, occurred_at: DateTime<Utc>) -> DomainResult<Self> {
        let sku = req.sku.trim().to_string();
        if sku.is_empty() {
            return Err(DomainError::validation("movement sku must not be empty"));
        }
        let raw = req
            .quantity
            .ok_or_else(|| DomainError::validation("movement quantity is required"))?;

        Ok(Self {
            id: MovementId::new(),
            kind: req.kind,
            sku,
            lot: req.lot,
            quantity: req.kind.signed(raw),
            reason: req.reason,
            occurred_at,
        })
    }

    /// Apply this movement to every product whose SKU matches.
    ///
    /// Stock clamps at zero instead of going negative, and the addition
    /// saturates so extreme quantities cannot overflow. Duplicate SKUs are
    /// all updated identically; an unmatched SKU touches nothing. Returns
    /// the number of products touched.
    pub fn apply_to(&self, products: &mut [Product]) -> usize {
        let mut touched = 0;
        for product in products.iter_mut().filter(|p| p.sku == self.sku) {
            product.stock = product.stock.saturating_add(self.quantity).max(0);
            touched += 1;
        }
        touched
    }
}
