use chrono::Utc;

use trastienda_finance::{FinancialEntry, RecordEntry};
use trastienda_inventory::{RecordMovement, StockMovement};
use trastienda_products::{Product, RegisterProduct};

/// Outcome of applying a stock movement.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementApplied {
    pub movement: StockMovement,
    /// How many products matched the SKU and had their stock updated.
    pub touched: usize,
}

/// Outcome of applying a financial entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryApplied {
    pub entry: FinancialEntry,
    /// Balance after the entry's net cash effect.
    pub cash_balance: f64,
}

/// The in-memory holder of all mutable business records.
///
/// Collections are most-recent-first: every insertion goes to the front.
/// Callers that need chronological order must sort by `occurred_at`
/// themselves. Nothing is ever removed; the only destructive edit in scope
/// is a product's `stock` field under movement application.
///
/// The store is single-writer by construction. Concurrent callers must
/// serialize apply calls (see [`crate::SharedStore`]) so the cash balance
/// stays equal to the opening balance plus every applied entry's net cash
/// effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    products: Vec<Product>,
    movements: Vec<StockMovement>,
    finances: Vec<FinancialEntry>,
    cash_balance: f64,
}

impl Default for Store {
    /// Empty store with a zero opening balance.
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Store {
    /// Empty store with an opening cash balance.
    pub fn new(opening_balance: f64) -> Self {
        Self {
            products: Vec::new(),
            movements: Vec::new(),
            finances: Vec::new(),
            cash_balance: opening_balance,
        }
    }

    /// Rebuild a store from previously captured collections (snapshot
    /// reload). The collections keep whatever order they were captured in.
    pub fn from_parts(
        products: Vec<Product>,
        movements: Vec<StockMovement>,
        finances: Vec<FinancialEntry>,
        cash_balance: f64,
    ) -> Self {
        Self {
            products,
            movements,
            finances,
            cash_balance,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn movements(&self) -> &[StockMovement] {
        &self.movements
    }

    pub fn finances(&self) -> &[FinancialEntry] {
        &self.finances
    }

    pub fn cash_balance(&self) -> f64 {
        self.cash_balance
    }

    /// Products whose SKU or barcode starts with the scanned code.
    pub fn find_by_code(&self, code: &str) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.matches_code(code))
    }

    /// Register a new product at the front of the collection.
    ///
    /// A request without a model or SKU is dropped: the store is left
    /// untouched and `None` is returned.
    pub fn register_product(&mut self, req: RegisterProduct) -> Option<Product> {
        match Product::register(req) {
            Ok(product) => {
                self.products.insert(0, product.clone());
                Some(product)
            }
            Err(err) => {
                tracing::debug!(%err, "dropping product registration");
                None
            }
        }
    }

    /// Validate, normalize, and apply a stock movement.
    ///
    /// Every product matching the SKU gets `stock = max(0, stock + signed)`;
    /// the movement is appended even when no product matches. A request with
    /// an empty SKU or no quantity is dropped (`None`, store untouched).
    pub fn apply_stock_movement(&mut self, req: RecordMovement) -> Option<MovementApplied> {
        let movement = match StockMovement::record(req, Utc::now()) {
            Ok(movement) => movement,
            Err(err) => {
                tracing::debug!(%err, "dropping stock movement");
                return None;
            }
        };

        let touched = movement.apply_to(&mut self.products);
        if touched == 0 {
            tracing::debug!(sku = %movement.sku, "movement sku matched no product");
        }
        self.movements.insert(0, movement.clone());
        Some(MovementApplied { movement, touched })
    }

    /// Validate, normalize, and apply a financial entry.
    ///
    /// The append and the balance update are one step: both happen or
    /// neither. A request with an empty concept or no amount is dropped
    /// (`None`, store untouched).
    pub fn apply_financial_entry(&mut self, req: RecordEntry) -> Option<EntryApplied> {
        let entry = match FinancialEntry::record(req, Utc::now()) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(%err, "dropping financial entry");
                return None;
            }
        };

        self.cash_balance += entry.cash_effect();
        self.finances.insert(0, entry.clone());
        Some(EntryApplied {
            entry,
            cash_balance: self.cash_balance,
        })
    }
}
