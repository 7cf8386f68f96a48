use std::sync::{Arc, PoisonError, RwLock};

use trastienda_finance::RecordEntry;
use trastienda_inventory::RecordMovement;
use trastienda_products::RegisterProduct;

use crate::aggregate::Summary;
use crate::store::{EntryApplied, MovementApplied, Store};

/// A [`Store`] behind a lock, for callers that handle requests from more
/// than one place at once (e.g. a server thread per request).
///
/// Apply calls take the write lock, so the financial-entry append and the
/// balance update stay one atomic step and movements against a SKU
/// serialize. A poisoned lock is recovered: appliers validate before
/// mutating, so a panic cannot leave a half-applied store behind.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Read access to the current snapshot.
    pub fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Summary metrics for the current snapshot.
    pub fn summary(&self) -> Summary {
        self.read(Summary::compute)
    }

    pub fn register_product(&self, req: RegisterProduct) -> Option<trastienda_products::Product> {
        self.write(|store| store.register_product(req))
    }

    pub fn apply_stock_movement(&self, req: RecordMovement) -> Option<MovementApplied> {
        self.write(|store| store.apply_stock_movement(req))
    }

    pub fn apply_financial_entry(&self, req: RecordEntry) -> Option<EntryApplied> {
        self.write(|store| store.apply_financial_entry(req))
    }

    fn write<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
