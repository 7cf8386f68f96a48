use serde::Serialize;

use trastienda_finance::EntryKind;

use crate::store::Store;

/// Derived dashboard metrics.
///
/// Always recomputed fresh from the current store snapshot; nothing here is
/// cached or incrementally maintained, so a summary can never be stale
/// after an apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Σ stock × unit cost over all products.
    pub inventory_value: f64,
    /// Σ stock × sale price over all products.
    pub potential_revenue: f64,
    /// Σ amounts of sale entries (already signed positive).
    pub total_sales: f64,
    /// |Σ amounts of expense entries| — absolute value of the sum, not the
    /// sum of absolute values.
    pub total_expenses: f64,
    pub net_cash: f64,
    /// round(max(0, net / sales) × 100), or 0 when there are no sales.
    /// Whole percent, like the report folds.
    pub saving_rate: i64,
}

impl Summary {
    /// Fold the current collections into the summary metrics.
    pub fn compute(store: &Store) -> Self {
        let inventory_value = store.products().iter().map(|p| p.stock_value()).sum();
        let potential_revenue = store.products().iter().map(|p| p.stock_revenue()).sum();

        let total_sales: f64 = store
            .finances()
            .iter()
            .filter(|e| e.kind == EntryKind::Sale)
            .map(|e| e.amount)
            .sum();
        let total_expenses: f64 = store
            .finances()
            .iter()
            .filter(|e| e.kind == EntryKind::Expense)
            .map(|e| e.amount)
            .sum::<f64>()
            .abs();
        let net_cash = total_sales - total_expenses;

        let saving_rate = if total_sales > 0.0 {
            ((net_cash / total_sales) * 100.0).round().max(0.0) as i64
        } else {
            0
        };

        Self {
            inventory_value,
            potential_revenue,
            total_sales,
            total_expenses,
            net_cash,
            saving_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use trastienda_finance::RecordEntry;
    use trastienda_products::RegisterProduct;

    fn entry(kind: EntryKind, amount: f64) -> RecordEntry {
        RecordEntry {
            concept: "movimiento".to_string(),
            kind,
            amount: Some(amount),
            shipping: None,
            commission: None,
            tax: None,
            tithe: None,
        }
    }

    fn seeded_store() -> Store {
        let mut store = Store::new(0.0);
        // Raw expense amounts arrive negative from
        // the caller and normalize to the same magnitudes.
        store.apply_financial_entry(entry(EntryKind::Sale, 1450.0));
        store.apply_financial_entry(entry(EntryKind::Sale, 980.0));
        store.apply_financial_entry(entry(EntryKind::Expense, -120.0));
        store.apply_financial_entry(entry(EntryKind::Expense, -95.0));
        store.apply_financial_entry(entry(EntryKind::Expense, -150.0));
        store
    }

    #[test]
    fn totals_split_by_kind() {
        let summary = Summary::compute(&seeded_store());
        assert_eq!(summary.total_sales, 2430.0);
        assert_eq!(summary.total_expenses, 365.0);
        assert_eq!(summary.net_cash, 2065.0);
    }

    #[test]
    fn saving_rate_rounds_and_clamps() {
        let summary = Summary::compute(&seeded_store());
        // 2065 / 2430 = 84.97% -> 85.
        assert_eq!(summary.saving_rate, 85);

        let empty = Store::new(0.0);
        assert_eq!(Summary::compute(&empty).saving_rate, 0);

        let mut losing = Store::new(0.0);
        losing.apply_financial_entry(entry(EntryKind::Sale, 100.0));
        losing.apply_financial_entry(entry(EntryKind::Expense, 300.0));
        assert_eq!(Summary::compute(&losing).saving_rate, 0);
    }

    #[test]
    fn inventory_metrics_fold_cost_and_price() {
        let mut store = Store::new(0.0);
        store.register_product(RegisterProduct {
            model: "Runner Azul".to_string(),
            sku: "RUN-001".to_string(),
            lot: "L-01".to_string(),
            location: "A1".to_string(),
            barcode: None,
            unit_cost: Some(55.0),
            sale_price: Some(120.0),
            stock: Some(18),
            received_on: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            expected_delivery: None,
        });
        store.register_product(RegisterProduct {
            model: "Trail Roja".to_string(),
            sku: "TRL-002".to_string(),
            lot: "L-02".to_string(),
            location: "B3".to_string(),
            barcode: None,
            unit_cost: Some(40.0),
            sale_price: Some(95.0),
            stock: Some(6),
            received_on: NaiveDate::from_ymd_opt(2024, 9, 3).unwrap(),
            expected_delivery: None,
        });

        let summary = Summary::compute(&store);
        assert_eq!(summary.inventory_value, 18.0 * 55.0 + 6.0 * 40.0);
        assert_eq!(summary.potential_revenue, 18.0 * 120.0 + 6.0 * 95.0);
    }

    #[test]
    fn compute_is_idempotent_and_side_effect_free() {
        let store = seeded_store();
        let before = store.clone();
        let first = Summary::compute(&store);
        let second = Summary::compute(&store);
        assert_eq!(first, second);
        assert_eq!(store, before);
    }
}
