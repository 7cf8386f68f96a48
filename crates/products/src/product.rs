use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use trastienda_core::{DomainError, DomainResult, ProductId};

/// Catalog + stock record for one tracked item.
///
/// SKU is the lookup key for stock movements, but uniqueness is *not*
/// enforced: several products may share a SKU and a movement updates all of
/// them identically. Products are never deleted; only `stock` mutates after
/// registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub model: String,
    pub sku: String,
    pub lot: String,
    pub location: String,
    pub barcode: Option<String>,
    /// Unit acquisition cost. Never negative.
    pub unit_cost: f64,
    /// Unit sale price. Never negative.
    pub sale_price: f64,
    /// On-hand quantity. Kept at zero or above by movement application.
    pub stock: i64,
    pub received_on: NaiveDate,
    pub expected_delivery: Option<NaiveDate>,
}

/// Request: register a new product.
///
/// Numeric fields are optional because callers forward raw form input; a
/// missing or unparseable number arrives as `None` and coerces to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterProduct {
    pub model: String,
    pub sku: String,
    pub lot: String,
    pub location: String,
    pub barcode: Option<String>,
    pub unit_cost: Option<f64>,
    pub sale_price: Option<f64>,
    pub stock: Option<i64>,
    pub received_on: NaiveDate,
    pub expected_delivery: Option<NaiveDate>,
}

impl Product {
    /// Build a product from a registration request.
    ///
    /// Only model and SKU presence is validated. Missing numerics default to
    /// zero; negative magnitudes are clamped to zero so the record's
    /// invariants hold without rejecting the request.
    pub fn register(req: RegisterProduct) -> DomainResult<Self> {
        let model = req.model.trim().to_string();
        let sku = req.sku.trim().to_string();
        if model.is_empty() {
            return Err(DomainError::validation("product model must not be empty"));
        }
        if sku.is_empty() {
            return Err(DomainError::validation("product sku must not be empty"));
        }

        Ok(Self {
            id: ProductId::new(),
            model,
            sku,
            lot: req.lot,
            location: req.location,
            barcode: req.barcode,
            unit_cost: coerce_money(req.unit_cost),
            sale_price: coerce_money(req.sale_price),
            stock: req.stock.unwrap_or(0).max(0),
            received_on: req.received_on,
            expected_delivery: req.expected_delivery,
        })
    }

    /// Prefix match for a scanned code against barcode or SKU.
    ///
    /// Scanner integration is out of scope; a scan is just a string the
    /// caller hands us, matched by prefix.
    pub fn matches_code(&self, code: &str) -> bool {
        if code.is_empty() {
            return false;
        }
        self.barcode.as_deref().is_some_and(|b| b.starts_with(code))
            || self.sku.starts_with(code)
    }

    /// Value of the on-hand stock at acquisition cost.
    pub fn stock_value(&self) -> f64 {
        self.stock as f64 * self.unit_cost
    }

    /// Revenue if the whole on-hand stock sold at the sale price.
    pub fn stock_revenue(&self) -> f64 {
        self.stock as f64 * self.sale_price
    }
}

fn coerce_money(raw: Option<f64>) -> f64 {
    match raw {
        Some(v) if v.is_finite() => v.max(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(model: &str, sku: &str) -> RegisterProduct {
        RegisterProduct {
            model: model.to_string(),
            sku: sku.to_string(),
            lot: "L-01".to_string(),
            location: "A1".to_string(),
            barcode: Some("7501031311309".to_string()),
            unit_cost: Some(55.0),
            sale_price: Some(120.0),
            stock: Some(18),
            received_on: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            expected_delivery: None,
        }
    }

    #[test]
    fn register_keeps_supplied_fields() {
        let product = Product::register(request("Runner Azul", "RUN-001")).unwrap();
        assert_eq!(product.model, "Runner Azul");
        assert_eq!(product.sku, "RUN-001");
        assert_eq!(product.stock, 18);
        assert_eq!(product.unit_cost, 55.0);
    }

    #[test]
    fn missing_numerics_coerce_to_zero() {
        let mut req = request("Runner Azul", "RUN-001");
        req.unit_cost = None;
        req.sale_price = None;
        req.stock = None;
        let product = Product::register(req).unwrap();
        assert_eq!(product.unit_cost, 0.0);
        assert_eq!(product.sale_price, 0.0);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn negative_numerics_clamp_to_zero() {
        let mut req = request("Runner Azul", "RUN-001");
        req.unit_cost = Some(-10.0);
        req.stock = Some(-3);
        let product = Product::register(req).unwrap();
        assert_eq!(product.unit_cost, 0.0);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn blank_model_or_sku_is_rejected() {
        assert!(Product::register(request("  ", "RUN-001")).is_err());
        assert!(Product::register(request("Runner Azul", "")).is_err());
    }

    #[test]
    fn scan_code_matches_by_prefix() {
        let product = Product::register(request("Runner Azul", "RUN-001")).unwrap();
        assert!(product.matches_code("750103"));
        assert!(product.matches_code("RUN-"));
        assert!(!product.matches_code("XYZ"));
        assert!(!product.matches_code(""));
    }

    #[test]
    fn stock_valuation_helpers() {
        let product = Product::register(request("Runner Azul", "RUN-001")).unwrap();
        assert_eq!(product.stock_value(), 18.0 * 55.0);
        assert_eq!(product.stock_revenue(), 18.0 * 120.0);
    }
}
