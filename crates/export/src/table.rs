//! Delimited-text table export.

use trastienda_finance::{EntryKind, FinancialEntry};
use trastienda_inventory::{MovementKind, StockMovement};
use trastienda_products::Product;

/// A record that can be laid out as one row of a flat table.
pub trait Tabular {
    /// Field names for the header row.
    const HEADERS: &'static [&'static str];

    /// One cell per header, in the same order.
    fn row(&self) -> Vec<String>;
}

/// Render records as delimited text: a header row of field names, then one
/// row per record in collection order.
///
/// Values are joined verbatim — an embedded comma in a value is *not*
/// escaped or quoted. Known limitation of the export format, kept on
/// purpose; consumers that need strict CSV must sanitize upstream.
pub fn export_table<'a, T>(rows: impl IntoIterator<Item = &'a T>) -> String
where
    T: Tabular + 'a,
{
    let mut out = String::new();
    out.push_str(&T::HEADERS.join(","));
    out.push('\n');
    for record in rows {
        out.push_str(&record.row().join(","));
        out.push('\n');
    }
    out
}

fn kind_label(kind: MovementKind) -> &'static str {
    match kind {
        MovementKind::Inbound => "inbound",
        MovementKind::Outbound => "outbound",
        MovementKind::Adjustment => "adjustment",
    }
}

fn entry_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Sale => "sale",
        EntryKind::Expense => "expense",
    }
}

impl Tabular for Product {
    const HEADERS: &'static [&'static str] = &[
        "id", "model", "sku", "lot", "location", "barcode", "unitCost", "salePrice", "stock",
        "receivedOn", "expectedDelivery",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.model.clone(),
            self.sku.clone(),
            self.lot.clone(),
            self.location.clone(),
            self.barcode.clone().unwrap_or_default(),
            self.unit_cost.to_string(),
            self.sale_price.to_string(),
            self.stock.to_string(),
            self.received_on.to_string(),
            self.expected_delivery.map(|d| d.to_string()).unwrap_or_default(),
        ]
    }
}

impl Tabular for StockMovement {
    const HEADERS: &'static [&'static str] =
        &["id", "kind", "sku", "lot", "quantity", "reason", "occurredAt"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            kind_label(self.kind).to_string(),
            self.sku.clone(),
            self.lot.clone(),
            self.quantity.to_string(),
            self.reason.clone(),
            self.occurred_at.format("%Y-%m-%d").to_string(),
        ]
    }
}

impl Tabular for FinancialEntry {
    const HEADERS: &'static [&'static str] = &[
        "id", "concept", "kind", "amount", "shipping", "commission", "tax", "tithe", "occurredAt",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.concept.clone(),
            entry_label(self.kind).to_string(),
            self.amount.to_string(),
            self.shipping.to_string(),
            self.commission.to_string(),
            self.tax.to_string(),
            self.tithe.to_string(),
            self.occurred_at.format("%Y-%m-%d").to_string(),
        ]
    }
}
