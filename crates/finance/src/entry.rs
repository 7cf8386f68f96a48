use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use trastienda_core::{DomainError, DomainResult, EntryId};

/// Kind of financial entry. Determines the sign of the stored amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Sale,
    Expense,
}

impl EntryKind {
    /// Normalize a raw caller-typed amount: sales positive, expenses
    /// negative, whatever sign was typed.
    pub fn signed(self, raw: f64) -> f64 {
        match self {
            EntryKind::Sale => raw.abs(),
            EntryKind::Expense => -raw.abs(),
        }
    }
}

/// One recorded sale or expense. Immutable once created (append-only log).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialEntry {
    pub id: EntryId,
    pub concept: String,
    pub kind: EntryKind,
    /// Signed amount, sign already normalized from `kind`.
    pub amount: f64,
    /// Ancillary cost magnitudes. Always zero or above.
    pub shipping: f64,
    pub commission: f64,
    pub tax: f64,
    pub tithe: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Request: record a financial entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntry {
    pub concept: String,
    pub kind: EntryKind,
    /// Raw amount as typed. `None` means absent or unparseable.
    pub amount: Option<f64>,
    pub shipping: Option<f64>,
    pub commission: Option<f64>,
    pub tax: Option<f64>,
    pub tithe: Option<f64>,
}

impl FinancialEntry {
    /// Validate a request and build the entry record.
    ///
    /// Rejects an empty concept or a missing/non-finite amount. Ancillary
    /// costs default to zero and are taken as magnitudes regardless of the
    /// sign typed.
    pub fn record(req: RecordEntry, occurred_at: DateTime<Utc>) -> DomainResult<Self> {
        let concept = req.concept.trim().to_string();
        if concept.is_empty() {
            return Err(DomainError::validation("entry concept must not be empty"));
        }
        let raw = match req.amount {
            Some(v) if v.is_finite() => v,
            _ => return Err(DomainError::validation("entry amount is required")),
        };

        Ok(Self {
            id: EntryId::new(),
            concept,
            kind: req.kind,
            amount: req.kind.signed(raw),
            shipping: coerce_cost(req.shipping),
            commission: coerce_cost(req.commission),
            tax: coerce_cost(req.tax),
            tithe: coerce_cost(req.tithe),
            occurred_at,
        })
    }

    /// Net effect of this entry on the cash balance:
    /// `amount - shipping - commission - tax - tithe`.
    ///
    /// Ancillary costs reduce cash even on expense entries whose amount may
    /// already include them. That is the source system's rule, kept as-is;
    /// it can double-count a cost category and callers should be aware.
    pub fn cash_effect(&self) -> f64 {
        self.amount - self.shipping - self.commission - self.tax - self.tithe
    }
}

fn coerce_cost(raw: Option<f64>) -> f64 {
    match raw {
        Some(v) if v.is_finite() => v.abs(),
        _ => 0.0,
    }
}
