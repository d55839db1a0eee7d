//! Raw and canonical product record types.
//!
//! [`RawRecord`] is the untrusted shape as it arrives from the catalog store:
//! every field except `id` may be absent, empty, or the wrong type, and no
//! invariants hold on it. The multi-shape fields (`price`, `stock`,
//! `category`) are modeled as untagged enums at the ingestion boundary, with
//! a [`serde_json::Value`] fallback arm so deserialization stays total over
//! arbitrary malformed input.
//!
//! [`CanonicalRecord`] is the strictly-typed output of normalization. It is
//! derived fresh on every call, never mutated in place, and holds no
//! reference back to the raw record that seeded it.

use serde::{Deserialize, Serialize};

use crate::glitch::GlitchIssue;

/// Untrusted product record. Adversarial input; no invariants beyond a
/// non-empty `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Opaque identifier, assumed valid and non-empty.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<RawPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<RawStock>,
    #[serde(default)]
    pub category: RawCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Price as found in the wild: a number, a string that may use a comma as
/// the decimal separator, or any other JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Amount(f64),
    Text(String),
    Invalid(serde_json::Value),
}

/// Stock count as found in the wild: a number (possibly negative), or any
/// other JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawStock {
    Count(f64),
    Invalid(serde_json::Value),
}

/// Category in its three observed input shapes: a plain string, an array of
/// strings, or null/absent. Any other JSON type lands in `Invalid`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCategory {
    #[default]
    Missing,
    One(String),
    Many(Vec<String>),
    Invalid(serde_json::Value),
}

/// Normalized, strictly-typed product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    /// Identifier, copied verbatim from the raw record.
    pub id: String,
    /// Non-empty display name (`"Unknown Product"` when the raw name was
    /// missing or blank).
    pub name: String,
    /// Finite price. Unparseable prices default to 0; a cleanly numeric
    /// negative price passes through unclamped.
    pub price: f64,
    /// Non-negative stock count. Negative or non-numeric raw stock clamps
    /// to 0.
    pub stock: u32,
    /// Non-empty category (`"Uncategorized"` when missing).
    pub category: String,
    /// Original timestamp string when it parsed as ISO-8601, `None` when it
    /// did not.
    pub updated_at: Option<String>,
    /// Cumulative glitch severity, 0–100 inclusive.
    pub glitch_score: u8,
    /// Issues found during normalization, in field discovery order.
    pub glitch_report: Vec<GlitchIssue>,
}

impl CanonicalRecord {
    /// True when normalization found nothing to fix.
    pub fn is_clean(&self) -> bool {
        self.glitch_score == 0
    }

    /// True when the record has sellable stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Re-derive a raw-shaped record from this canonical record, e.g. for
    /// writing an edit back to the store.
    ///
    /// Normalizing the result is a no-op (score 0, no issues) as long as
    /// `updated_at` is `Some`; a null timestamp has no clean raw encoding
    /// and is flagged again on re-ingestion.
    pub fn to_raw(&self) -> RawRecord {
        RawRecord {
            id: self.id.clone(),
            name: Some(self.name.clone()),
            price: Some(RawPrice::Amount(self.price)),
            stock: Some(RawStock::Count(f64::from(self.stock))),
            category: RawCategory::One(self.category.clone()),
            updated_at: self.updated_at.clone(),
        }
    }
}
