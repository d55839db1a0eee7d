//! cq-store — the backing-store collaborator for raw catalog records.
//!
//! A single mutable collection of [`RawRecord`]s, loaded from and saved to a
//! JSON file. The store only ever hands out raw records; normalization is
//! the caller's concern. Reads return clones, so callers never hold
//! references into the store.
//!
//! # Consistency contract
//!
//! The store offers no exclusivity guarantee: the contract for interleaved
//! updates against the same id is "last write observed by the store wins",
//! not "last write issued wins". Callers must not assume atomicity across a
//! get-then-update sequence.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cq_model::{CatalogError, RawCategory, RawPrice, RawRecord, RawStock, RecordField, Result};

/// Partial update to a raw record. Only fields present in the patch are
/// written; everything else keeps its stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<RawPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<RawStock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<RawCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// The fields this patch would write, in canonical field order.
    pub fn fields(&self) -> Vec<RecordField> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push(RecordField::Name);
        }
        if self.price.is_some() {
            fields.push(RecordField::Price);
        }
        if self.stock.is_some() {
            fields.push(RecordField::Stock);
        }
        if self.category.is_some() {
            fields.push(RecordField::Category);
        }
        if self.updated_at.is_some() {
            fields.push(RecordField::UpdatedAt);
        }
        fields
    }
}

/// Audit event describing one applied update. Emitted by
/// [`CatalogStore::update_by_id`] for whatever observability layer the
/// caller runs; the store itself does not log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateEvent {
    /// Id of the updated record.
    pub id: String,
    /// Fields the patch wrote, in canonical field order.
    pub fields: Vec<RecordField>,
    /// When the store applied the update.
    pub at: DateTime<Utc>,
}

/// In-memory catalog of raw records.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    records: Vec<RawRecord>,
}

impl CatalogStore {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// Parse a store from a JSON array of raw records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<RawRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// Load a store from a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Write the store back out as pretty-printed JSON, so an edited
    /// catalog file stays diffable.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, cloned, in stored order.
    pub fn list_all(&self) -> Vec<RawRecord> {
        self.records.clone()
    }

    /// One record by id, cloned. Absence is a lookup miss, not an error.
    pub fn get_by_id(&self, id: &str) -> Option<RawRecord> {
        self.records.iter().find(|record| record.id == id).cloned()
    }

    /// Merge `patch` over the stored record with the given id.
    ///
    /// Returns the updated record plus the audit [`UpdateEvent`]. An unknown
    /// id is a data-integrity error ([`CatalogError::RecordNotFound`]),
    /// never silently defaulted. An empty patch succeeds and produces an
    /// event listing no fields.
    pub fn update_by_id(&mut self, id: &str, patch: &RecordPatch) -> Result<(RawRecord, UpdateEvent)> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| CatalogError::RecordNotFound(id.to_string()))?;

        if let Some(name) = &patch.name {
            record.name = Some(name.clone());
        }
        if let Some(price) = &patch.price {
            record.price = Some(price.clone());
        }
        if let Some(stock) = &patch.stock {
            record.stock = Some(stock.clone());
        }
        if let Some(category) = &patch.category {
            record.category = category.clone();
        }
        if let Some(updated_at) = &patch.updated_at {
            record.updated_at = Some(updated_at.clone());
        }

        let event = UpdateEvent {
            id: id.to_string(),
            fields: patch.fields(),
            at: Utc::now(),
        };
        Ok((record.clone(), event))
    }
}
