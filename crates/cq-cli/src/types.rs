use std::path::PathBuf;

use cq_model::CanonicalRecord;
use cq_query::Page;
use cq_store::UpdateEvent;

#[derive(Debug)]
pub struct ListOutcome {
    pub catalog: PathBuf,
    pub page: Page,
    /// Records in the catalog before filtering.
    pub total_records: usize,
    /// Records matching the filter, across all pages.
    pub matched: usize,
    /// Records in the catalog with a non-zero glitch score.
    pub glitched: usize,
}

#[derive(Debug)]
pub struct ShowOutcome {
    pub record: CanonicalRecord,
}

#[derive(Debug)]
pub struct UpdateOutcome {
    pub record: CanonicalRecord,
    pub event: UpdateEvent,
    pub written: bool,
}

#[derive(Debug)]
pub struct CategoriesOutcome {
    pub categories: Vec<String>,
}
