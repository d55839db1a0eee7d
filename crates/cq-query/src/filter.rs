//! Filter stage: conjunction of up to four optional predicates.

use cq_model::CanonicalRecord;

use crate::state::{QueryState, StockFilter};

/// Keep the records matching every enabled predicate of `state`.
///
/// Disabled predicates (no search term, no category, stock `All`, glitched
/// toggle off) are no-ops, so a default state passes everything through.
/// Returns a new sequence; input order is preserved.
pub fn filter_records(records: &[CanonicalRecord], state: &QueryState) -> Vec<CanonicalRecord> {
    records
        .iter()
        .filter(|record| matches_state(record, state))
        .cloned()
        .collect()
}

fn matches_state(record: &CanonicalRecord, state: &QueryState) -> bool {
    if let Some(search) = state.search()
        && !record
            .name
            .to_lowercase()
            .contains(&search.to_lowercase())
    {
        return false;
    }

    if let Some(category) = state.category()
        && record.category != category
    {
        return false;
    }

    if state.glitched_only() && record.glitch_score == 0 {
        return false;
    }

    match state.stock() {
        StockFilter::All => true,
        StockFilter::InStock => record.in_stock(),
        StockFilter::OutOfStock => !record.in_stock(),
    }
}

/// The sorted, deduplicated set of categories present in a collection.
/// Feeds category filter choices.
pub fn distinct_categories(records: &[CanonicalRecord]) -> Vec<String> {
    let mut categories: Vec<String> = records.iter().map(|r| r.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}
