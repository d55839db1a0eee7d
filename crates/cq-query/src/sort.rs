//! Sort stage: single-column ordering over canonical records.

use std::cmp::Ordering;

use cq_model::CanonicalRecord;

use crate::state::{SortColumn, SortDirection};

/// Return a sorted copy of `records`; the input is never mutated.
///
/// Name ordering is case-folded Unicode code point order — a stand-in for
/// locale collation, adequate for catalog names. Numeric columns use total
/// ordering. Ties between equal keys keep whatever relative order the
/// underlying stable sort gives them, which means repeated direction
/// toggles on the same column may reorder ties; callers must not rely on
/// tie order.
pub fn sort_records(
    records: &[CanonicalRecord],
    column: SortColumn,
    direction: SortDirection,
) -> Vec<CanonicalRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::Name => compare_names(&a.name, &b.name),
            SortColumn::Price => a.price.total_cmp(&b.price),
            SortColumn::GlitchScore => a.glitch_score.cmp(&b.glitch_score),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
