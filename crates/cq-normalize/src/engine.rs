//! The normalization engine: raw record in, canonical record out.

use cq_model::{CanonicalRecord, RawRecord};

use crate::fields::{
    normalize_category, normalize_name, normalize_price, normalize_stock, normalize_updated_at,
};
use crate::score::GlitchTally;

/// Normalize one raw record into its canonical form.
///
/// Total and non-failing: every malformed field degrades to a safe default
/// and shows up in the glitch report instead of raising an error. Fields are
/// evaluated in the fixed order name → price → stock → category → updatedAt,
/// which is also the order of the resulting glitch report.
pub fn normalize(raw: &RawRecord) -> CanonicalRecord {
    let mut tally = GlitchTally::new();

    let name = tally.absorb(normalize_name(raw));
    let price = tally.absorb(normalize_price(raw));
    let stock = tally.absorb(normalize_stock(raw));
    let category = tally.absorb(normalize_category(raw));
    let updated_at = tally.absorb(normalize_updated_at(raw));

    let (glitch_score, glitch_report) = tally.finish();

    CanonicalRecord {
        id: raw.id.clone(),
        name,
        price,
        stock,
        category,
        updated_at,
        glitch_score,
        glitch_report,
    }
}

/// Normalize a whole collection, preserving input order.
pub fn normalize_all(records: &[RawRecord]) -> Vec<CanonicalRecord> {
    records.iter().map(normalize).collect()
}
