//! cq-normalize — turns untrusted raw catalog records into canonical ones.
//!
//! The entry point is [`normalize`]: a total function that never fails.
//! Malformed fields are absorbed into safe defaults, each contributing a
//! [`GlitchIssue`](cq_model::GlitchIssue) and a penalty to the record's
//! glitch score. Dirty data is a first-class, displayable state here, not a
//! rejected one; the only control-flow error in the whole system belongs to
//! the store (record-not-found), never to normalization.

pub mod engine;
pub mod fields;
pub mod score;

pub use engine::{normalize, normalize_all};
pub use fields::{
    CATEGORY_FALLBACK, FieldOutcome, NAME_FALLBACK, PENALTY_CATEGORY_LIST,
    PENALTY_CATEGORY_MISSING, PENALTY_NAME_INVALID, PENALTY_PRICE_TEXT,
    PENALTY_PRICE_UNPARSEABLE, PENALTY_STOCK_INVALID, PENALTY_UPDATED_AT_INVALID,
};
pub use score::GlitchTally;
