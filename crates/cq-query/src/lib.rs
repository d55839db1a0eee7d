//! cq-query — the filter → sort → paginate pipeline over canonical records.
//!
//! Three composable, pure stages applied in that fixed order, parameterized
//! by an explicit [`QueryState`] value object. Every stage returns a new
//! sequence and treats empty results as a valid state, never an error.

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod state;

pub use filter::{distinct_categories, filter_records};
pub use paginate::{Page, paginate};
pub use sort::sort_records;
pub use state::{
    ALL_CATEGORIES, DEFAULT_PAGE_SIZE, QueryState, SortColumn, SortDirection, StockFilter,
};

use cq_model::CanonicalRecord;

/// Run the full pipeline for one query: filter, then sort, then paginate,
/// using the parameters held by `state`.
pub fn run_query(records: &[CanonicalRecord], state: &QueryState) -> Page {
    let filtered = filter_records(records, state);
    let sorted = sort_records(&filtered, state.sort_column(), state.sort_direction());
    paginate(&sorted, state.page(), state.page_size())
}
