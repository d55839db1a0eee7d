//! Paginate stage: fixed-size page slicing with clamping.

use cq_model::CanonicalRecord;

/// One page of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<CanonicalRecord>,
    /// The page actually served, after clamping.
    pub page: usize,
    /// `ceil(len / page_size)`, at least 1 even for an empty collection.
    pub total_pages: usize,
}

/// Slice one page out of `records`.
///
/// Total: an out-of-range page request clamps to the nearest valid page
/// instead of erroring, an empty collection yields one empty page, and a
/// zero `page_size` is treated as 1.
pub fn paginate(records: &[CanonicalRecord], page: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let total_pages = records.len().div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let items = records.iter().skip(start).take(page_size).cloned().collect();

    Page {
        items,
        page,
        total_pages,
    }
}
