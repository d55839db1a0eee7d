//! Per-session query parameters as an explicit value object.
//!
//! [`QueryState`] owns the filter, sort, and pagination parameters that the
//! presentation layer used to keep as ad-hoc view state. Fields are private:
//! every filter or sort mutation goes through a method that also resets the
//! current page to 1. A stale page number after a filter change would
//! silently show an empty or wrong page, so the reset is part of the
//! pipeline contract, not a UI nicety.

/// Page size used when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Category sentinel that disables the category predicate.
pub const ALL_CATEGORIES: &str = "All";

/// Stock-status predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockFilter {
    #[default]
    All,
    /// `stock > 0`
    InStock,
    /// `stock <= 0`
    OutOfStock,
}

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Name,
    Price,
    GlitchScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Filter, sort, and pagination parameters for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    search: Option<String>,
    category: Option<String>,
    stock: StockFilter,
    glitched_only: bool,
    sort_column: SortColumn,
    sort_direction: SortDirection,
    page: usize,
    page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            stock: StockFilter::All,
            glitched_only: false,
            sort_column: SortColumn::default(),
            sort_direction: SortDirection::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn stock(&self) -> StockFilter {
        self.stock
    }

    pub fn glitched_only(&self) -> bool {
        self.glitched_only
    }

    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Set the name search term. An empty term clears the predicate.
    pub fn set_search(&mut self, search: Option<String>) {
        self.search = search.filter(|s| !s.is_empty());
        self.reset_page();
    }

    /// Set the category filter. `None` and the [`ALL_CATEGORIES`] sentinel
    /// both disable the predicate.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category.filter(|c| c != ALL_CATEGORIES);
        self.reset_page();
    }

    pub fn set_stock(&mut self, stock: StockFilter) {
        self.stock = stock;
        self.reset_page();
    }

    pub fn set_glitched_only(&mut self, glitched_only: bool) {
        self.glitched_only = glitched_only;
        self.reset_page();
    }

    pub fn set_sort(&mut self, column: SortColumn, direction: SortDirection) {
        self.sort_column = column;
        self.sort_direction = direction;
        self.reset_page();
    }

    /// Toggle sorting the way a table header click does: clicking the
    /// current column flips the direction, clicking a new column sorts it
    /// ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort_column == column {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_column = column;
            self.sort_direction = SortDirection::Ascending;
        }
        self.reset_page();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.reset_page();
    }

    /// Jump to a page directly. Out-of-range values are clamped later by
    /// [`paginate`](crate::paginate); 0 is treated as 1 here.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Advance one page, clamped to `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    /// Go back one page, clamped to 1.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    fn reset_page(&mut self) {
        self.page = 1;
    }
}
