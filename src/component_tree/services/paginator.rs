/// Paging - position of a page within a total result count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    page_index: usize,
    page_size: usize,
    total: usize,
}

impl Paging {
    /// Creates paging for a 1-based page index
    ///
    /// Callers validate `page_index >= 1` and `page_size >= 1`; a zero index
    /// is treated as the first page.
    pub fn new(page_index: usize, page_size: usize, total: usize) -> Self {
        Self {
            page_index: page_index.max(1),
            page_size,
            total,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn offset(&self) -> usize {
        (self.page_index - 1).saturating_mul(self.page_size)
    }

    /// Number of items this page holds: min(page size, max(0, total - offset))
    pub fn items_on_page(&self) -> usize {
        self.total.saturating_sub(self.offset()).min(self.page_size)
    }
}

/// Paginator service slicing an already sorted, fully loaded component list
pub struct Paginator;

impl Paginator {
    /// Returns the items of the requested page
    ///
    /// An offset past the end yields an empty page.
    pub fn paginate<T>(items: Vec<T>, paging: &Paging) -> Vec<T> {
        items
            .into_iter()
            .skip(paging.offset())
            .take(paging.page_size())
            .collect()
    }
}
