use serde::{Deserialize, Serialize};

/// One page of results.
///
/// `total` counts every item matching the query, not just this page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination<T> {
    /// Zero-based index of this page.
    pub current_page: usize,
    /// Requested page size.
    pub per_page: usize,
    /// Number of matching items across all pages.
    pub total: usize,
    /// Items of this page, at most `per_page` of them.
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: usize, per_page: usize, total: usize, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Project every item, leaving the paging metadata untouched.
    pub fn map<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
