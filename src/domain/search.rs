use serde::{Deserialize, Serialize};

use crate::domain::types::SortDirection;

/// Paged, filterable and sortable category query.
///
/// `page` is zero-based. An empty `terms` string disables filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySearchQuery {
    /// Zero-based page index.
    pub page: usize,
    /// Number of items per page.
    pub per_page: usize,
    /// Case-insensitive substring matched against name and description.
    pub terms: String,
    /// Field to sort by, e.g. `name` or `createdAt`.
    pub sort: String,
    /// Sort direction applied to `sort`.
    pub direction: SortDirection,
}

impl Default for CategorySearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 10,
            terms: String::new(),
            sort: "name".to_string(),
            direction: SortDirection::Asc,
        }
    }
}

impl CategorySearchQuery {
    pub fn new(
        page: usize,
        per_page: usize,
        terms: impl Into<String>,
        sort: impl Into<String>,
        direction: SortDirection,
    ) -> Self {
        Self {
            page,
            per_page,
            terms: terms.into(),
            sort: sort.into(),
            direction,
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }

    pub fn search(mut self, terms: impl Into<String>) -> Self {
        self.terms = terms.into();
        self
    }

    pub fn sort_by(mut self, sort: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = sort.into();
        self.direction = direction;
        self
    }

    /// Whether the query filters by free-text terms.
    pub fn has_terms(&self) -> bool {
        !self.terms.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lists_first_page_by_name() {
        let query = CategorySearchQuery::default();
        assert_eq!(
            query,
            CategorySearchQuery::new(0, 10, "", "name", SortDirection::Asc)
        );
        assert!(!query.has_terms());
    }

    #[test]
    fn blank_terms_do_not_filter() {
        assert!(!CategorySearchQuery::default().search("   ").has_terms());
        assert!(CategorySearchQuery::default().search(" fil ").has_terms());
    }
}
