//! Product query builder.

use crate::catalog::Product;
use crate::search::{ProductFilter, SortKey};
use serde::{Deserialize, Serialize};

/// A query over an in-memory product list: filters ANDed together, then a
/// stable sort.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductQuery {
    /// Text query, when the user searched.
    pub text: Option<String>,
    /// Filters to apply.
    pub filters: Vec<ProductFilter>,
    /// Sort key.
    pub sort: SortKey,
}

impl ProductQuery {
    /// Create an empty query (matches everything, catalog order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query. Blank input is ignored.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.trim().is_empty() {
            self.text = Some(text.clone());
            self.filters.push(ProductFilter::Text(text));
        }
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: ProductFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Run the query: keep products passing every filter, then stable-sort.
    pub fn run(&self, products: &[Product]) -> Vec<Product> {
        let mut results: Vec<Product> = products
            .iter()
            .filter(|p| self.filters.iter().all(|f| f.matches(p)))
            .cloned()
            .collect();
        self.sort.apply(&mut results);
        results
    }
}
