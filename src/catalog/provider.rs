//! Read-only in-memory catalog provider.

use crate::catalog::{Category, Product};
use crate::error::StorefrontError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// The storefront catalog: a pre-loaded, immutable set of products and
/// categories. Views query it; nothing in this crate mutates it after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from pre-loaded data.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Load a catalog from its JSON representation. The storefront ships
    /// its catalog as static data rather than fetching it.
    pub fn from_json(data: &str) -> Result<Self, StorefrontError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Serialize the catalog to JSON.
    pub fn to_json(&self) -> Result<String, StorefrontError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate all products.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// All top-level categories, in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by ID.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by ID, failing if absent.
    pub fn require_product(&self, id: &ProductId) -> Result<&Product, StorefrontError> {
        self.product(id)
            .ok_or_else(|| StorefrontError::ProductNotFound(id.to_string()))
    }

    /// Look up a category by slug.
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Look up a category by slug, failing if absent.
    pub fn require_category(&self, slug: &str) -> Result<&Category, StorefrontError> {
        self.category_by_slug(slug)
            .ok_or_else(|| StorefrontError::CategoryNotFound(slug.to_string()))
    }

    /// Products listed on a category page: those whose category or
    /// subcategory slug matches.
    pub fn products_in_category<'a>(&'a self, category: &Category) -> Vec<&'a Product> {
        self.products
            .iter()
            .filter(|p| p.category == category.slug || p.subcategory == category.slug)
            .collect()
    }

    /// Full-text search across name, category, subcategory, description,
    /// and brand. Blank queries return nothing.
    pub fn search<'a>(&'a self, query: &str) -> Vec<&'a Product> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|p| p.matches_query(query))
            .collect()
    }
}
