//! Category types for product organization.

use crate::ids::{CategoryId, SubcategoryId};
use serde::{Deserialize, Serialize};

/// Derive a URL slug from a display name the way the storefront routes do:
/// lowercase, whitespace runs become `-`, and `&` becomes `and`.
pub fn slug_from_name(name: &str) -> String {
    name.to_lowercase()
        .replace('&', "and")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// A top-level product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name (e.g., "Dairy & Breakfast").
    pub name: String,
    /// URL-friendly slug (e.g., "dairy-and-breakfast").
    pub slug: String,
    /// Category tile image URL.
    pub image_url: String,
    /// Subcategories under this category.
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Create a category, deriving the slug from the name.
    pub fn new(id: CategoryId, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slug_from_name(&name);
        Self {
            id,
            name,
            slug,
            image_url: image_url.into(),
            subcategories: Vec::new(),
        }
    }

    /// Add a subcategory.
    pub fn add_subcategory(&mut self, subcategory: Subcategory) {
        self.subcategories.push(subcategory);
    }

    /// Find a subcategory by slug.
    pub fn subcategory(&self, slug: &str) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.slug == slug)
    }
}

/// A subcategory within a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subcategory {
    /// Unique subcategory identifier.
    pub id: SubcategoryId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Subcategory tile image URL.
    pub image_url: String,
}

impl Subcategory {
    /// Create a subcategory, deriving the slug from the name.
    pub fn new(id: SubcategoryId, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slug_from_name(&name);
        Self {
            id,
            name,
            slug,
            image_url: image_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_name() {
        assert_eq!(slug_from_name("Dairy & Breakfast"), "dairy-and-breakfast");
        assert_eq!(slug_from_name("Fruits & Vegetables"), "fruits-and-vegetables");
        assert_eq!(slug_from_name("Cold Drinks"), "cold-drinks");
    }

    #[test]
    fn test_category_slug_derived() {
        let cat = Category::new(CategoryId::new("cat-1"), "Munchies & Snacks", "/img/snacks.webp");
        assert_eq!(cat.slug, "munchies-and-snacks");
    }

    #[test]
    fn test_subcategory_lookup() {
        let mut cat = Category::new(CategoryId::new("cat-1"), "Dairy & Breakfast", "");
        cat.add_subcategory(Subcategory::new(SubcategoryId::new("sub-1"), "Milk", ""));
        cat.add_subcategory(Subcategory::new(SubcategoryId::new("sub-2"), "Bread & Eggs", ""));

        assert!(cat.subcategory("milk").is_some());
        assert!(cat.subcategory("bread-and-eggs").is_some());
        assert!(cat.subcategory("cheese").is_none());
    }
}
