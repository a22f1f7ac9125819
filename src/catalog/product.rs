//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are supplied by the catalog and immutable from the cart's
/// perspective; the cart only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Category slug this product belongs to.
    pub category: String,
    /// Subcategory slug.
    pub subcategory: String,
    /// Current unit price.
    pub price: Money,
    /// Pre-discount price, when on sale.
    pub original_price: Option<Money>,
    /// Advertised discount percentage, when on sale.
    pub discount_percent: Option<u8>,
    /// Selling unit label (e.g., "500 g", "1 pack").
    pub unit: String,
    /// Primary image URL.
    pub image_url: String,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
    /// Delivery estimate label (e.g., "12 mins").
    pub delivery_time: String,
    /// Full description for the detail page.
    pub description: String,
    /// Average customer rating (0.0 to 5.0).
    pub rating: f64,
    /// Number of customer reviews.
    pub review_count: i64,
    /// Certified organic.
    pub is_organic: bool,
    /// Freshly stocked produce.
    pub is_fresh: bool,
}

impl Product {
    /// Create a new in-stock product with the given essentials; remaining
    /// fields start empty and can be set directly.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            brand: brand.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            price,
            original_price: None,
            discount_percent: None,
            unit: String::new(),
            image_url: String::new(),
            in_stock: true,
            delivery_time: String::new(),
            description: String::new(),
            rating: 0.0,
            review_count: 0,
            is_organic: false,
            is_fresh: false,
        }
    }

    /// Check if the product is on sale (has a higher original price).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_minor > self.price.amount_minor)
            .unwrap_or(false)
    }

    /// Savings against the original price, if on sale.
    pub fn savings(&self) -> Option<Money> {
        if !self.is_on_sale() {
            return None;
        }
        self.original_price?.try_subtract(&self.price)
    }

    /// Effective discount percentage: the advertised one if present,
    /// otherwise derived from the original price.
    pub fn effective_discount_percent(&self) -> Option<f64> {
        if let Some(advertised) = self.discount_percent {
            return Some(advertised as f64);
        }
        self.original_price.and_then(|op| {
            if op.amount_minor > self.price.amount_minor {
                let savings = op.amount_minor - self.price.amount_minor;
                Some((savings as f64 / op.amount_minor as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Case-insensitive substring match across name, category, subcategory,
    /// description, and brand. This is the storefront's search predicate.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        [
            &self.name,
            &self.category,
            &self.subcategory,
            &self.description,
            &self.brand,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn milk() -> Product {
        let mut p = Product::new(
            ProductId::new("prod-milk"),
            "Amul Taaza Toned Milk",
            "Amul",
            "dairy-and-breakfast",
            "milk",
            Money::new(2700, Currency::INR),
        );
        p.description = "Pasteurised toned milk, 500 ml pouch".to_string();
        p
    }

    #[test]
    fn test_product_creation() {
        let p = milk();
        assert_eq!(p.id.as_str(), "prod-milk");
        assert!(p.in_stock);
        assert!(!p.is_on_sale());
    }

    #[test]
    fn test_on_sale_and_savings() {
        let mut p = milk();
        p.original_price = Some(Money::new(3000, Currency::INR));

        assert!(p.is_on_sale());
        assert_eq!(p.savings(), Some(Money::new(300, Currency::INR)));

        let derived = p.effective_discount_percent().unwrap();
        assert!((derived - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_advertised_discount_wins() {
        let mut p = milk();
        p.original_price = Some(Money::new(3000, Currency::INR));
        p.discount_percent = Some(12);
        assert_eq!(p.effective_discount_percent(), Some(12.0));
    }

    #[test]
    fn test_matches_query_across_fields() {
        let p = milk();
        assert!(p.matches_query("amul"));
        assert!(p.matches_query("MILK"));
        assert!(p.matches_query("dairy"));
        assert!(p.matches_query("pouch"));
        assert!(!p.matches_query("chocolate"));
    }

    #[test]
    fn test_blank_query_never_matches() {
        let p = milk();
        assert!(!p.matches_query(""));
        assert!(!p.matches_query("   "));
    }
}
