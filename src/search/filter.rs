//! Product filter predicates.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A predicate over products. Filters are combined with AND by
/// [`ProductQuery`](crate::search::ProductQuery).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ProductFilter {
    /// Products in a category, by slug.
    Category(String),
    /// Products in a subcategory, by slug.
    Subcategory(String),
    /// Price within an inclusive range; open ends stay unbounded.
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Only in-stock products.
    InStock,
    /// Products of a brand (case-insensitive).
    Brand(String),
    /// Minimum average rating.
    MinRating(f64),
    /// Case-insensitive substring match across name, category, subcategory,
    /// description, and brand.
    Text(String),
    /// Only certified-organic products.
    Organic,
}

impl ProductFilter {
    /// Create a category filter.
    pub fn category(slug: impl Into<String>) -> Self {
        ProductFilter::Category(slug.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        ProductFilter::PriceRange { min, max }
    }

    /// Create an in-stock filter.
    pub fn in_stock() -> Self {
        ProductFilter::InStock
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        ProductFilter::Text(query.into())
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::Category(slug) => &product.category == slug,
            ProductFilter::Subcategory(slug) => &product.subcategory == slug,
            ProductFilter::PriceRange { min, max } => {
                let above_min = min
                    .map(|m| product.price.amount_minor >= m.amount_minor)
                    .unwrap_or(true);
                let below_max = max
                    .map(|m| product.price.amount_minor <= m.amount_minor)
                    .unwrap_or(true);
                above_min && below_max
            }
            ProductFilter::InStock => product.in_stock,
            ProductFilter::Brand(brand) => product.brand.eq_ignore_ascii_case(brand),
            ProductFilter::MinRating(min) => product.rating >= *min,
            ProductFilter::Text(query) => product.matches_query(query),
            ProductFilter::Organic => product.is_organic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Currency;

    fn bananas() -> Product {
        let mut p = Product::new(
            ProductId::new("prod-1"),
            "Robusta Bananas",
            "FreshPick",
            "fruits-and-vegetables",
            "fresh-fruits",
            Money::new(4500, Currency::INR),
        );
        p.rating = 4.3;
        p.is_organic = true;
        p
    }

    #[test]
    fn test_category_filter() {
        let p = bananas();
        assert!(ProductFilter::category("fruits-and-vegetables").matches(&p));
        assert!(!ProductFilter::category("dairy-and-breakfast").matches(&p));
    }

    #[test]
    fn test_price_range_inclusive_bounds() {
        let p = bananas();
        let exact = ProductFilter::price_range(
            Some(Money::new(4500, Currency::INR)),
            Some(Money::new(4500, Currency::INR)),
        );
        assert!(exact.matches(&p));

        let below = ProductFilter::price_range(None, Some(Money::new(4000, Currency::INR)));
        assert!(!below.matches(&p));

        let open_ended = ProductFilter::price_range(Some(Money::new(1000, Currency::INR)), None);
        assert!(open_ended.matches(&p));
    }

    #[test]
    fn test_stock_and_brand_filters() {
        let mut p = bananas();
        assert!(ProductFilter::in_stock().matches(&p));
        p.in_stock = false;
        assert!(!ProductFilter::in_stock().matches(&p));

        assert!(ProductFilter::Brand("freshpick".to_string()).matches(&p));
        assert!(!ProductFilter::Brand("Amul".to_string()).matches(&p));
    }

    #[test]
    fn test_rating_and_organic_filters() {
        let p = bananas();
        assert!(ProductFilter::MinRating(4.0).matches(&p));
        assert!(!ProductFilter::MinRating(4.5).matches(&p));
        assert!(ProductFilter::Organic.matches(&p));
    }

    #[test]
    fn test_text_filter() {
        let p = bananas();
        assert!(ProductFilter::text("banana").matches(&p));
        assert!(!ProductFilter::text("apple").matches(&p));
    }
}
