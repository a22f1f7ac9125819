//! Stable sort keys for product lists.

use crate::catalog::Product;
use crate::error::StorefrontError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How a product list is ordered.
///
/// All sorts are stable: products with equal keys keep their original
/// relative order, which is what makes `Relevance` well-defined as "no
/// reordering".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Catalog order, unchanged (default).
    #[default]
    Relevance,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Customer rating, high to low.
    RatingDesc,
    /// Delivery time, fastest first.
    DeliveryAsc,
}

impl SortKey {
    /// Parse a storefront query-param value.
    pub fn parse(value: &str) -> Result<Self, StorefrontError> {
        match value {
            "relevance" => Ok(SortKey::Relevance),
            "price-low" => Ok(SortKey::PriceAsc),
            "price-high" => Ok(SortKey::PriceDesc),
            "rating" => Ok(SortKey::RatingDesc),
            "delivery" => Ok(SortKey::DeliveryAsc),
            _ => Err(StorefrontError::UnknownSortKey(value.to_string())),
        }
    }

    /// Display label for the sort dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Customer Rating",
            SortKey::DeliveryAsc => "Delivery Time",
        }
    }

    /// Stable-sort the products in place under this key.
    pub fn apply(&self, products: &mut [Product]) {
        match self {
            SortKey::Relevance => {}
            SortKey::PriceAsc => {
                products.sort_by_key(|p| p.price.amount_minor);
            }
            SortKey::PriceDesc => {
                products.sort_by_key(|p| std::cmp::Reverse(p.price.amount_minor));
            }
            SortKey::RatingDesc => {
                products.sort_by(|a, b| {
                    b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
                });
            }
            SortKey::DeliveryAsc => {
                products.sort_by_key(|p| delivery_minutes(&p.delivery_time));
            }
        }
    }
}

/// Parse the leading integer out of a delivery label ("12 mins" -> 12).
/// Labels without one sort after everything parseable.
fn delivery_minutes(label: &str) -> i64 {
    let digits: String = label
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(i64::MAX)
}
