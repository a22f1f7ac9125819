//! Cart state and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One (product, quantity) pairing in the cart.
///
/// Invariant: quantity >= 1. A line at quantity zero is removed from the
/// cart, never kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product this line holds (an owned copy of the catalog record).
    pub product: Product,
    /// Units of the product in the cart.
    pub quantity: i64,
}

impl CartLine {
    /// Create a line with a single unit.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Price of this line: unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// The full cart state views read.
///
/// `total_items` and `total_price` are derived from `lines` and recomputed
/// after every mutation; they are never set independently. `is_open` is the
/// drawer visibility flag and is orthogonal to the line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    /// Line items, in the order their products were first added.
    pub lines: Vec<CartLine>,
    /// Sum of all line quantities.
    pub total_items: i64,
    /// Sum of all line totals.
    pub total_price: Money,
    /// Whether the cart drawer is open.
    pub is_open: bool,
    /// Currency every line in this cart must carry.
    pub currency: Currency,
}

impl CartState {
    /// Create an empty, closed cart in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            total_items: 0,
            total_price: Money::zero(currency),
            is_open: false,
            currency,
        }
    }

    /// Check if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Find the line for a product, if present.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == product_id)
    }

    /// Quantity of a product in the cart, zero when absent. Product cards
    /// read this to render their steppers.
    pub fn quantity_of(&self, product_id: &ProductId) -> i64 {
        self.line(product_id).map(|l| l.quantity).unwrap_or(0)
    }

    /// Recompute both derived totals from the lines.
    ///
    /// Always a full recompute, never an incremental patch, so the totals
    /// cannot drift from the lines.
    pub(crate) fn recompute_totals(&mut self) {
        self.total_items = self.lines.iter().map(|l| l.quantity).sum();
        let line_totals: Vec<Money> = self.lines.iter().map(|l| l.line_total()).collect();
        self.total_price = Money::sum(line_totals.iter(), self.currency);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price_minor: i64) -> Product {
        Product::new(
            ProductId::new(id),
            "Test Product",
            "Brand",
            "category",
            "subcategory",
            Money::new(price_minor, Currency::INR),
        )
    }

    #[test]
    fn test_empty_state() {
        let state = CartState::new(Currency::INR);
        assert!(state.is_empty());
        assert_eq!(state.total_items, 0);
        assert!(state.total_price.is_zero());
        assert!(!state.is_open);
    }

    #[test]
    fn test_line_total() {
        let mut line = CartLine::new(product("prod-1", 2500));
        line.quantity = 3;
        assert_eq!(line.line_total(), Money::new(7500, Currency::INR));
    }

    #[test]
    fn test_recompute_totals() {
        let mut state = CartState::new(Currency::INR);
        state.lines.push(CartLine {
            product: product("prod-1", 10000),
            quantity: 2,
        });
        state.lines.push(CartLine {
            product: product("prod-2", 5000),
            quantity: 1,
        });
        state.recompute_totals();

        assert_eq!(state.total_items, 3);
        assert_eq!(state.total_price, Money::new(25000, Currency::INR));
    }

    #[test]
    fn test_quantity_of_absent_product() {
        let state = CartState::new(Currency::INR);
        assert_eq!(state.quantity_of(&ProductId::new("prod-1")), 0);
    }
}
