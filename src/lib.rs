//! Storefront domain types and logic for a quick-commerce grocery shop.
//!
//! This crate provides the non-visual core of the storefront:
//!
//! - **Catalog**: products, categories, and an in-memory read-only provider
//! - **Cart**: a session cart store with line items, derived totals, and
//!   synchronous change notification for views
//! - **Search**: filters and stable sorting over product lists
//!
//! # Example
//!
//! ```rust
//! use fresh_commerce::prelude::*;
//!
//! let apples = Product::new(
//!     ProductId::new("prod-1"),
//!     "Shimla Apples",
//!     "FreshPick",
//!     "fruits-and-vegetables",
//!     "fresh-fruits",
//!     Money::from_decimal(120.0, Currency::INR),
//! );
//!
//! let mut cart = CartStore::new(Currency::INR);
//! cart.add_item(&apples);
//! cart.add_item(&apples);
//!
//! assert_eq!(cart.state().total_items, 2);
//! assert_eq!(cart.state().total_price, Money::from_decimal(240.0, Currency::INR));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::StorefrontError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StorefrontError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product, Subcategory};

    // Cart
    pub use crate::cart::{CartLine, CartState, CartStore, SubscriberId};

    // Search
    pub use crate::search::{ProductFilter, ProductQuery, SortKey};
}
