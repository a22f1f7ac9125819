//! Product catalog module.
//!
//! Contains types for products, categories, and the read-only in-memory
//! catalog provider the views query.

mod category;
mod product;
mod provider;

pub use category::{slug_from_name, Category, Subcategory};
pub use product::Product;
pub use provider::Catalog;
