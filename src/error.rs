//! Storefront error types.
//!
//! The cart store itself is total: unknown identifiers and non-positive
//! quantities are defined no-ops or deletions, never errors. Errors only
//! arise at the fallible edges (catalog lookups and parsing).

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found in the catalog.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Unrecognized sort key from a query parameter.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Unrecognized currency code.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Malformed catalog data.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for StorefrontError {
    fn from(e: serde_json::Error) -> Self {
        StorefrontError::SerializationError(e.to_string())
    }
}
