//! Search module.
//!
//! Pure filtering and stable sorting over in-memory product lists; no
//! shared state, no index.

mod filter;
mod query;
mod sort;

pub use filter::ProductFilter;
pub use query::ProductQuery;
pub use sort::SortKey;
