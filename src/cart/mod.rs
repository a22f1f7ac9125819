//! Shopping cart module.
//!
//! Contains the session cart state, line items, and the store that owns
//! them and notifies views of changes.

mod state;
mod store;

pub use state::{CartLine, CartState};
pub use store::{CartStore, SubscriberId};
