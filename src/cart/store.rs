//! The cart store: owns the session cart and notifies views of changes.

use crate::cart::{CartLine, CartState};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&CartState)>;

/// The authoritative owner of the session cart.
///
/// Views hold a reference to one explicitly constructed store, mutate it
/// through the named operations below, and register callbacks to be told of
/// every change. All operations are synchronous and total: unknown product
/// identifiers and non-positive quantities are defined no-ops or deletions,
/// never errors. After each mutation the store recomputes the derived
/// totals and broadcasts the new state to every subscriber, in subscription
/// order, before returning.
pub struct CartStore {
    state: CartState,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
}

impl CartStore {
    /// Create a store with an empty, closed cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            state: CartState::new(currency),
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// The current cart state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Check if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Quantity of a product in the cart, zero when absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> i64 {
        self.state.quantity_of(product_id)
    }

    /// Register a callback invoked with the new state after every mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&CartState) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let len_before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() < len_before
    }

    /// Add one unit of a product.
    ///
    /// If a line for the product already exists its quantity grows by one;
    /// otherwise a new line is appended after all existing lines.
    pub fn add_item(&mut self, product: &Product) {
        match self
            .state
            .lines
            .iter_mut()
            .find(|l| l.product.id == product.id)
        {
            Some(line) => line.quantity += 1,
            None => self.state.lines.push(CartLine::new(product.clone())),
        }
        self.commit();
    }

    /// Remove a product's line entirely. No-op if absent.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.state.lines.retain(|l| &l.product.id != product_id);
        self.commit();
    }

    /// Set a product's quantity.
    ///
    /// Any quantity <= 0, negative values included, delegates to
    /// [`remove_item`](Self::remove_item). No-op if no line matches.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(line) = self
            .state
            .lines
            .iter_mut()
            .find(|l| &l.product.id == product_id)
        {
            line.quantity = quantity;
        }
        self.commit();
    }

    /// Empty the cart. Leaves the drawer flag untouched.
    pub fn clear(&mut self) {
        self.state.lines.clear();
        self.commit();
    }

    /// Flip the drawer open/closed.
    pub fn toggle(&mut self) {
        self.state.is_open = !self.state.is_open;
        self.commit();
    }

    /// Open the drawer.
    pub fn open(&mut self) {
        self.state.is_open = true;
        self.commit();
    }

    /// Close the drawer.
    pub fn close(&mut self) {
        self.state.is_open = false;
        self.commit();
    }

    /// Single exit path for every mutation: recompute derived totals from
    /// the lines, then broadcast the new state to all subscribers.
    fn commit(&mut self) {
        self.state.recompute_totals();
        tracing::debug!(
            items = self.state.total_items,
            total = %self.state.total_price,
            open = self.state.is_open,
            "cart updated"
        );
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}
