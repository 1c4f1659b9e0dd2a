//! Shopping cart store.
//!
//! The [`CartStore`] owns the ordered list of line items, restores it from
//! [`KeyValueStorage`] when constructed, writes it back after every
//! mutation and tells registered [`CartObserver`]s to re-render.
//!
//! # Lifecycle
//!
//! ```text
//! load ──► add_item / remove_item ──► persist ──► notify observers
//! ```
//!
//! The store is a plain owned value. Wiring it up as the single cart of a
//! page is the job of the outermost layer (see `boot` and the CLI).

mod observer;

use core::fmt;

use game_mania_core::{CartLineItem, Price};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::instrument;

use crate::storage::{KeyValueStorage, StorageError};

pub use observer::{CartObserver, SubscriptionId};

/// Storage key under which the cart is persisted.
pub const CART_STORAGE_KEY: &str = "gamemania_carrinho";

/// Errors returned by cart mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Persisting the cart failed.
    #[error("failed to persist cart: {0}")]
    Storage(#[from] StorageError),

    /// Encoding the cart snapshot failed.
    #[error("failed to encode cart: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Whether the cart holds anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartStatus {
    /// No line items.
    Empty,
    /// At least one line item.
    ItemsPresent,
}

/// The shopping cart.
pub struct CartStore<S> {
    items: Vec<CartLineItem>,
    storage: S,
    observers: Vec<(SubscriptionId, Box<dyn CartObserver>)>,
    next_subscription: u64,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Restore the cart from `storage`.
    ///
    /// A missing entry, an unreadable backend or a snapshot that is not a
    /// JSON array all yield an empty cart. Entries of an array that are not
    /// valid line items are dropped one by one; the rest are kept.
    #[instrument(skip_all)]
    pub fn load(storage: S) -> Self {
        let items = match storage.get_item(CART_STORAGE_KEY) {
            Ok(Some(snapshot)) => match serde_json::from_str::<Vec<serde_json::Value>>(&snapshot) {
                Ok(entries) => valid_entries(entries),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding malformed cart snapshot");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "cart storage unreadable, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(items = items.len(), "cart loaded");

        Self {
            items,
            storage,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Append `item`, persist, and notify observers.
    ///
    /// Duplicates are kept: adding a product twice yields two line items.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted. The item stays in
    /// the in-memory cart and observers are not notified.
    #[instrument(skip(self, item), fields(name = item.name()))]
    pub fn add_item(&mut self, item: CartLineItem) -> Result<(), CartError> {
        self.items.push(item);
        self.persist()?;
        tracing::info!(items = self.items.len(), "item added to cart");
        self.notify();
        Ok(())
    }

    /// Remove the item at `index`, persist, and notify observers.
    ///
    /// Indices are positions in the current list; every later item shifts
    /// down by one. An out-of-range index changes nothing and returns
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted. The item has
    /// already been removed from the in-memory cart.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, index: usize) -> Result<Option<CartLineItem>, CartError> {
        if index >= self.items.len() {
            tracing::debug!(len = self.items.len(), "ignoring out-of-range removal");
            return Ok(None);
        }

        let removed = self.items.remove(index);
        self.persist()?;
        tracing::info!(items = self.items.len(), "item removed from cart");
        self.notify();
        Ok(Some(removed))
    }

    /// Sum of every item's parsed price. Zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total_price().amount()
    }

    /// Cart total as a [`Price`].
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartLineItem::price).sum()
    }

    /// Line items in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current cart status.
    #[must_use]
    pub fn status(&self) -> CartStatus {
        if self.items.is_empty() {
            CartStatus::Empty
        } else {
            CartStatus::ItemsPresent
        }
    }

    /// Register an observer, notified after every successful mutation.
    pub fn subscribe(&mut self, observer: Box<dyn CartObserver>) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove a previously registered observer.
    ///
    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        self.observers.len() != before
    }

    /// Notify every observer with the current items without mutating.
    pub fn render_now(&mut self) {
        self.notify();
    }

    /// Backing storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store and return its storage.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> Result<(), CartError> {
        let snapshot = serde_json::to_string(&self.items)?;
        self.storage.set_item(CART_STORAGE_KEY, &snapshot)?;
        Ok(())
    }

    fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer.cart_changed(&self.items);
        }
    }
}

fn valid_entries(entries: Vec<serde_json::Value>) -> Vec<CartLineItem> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            serde_json::from_value(entry)
                .inspect_err(|e| tracing::warn!(index, error = %e, "dropping invalid cart entry"))
                .ok()
        })
        .collect()
}

impl<S: fmt::Debug> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("storage", &self.storage)
            .field("observers", &self.observers.len())
            .finish()
    }
}
