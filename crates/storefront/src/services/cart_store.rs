//! The cart store.
//!
//! Owns the [`Cart`] for the whole process. Every mutation is written to the
//! cart slot of the injected [`KeyValueStore`] before the call returns, as
//! one whole-cart JSON value.
//!
//! Lookups that miss (unknown menu id, id not in the cart) are silent
//! no-ops; they are logged at debug level and never reported to the caller
//! as errors.

use std::rc::Rc;
use std::time::Duration;

use orbit_cafe_core::{MenuItemId, Price};
use serde::Deserialize;
use tracing::instrument;

use crate::models::{Cart, Catalog};
use crate::services::notify::{DEFAULT_TOAST_TIMEOUT, Notifier};
use crate::storage::KeyValueStore;

/// Default storage slot for the cart.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Typed cart messages emitted by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CartIntent {
    Add {
        id: MenuItemId,
        #[serde(default = "one")]
        quantity: u32,
    },
    Increment {
        id: MenuItemId,
    },
    Decrement {
        id: MenuItemId,
    },
    Remove {
        id: MenuItemId,
    },
    Clear,
}

const fn one() -> u32 {
    1
}

/// Cart store settings.
#[derive(Debug, Clone)]
pub struct CartStoreOptions {
    /// Storage slot holding the serialized cart.
    pub storage_key: String,
    /// How long the "added" toast stays visible.
    pub toast_timeout: Duration,
}

impl Default for CartStoreOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_CART_KEY.to_string(),
            toast_timeout: DEFAULT_TOAST_TIMEOUT,
        }
    }
}

/// Owner of the cart state.
pub struct CartStore {
    catalog: Rc<Catalog>,
    storage: Rc<dyn KeyValueStore>,
    notifier: Rc<dyn Notifier>,
    options: CartStoreOptions,
    cart: Cart,
}

impl CartStore {
    /// Create the store, restoring the cart from storage.
    ///
    /// A missing, unreadable, or malformed slot yields an empty cart.
    pub fn load(
        catalog: Rc<Catalog>,
        storage: Rc<dyn KeyValueStore>,
        notifier: Rc<dyn Notifier>,
        options: CartStoreOptions,
    ) -> Self {
        let cart = restore(storage.as_ref(), &options.storage_key);
        tracing::debug!(
            lines = cart.len(),
            key = %options.storage_key,
            "Cart restored"
        );
        Self {
            catalog,
            storage,
            notifier,
            options,
            cart,
        }
    }

    /// Current cart contents.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The catalog this store adds from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Sum of quantities, for the badge.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.cart.total_count()
    }

    /// Sum of `price * quantity`, unrounded.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart.total_price()
    }

    /// Add `quantity` of a catalog item.
    ///
    /// Unknown ids and a zero quantity are ignored. On success the cart is
    /// persisted and an "added" toast is sent.
    #[instrument(skip(self))]
    pub fn add(&mut self, id: MenuItemId, quantity: u32) {
        let Some(item) = self.catalog.get(id) else {
            tracing::debug!("Add ignored, item not in catalog");
            return;
        };
        if quantity == 0 {
            tracing::debug!("Add ignored, zero quantity");
            return;
        }

        self.cart.add(item, quantity);
        let message = format!("{} added", item.title);
        self.persist();
        self.notifier.notify(&message, self.options.toast_timeout);
    }

    /// Raise a line's quantity by one.
    #[instrument(skip(self))]
    pub fn increment(&mut self, id: MenuItemId) {
        if self.cart.increment(id) {
            self.persist();
        } else {
            tracing::debug!("Increment ignored, line not in cart");
        }
    }

    /// Lower a line's quantity by one, stopping at one.
    #[instrument(skip(self))]
    pub fn decrement(&mut self, id: MenuItemId) {
        if self.cart.decrement(id) {
            self.persist();
        } else {
            tracing::debug!("Decrement ignored, line not in cart");
        }
    }

    /// Drop a line. Persists whether or not the line existed.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: MenuItemId) {
        if !self.cart.remove(id) {
            tracing::debug!("Remove found no line");
        }
        self.persist();
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Apply a UI message.
    pub fn dispatch(&mut self, intent: CartIntent) {
        match intent {
            CartIntent::Add { id, quantity } => self.add(id, quantity),
            CartIntent::Increment { id } => self.increment(id),
            CartIntent::Decrement { id } => self.decrement(id),
            CartIntent::Remove { id } => self.remove(id),
            CartIntent::Clear => self.clear(),
        }
    }

    fn persist(&self) {
        let encoded = match self.cart.to_json() {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode cart");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.options.storage_key, &encoded) {
            tracing::error!(
                error = %e,
                key = %self.options.storage_key,
                "Failed to persist cart"
            );
        }
    }
}

/// Read the stored cart, falling back to empty on any failure.
fn restore(storage: &dyn KeyValueStore, key: &str) -> Cart {
    match storage.get(key) {
        Ok(Some(json)) => Cart::from_json(&json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, key, "Stored cart is malformed, starting empty");
            Cart::new()
        }),
        Ok(None) => Cart::new(),
        Err(e) => {
            tracing::warn!(error = %e, key, "Failed to read stored cart, starting empty");
            Cart::new()
        }
    }
}
