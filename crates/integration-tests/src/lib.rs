//! Integration tests for the Orbit Cafe ordering core.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p orbit-cafe-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Cart store walkthroughs over the built-in menu
//! - `cart_properties` - Cart invariants over arbitrary operation sequences
//! - `checkout_flow` - Validation and submission through `AppState`
//! - `persistence` - File-backed storage across restarts
//!
//! This library holds the shared fixtures.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::rc::Rc;

use orbit_cafe_core::{MenuItemId, Price};
use orbit_cafe_storefront::config::StorefrontConfig;
use orbit_cafe_storefront::models::{Catalog, MenuItem};
use orbit_cafe_storefront::services::{CartStore, CartStoreOptions, ToastOutbox};
use orbit_cafe_storefront::state::{AppState, Intent};
use orbit_cafe_storefront::storage::{KeyValueStore, MemoryStorage};

/// A cart store over in-memory storage, with handles to its collaborators.
pub struct CartFixture {
    pub storage: Rc<MemoryStorage>,
    pub toasts: Rc<ToastOutbox>,
    pub store: CartStore,
}

impl CartFixture {
    /// Store over `catalog` with empty storage.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_storage(catalog, MemoryStorage::new())
    }

    /// Store over `catalog` restored from `storage`.
    #[must_use]
    pub fn with_storage(catalog: Catalog, storage: MemoryStorage) -> Self {
        let storage = Rc::new(storage);
        let toasts = Rc::new(ToastOutbox::new());
        let store = CartStore::load(
            Rc::new(catalog),
            storage.clone(),
            toasts.clone(),
            CartStoreOptions::default(),
        );
        Self {
            storage,
            toasts,
            store,
        }
    }

    /// A fresh store restored from this fixture's storage, as after a
    /// restart.
    #[must_use]
    pub fn reopen(&self) -> CartStore {
        CartStore::load(
            Rc::new(self.store.catalog().clone()),
            self.storage.clone(),
            Rc::new(ToastOutbox::new()),
            CartStoreOptions::default(),
        )
    }
}

/// A single-item catalog: id 1 at $3.50.
#[must_use]
pub fn latte_only_catalog() -> Catalog {
    Catalog::new(vec![MenuItem {
        id: MenuItemId::new(1),
        title: "Cosmic Latte".to_string(),
        description: "Silky espresso with oat milk".to_string(),
        price: Price::from_cents(350),
        story: "A warm hug in a cup.".to_string(),
    }])
    .unwrap_or_else(|e| panic!("fixture catalog is valid: {e}"))
}

/// An app over the built-in menu and the given storage.
#[must_use]
pub fn app_with(storage: Rc<dyn KeyValueStore>) -> AppState {
    AppState::new(&StorefrontConfig::default(), Catalog::orbit_cafe(), storage)
}

/// Parse an intent from its wire JSON.
///
/// # Panics
///
/// Panics if `json` is not a valid intent.
#[must_use]
pub fn intent(json: &str) -> Intent {
    serde_json::from_str(json).unwrap_or_else(|e| panic!("invalid intent {json}: {e}"))
}
