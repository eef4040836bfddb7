//! Application state and intent dispatch.
//!
//! `AppState` is built once at startup and owns every stateful piece of the
//! ordering core. The UI sends it [`Intent`]s and renders the [`Snapshot`]
//! it hands back.

use std::rc::Rc;
use std::time::Duration;

use orbit_cafe_core::Theme;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::models::Catalog;
use crate::services::checkout::FieldError;
use crate::services::{
    CartIntent, CartStore, CheckoutFlow, CheckoutForm, Toast, ToastOutbox, ThemePreference,
};
use crate::storage::{FileStorage, KeyValueStore};
use crate::views::{CartView, MenuCardView, MenuIntent, MenuView};

/// Every message the UI can send.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Intent {
    Menu(MenuIntent),
    Cart(CartIntent),
    Search { query: String },
    Checkout(CheckoutForm),
    CloseModal,
    ToggleTheme,
    /// Return the checkout form to editing for a fresh order.
    NewOrder,
}

/// Order confirmation modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Modal {
    pub summary: Option<String>,
    pub visible: bool,
}

/// Everything the renderers need after an intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub query: String,
    pub menu: Vec<MenuCardView>,
    pub story: String,
    pub cart: CartView,
    pub badge: u32,
    pub theme: Theme,
    pub modal: Modal,
    pub checkout_errors: Vec<FieldError>,
    pub toasts: Vec<Toast>,
}

/// The ordering core, wired together.
pub struct AppState {
    catalog: Rc<Catalog>,
    toasts: Rc<ToastOutbox>,
    toast_timeout: Duration,
    cart: CartStore,
    checkout: CheckoutFlow,
    theme: ThemePreference,
    menu: MenuView,
    modal: Modal,
}

impl AppState {
    /// Create the state over an explicit catalog and storage backend.
    pub fn new(
        config: &StorefrontConfig,
        catalog: Catalog,
        storage: Rc<dyn KeyValueStore>,
    ) -> Self {
        let catalog = Rc::new(catalog);
        let toasts = Rc::new(ToastOutbox::new());
        let cart = CartStore::load(
            catalog.clone(),
            storage.clone(),
            toasts.clone(),
            config.cart_store_options(),
        );
        let theme = ThemePreference::load(storage, config.theme_key.clone(), config.default_theme);

        Self {
            catalog,
            toasts,
            toast_timeout: config.toast_timeout,
            cart,
            checkout: CheckoutFlow::new(),
            theme,
            menu: MenuView::new(),
            modal: Modal::default(),
        }
    }

    /// Create the state from configuration: the configured or built-in
    /// catalog over file-backed storage.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured catalog file cannot be loaded.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let catalog = Catalog::load(path)?;
                tracing::info!(path = %path.display(), items = catalog.len(), "Catalog loaded");
                catalog
            }
            None => Catalog::orbit_cafe(),
        };
        let storage = Rc::new(FileStorage::new(&config.storage_path));
        Ok(Self::new(config, catalog, storage))
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart_store(&self) -> &CartStore {
        &self.cart
    }

    #[must_use]
    pub const fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme.current()
    }

    #[must_use]
    pub const fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Apply one UI message.
    #[instrument(skip(self))]
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Menu(intent) => {
                self.menu.handle(
                    intent,
                    &mut self.cart,
                    self.toasts.as_ref(),
                    self.toast_timeout,
                );
            }
            Intent::Cart(intent) => self.cart.dispatch(intent),
            Intent::Search { query } => self.menu.set_query(query),
            Intent::Checkout(form) => {
                if let Ok(confirmation) = self.checkout.submit(&mut self.cart, &form) {
                    self.modal = Modal {
                        summary: Some(confirmation.summary()),
                        visible: true,
                    };
                }
            }
            Intent::CloseModal => self.modal.visible = false,
            Intent::ToggleTheme => {
                let theme = self.theme.toggle();
                tracing::debug!(%theme, "Theme toggled");
            }
            Intent::NewOrder => self.checkout.reset(),
        }
    }

    /// Current view state. Drains toasts queued since the last snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            query: self.menu.query().to_owned(),
            menu: self.menu.cards(&self.catalog),
            story: self.menu.story(&self.catalog).to_owned(),
            cart: CartView::from(self.cart.cart()),
            badge: self.cart.total_count(),
            theme: self.theme.current(),
            modal: self.modal.clone(),
            checkout_errors: self.checkout.errors().to_vec(),
            toasts: self.toasts.drain(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use orbit_cafe_core::{MenuItemId, Price};

    use super::*;
    use crate::storage::MemoryStorage;
    use crate::views::DEFAULT_STORY;

    fn app() -> (Rc<MemoryStorage>, AppState) {
        let storage = Rc::new(MemoryStorage::new());
        let state = AppState::new(
            &StorefrontConfig::default(),
            Catalog::orbit_cafe(),
            storage.clone(),
        );
        (storage, state)
    }

    fn intent(json: &str) -> Intent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_intent_wire_format() {
        assert_eq!(
            intent(r#"{"type":"menu","payload":{"action":"add_to_cart","id":1}}"#),
            Intent::Menu(MenuIntent::AddToCart {
                id: MenuItemId::new(1)
            })
        );
        assert_eq!(
            intent(r#"{"type":"cart","payload":{"action":"add","id":3,"quantity":2}}"#),
            Intent::Cart(CartIntent::Add {
                id: MenuItemId::new(3),
                quantity: 2
            })
        );
        assert_eq!(
            intent(r#"{"type":"search","payload":{"query":"latte"}}"#),
            Intent::Search {
                query: "latte".to_string()
            }
        );
        assert_eq!(intent(r#"{"type":"toggle_theme"}"#), Intent::ToggleTheme);
    }

    #[test]
    fn test_initial_snapshot() {
        let (_, state) = app();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.menu.len(), 5);
        assert_eq!(snapshot.story, DEFAULT_STORY);
        assert!(snapshot.cart.is_empty());
        assert_eq!(snapshot.badge, 0);
        assert_eq!(snapshot.theme, Theme::Light);
        assert!(!snapshot.modal.visible);
        assert!(snapshot.toasts.is_empty());
    }

    #[test]
    fn test_search_filters_menu() {
        let (_, mut state) = app();
        state.handle(Intent::Search {
            query: "SALAD".to_string(),
        });
        let snapshot = state.snapshot();
        assert_eq!(snapshot.query, "SALAD");
        assert_eq!(snapshot.menu.len(), 1);
        assert_eq!(snapshot.menu.first().unwrap().title, "Solar Salad");
    }

    #[test]
    fn test_checkout_opens_modal_and_clears_cart() {
        let (storage, mut state) = app();
        state.handle(Intent::Menu(MenuIntent::AddToCart {
            id: MenuItemId::new(1),
        }));
        assert_eq!(state.snapshot().toasts.len(), 1);

        state.handle(Intent::Checkout(CheckoutForm {
            full_name: "Ada".to_string(),
            contact: String::new(),
            payment: "card".to_string(),
        }));
        let snapshot = state.snapshot();
        assert!(snapshot.modal.visible);
        assert_eq!(
            snapshot.modal.summary.as_deref(),
            Some("Thank you Ada. Order total: $3.50.")
        );
        assert_eq!(snapshot.badge, 0);
        assert_eq!(storage.raw("cart").as_deref(), Some("[]"));

        state.handle(Intent::CloseModal);
        assert!(!state.modal().visible);
    }

    #[test]
    fn test_rejected_checkout_keeps_cart() {
        let (_, mut state) = app();
        state.handle(Intent::Cart(CartIntent::Add {
            id: MenuItemId::new(4),
            quantity: 2,
        }));
        state.handle(Intent::Checkout(CheckoutForm {
            full_name: "Ada".to_string(),
            ..CheckoutForm::default()
        }));

        let snapshot = state.snapshot();
        assert_eq!(snapshot.checkout_errors.len(), 1);
        assert!(!snapshot.modal.visible);
        assert_eq!(state.cart_store().total_price(), Price::from_cents(850));

        state.handle(Intent::NewOrder);
        assert!(state.checkout().errors().is_empty());
    }

    #[test]
    fn test_toggle_theme_persists() {
        let (storage, mut state) = app();
        state.handle(Intent::ToggleTheme);
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(storage.raw("theme").as_deref(), Some("dark"));
    }
}
