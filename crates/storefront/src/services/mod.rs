//! Stateful services of the ordering core.
//!
//! - [`cart_store`] - Cart ownership, mutations, and persistence
//! - [`checkout`] - Form validation and order submission
//! - [`notify`] - Toast notification sink
//! - [`theme`] - Persisted light/dark preference

pub mod cart_store;
pub mod checkout;
pub mod notify;
pub mod theme;

pub use cart_store::{CartIntent, CartStore, CartStoreOptions};
pub use checkout::{CheckoutFlow, CheckoutForm, OrderConfirmation, ValidationErrors};
pub use notify::{Notifier, Toast, ToastOutbox};
pub use theme::ThemePreference;
