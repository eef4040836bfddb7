//! View-state shaping for the UI renderers.
//!
//! Renderers receive these plain structs; they never touch the cart store
//! directly.

pub mod cart;
pub mod menu;

pub use cart::{CartItemView, CartView, EMPTY_CART_MESSAGE};
pub use menu::{DEFAULT_STORY, MenuCardView, MenuIntent, MenuView, filter_catalog, story_for};
