//! Domain models for the ordering core.
//!
//! - [`menu_item`] - The fixed menu catalog
//! - [`cart`] - Cart lines and the ordered cart sequence

pub mod cart;
pub mod menu_item;

pub use cart::{Cart, LineItem};
pub use menu_item::{Catalog, CatalogError, MenuItem};
