//! Cart view state.

use orbit_cafe_core::MenuItemId;
use serde::Serialize;

use crate::models::{Cart, LineItem};

/// Shown in place of the line list when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty. Go add tasty things!";

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: MenuItemId,
    pub title: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(&Cart::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: cart.total_price().display(),
            item_count: cart.total_count(),
            empty_message: cart.is_empty().then_some(EMPTY_CART_MESSAGE),
        }
    }
}

impl From<&LineItem> for CartItemView {
    fn from(line: &LineItem) -> Self {
        Self {
            id: line.id,
            title: line.title.clone(),
            quantity: line.quantity,
            price: line.price.display(),
            line_price: line.line_total().display(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use orbit_cafe_core::Price;

    use super::*;

    #[test]
    fn test_empty_view() {
        let view = CartView::empty();
        assert!(view.is_empty());
        assert_eq!(view.subtotal, "$0.00");
        assert_eq!(view.item_count, 0);
        assert_eq!(view.empty_message, Some(EMPTY_CART_MESSAGE));
    }

    #[test]
    fn test_lines_and_subtotal() {
        let cart = Cart::from_lines(vec![
            LineItem {
                id: MenuItemId::new(5),
                title: "Nebula Smoothie".to_string(),
                price: Price::from_cents(395),
                quantity: 3,
            },
            LineItem {
                id: MenuItemId::new(2),
                title: "Meteor Muffin".to_string(),
                price: Price::from_cents(275),
                quantity: 1,
            },
        ]);

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 4);
        assert_eq!(view.subtotal, "$14.60");
        assert_eq!(view.empty_message, None);

        let first = view.items.first().unwrap();
        assert_eq!(first.title, "Nebula Smoothie");
        assert_eq!(first.price, "$3.95");
        assert_eq!(first.line_price, "$11.85");
    }
}
