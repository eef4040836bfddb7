//! Cart lines and the cart sequence.
//!
//! [`Cart`] upholds the line invariants (one line per id, quantity at least
//! one, insertion order). Mutation is crate-private: the cart store is the
//! only writer.

use orbit_cafe_core::{MenuItemId, Price};
use serde::{Deserialize, Serialize};

use super::MenuItem;

/// One line of the cart.
///
/// Title and price are snapshots taken when the item was first added.
/// Serialized field names match the stored cart slot layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: MenuItemId,
    pub title: String,
    pub price: Price,
    #[serde(rename = "qty")]
    pub quantity: u32,
}

impl LineItem {
    /// `price * quantity`, unrounded.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Ordered cart lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Build a cart from stored lines, restoring the invariants.
    ///
    /// Quantities below one are raised to one; a repeated id is folded into
    /// its first occurrence.
    #[must_use]
    pub fn from_lines(lines: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for mut line in lines {
            line.quantity = line.quantity.max(1);
            if let Some(existing) = cart.line_mut(line.id) {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
            } else {
                cart.lines.push(line);
            }
        }
        cart
    }

    /// Decode the stored JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not an array of line items.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let lines: Vec<LineItem> = serde_json::from_str(json)?;
        Ok(Self::from_lines(lines))
    }

    /// Encode as the stored JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.lines)
    }

    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    #[must_use]
    pub fn get(&self, id: MenuItemId) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |sum, line| sum.saturating_add(line.quantity))
    }

    /// Sum of `price * quantity` over all lines, unrounded.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    fn line_mut(&mut self, id: MenuItemId) -> Option<&mut LineItem> {
        self.lines.iter_mut().find(|line| line.id == id)
    }

    /// Add `quantity` of `item`, merging into an existing line.
    pub(crate) fn add(&mut self, item: &MenuItem, quantity: u32) {
        if let Some(line) = self.line_mut(item.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(LineItem {
                id: item.id,
                title: item.title.clone(),
                price: item.price,
                quantity,
            });
        }
    }

    /// Returns `false` when no line has `id`.
    pub(crate) fn increment(&mut self, id: MenuItemId) -> bool {
        self.line_mut(id).is_some_and(|line| {
            line.quantity = line.quantity.saturating_add(1);
            true
        })
    }

    /// Returns `false` when no line has `id`. Quantity stops at one.
    pub(crate) fn decrement(&mut self, id: MenuItemId) -> bool {
        self.line_mut(id).is_some_and(|line| {
            line.quantity = line.quantity.saturating_sub(1).max(1);
            true
        })
    }

    /// Returns `false` when no line has `id`.
    pub(crate) fn remove(&mut self, id: MenuItemId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}
