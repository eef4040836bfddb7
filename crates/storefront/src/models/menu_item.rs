//! Menu items and the read-only catalog.

use std::collections::HashSet;
use std::path::Path;

use orbit_cafe_core::{MenuItemId, Price};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a supplied catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate menu item id {0}")]
    DuplicateId(MenuItemId),
    #[error("menu item {0} has a negative price")]
    NegativePrice(MenuItemId),
}

/// A single entry on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub title: String,
    #[serde(alias = "desc")]
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub story: String,
}

/// The fixed, ordered menu.
///
/// Built once at startup and never mutated. Ids are unique and prices are
/// non-negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Build a catalog from items in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if two items share an id or an item has a negative
    /// price.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if item.price.is_negative() {
                return Err(CatalogError::NegativePrice(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Parse a catalog from a JSON array of menu items.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or fails [`Catalog::new`]
    /// validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are not a
    /// valid catalog.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// The built-in Orbit Cafe menu.
    #[must_use]
    pub fn orbit_cafe() -> Self {
        let item = |id, title: &str, description: &str, cents, story: &str| MenuItem {
            id: MenuItemId::new(id),
            title: title.to_owned(),
            description: description.to_owned(),
            price: Price::from_cents(cents),
            story: story.to_owned(),
        };

        Self {
            items: vec![
                item(
                    1,
                    "Cosmic Latte",
                    "Silky espresso with oat milk",
                    350,
                    "A warm hug in a cup.",
                ),
                item(
                    2,
                    "Meteor Muffin",
                    "Blueberry muffin with crumble top",
                    275,
                    "Baked on a starlit morning.",
                ),
                item(
                    3,
                    "Galaxy Burger",
                    "Double patty with signature sauce",
                    650,
                    "A bold orbit of flavor.",
                ),
                item(
                    4,
                    "Solar Salad",
                    "Quinoa, beet, avocado & citrus",
                    425,
                    "Freshness that brightens the day.",
                ),
                item(
                    5,
                    "Nebula Smoothie",
                    "Mixed berries & banana boost",
                    395,
                    "A swirl of vibrant goodness.",
                ),
            ],
        }
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
