//! Menu view state.
//!
//! Shapes catalog entries into card data, tracks the search query and the
//! hovered card, and turns menu intents into cart store calls.

use std::time::Duration;

use orbit_cafe_core::MenuItemId;
use serde::{Deserialize, Serialize};

use crate::models::{Catalog, MenuItem};
use crate::services::{CartStore, Notifier};

/// Story shown when no card is hovered.
pub const DEFAULT_STORY: &str =
    "Orbit Cafe began as a tiny stall on a rainy evening — hover on any item to reveal its little tale.";

/// Items added by a quick add (double activation of a card).
const QUICK_ADD_QUANTITY: u32 = 2;

/// Catalog items whose title or description contains `query`,
/// case-insensitively, in catalog order.
///
/// An empty query matches everything.
#[must_use]
pub fn filter_catalog<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a MenuItem> {
    let needle = query.to_lowercase();
    catalog
        .items()
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.title.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Story for the hovered item. Falls back to [`DEFAULT_STORY`] when nothing
/// is hovered or the id is not on the menu.
#[must_use]
pub fn story_for(catalog: &Catalog, hovered: Option<MenuItemId>) -> &str {
    hovered
        .and_then(|id| catalog.get(id))
        .map_or(DEFAULT_STORY, |item| item.story.as_str())
}

/// Menu card display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuCardView {
    pub id: MenuItemId,
    pub title: String,
    pub description: String,
    pub price: String,
}

impl From<&MenuItem> for MenuCardView {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            price: item.price.display(),
        }
    }
}

/// Typed menu messages emitted by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MenuIntent {
    /// The card's add button.
    AddToCart { id: MenuItemId },
    /// Double activation of a card adds two.
    QuickAdd { id: MenuItemId },
    /// The card's details button.
    ViewDetails { id: MenuItemId },
    Hover { id: MenuItemId },
    Unhover,
}

/// Search and hover state of the menu.
#[derive(Debug, Clone, Default)]
pub struct MenuView {
    query: String,
    hovered: Option<MenuItemId>,
}

impl MenuView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Cards matching the current query.
    #[must_use]
    pub fn cards(&self, catalog: &Catalog) -> Vec<MenuCardView> {
        filter_catalog(catalog, &self.query)
            .into_iter()
            .map(MenuCardView::from)
            .collect()
    }

    /// Story of the hovered item, or the cafe's own story.
    #[must_use]
    pub fn story<'a>(&self, catalog: &'a Catalog) -> &'a str {
        story_for(catalog, self.hovered)
    }

    /// Apply a menu message.
    pub fn handle(
        &mut self,
        intent: MenuIntent,
        store: &mut CartStore,
        notifier: &dyn Notifier,
        toast_timeout: Duration,
    ) {
        match intent {
            MenuIntent::AddToCart { id } => store.add(id, 1),
            MenuIntent::QuickAdd { id } => {
                if store.catalog().get(id).is_some() {
                    store.add(id, QUICK_ADD_QUANTITY);
                    notifier.notify("Added 2 via double-click", toast_timeout);
                }
            }
            MenuIntent::ViewDetails { id } => {
                if let Some(item) = store.catalog().get(id) {
                    let message = format!("{}: {}", item.title, item.story);
                    notifier.notify(&message, toast_timeout);
                }
            }
            MenuIntent::Hover { id } => self.hovered = Some(id),
            MenuIntent::Unhover => self.hovered = None,
        }
    }
}
