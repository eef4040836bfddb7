//! Persisted theme preference.
//!
//! Lives in its own storage slot, independent of the cart.

use std::rc::Rc;

use orbit_cafe_core::Theme;

use crate::storage::KeyValueStore;

/// Default storage slot for the theme.
pub const DEFAULT_THEME_KEY: &str = "theme";

/// The active theme, mirrored to storage.
pub struct ThemePreference {
    storage: Rc<dyn KeyValueStore>,
    key: String,
    current: Theme,
}

impl ThemePreference {
    /// Read the stored theme, using `fallback` when the slot is missing,
    /// unreadable, or holds an unknown value.
    pub fn load(storage: Rc<dyn KeyValueStore>, key: impl Into<String>, fallback: Theme) -> Self {
        let key = key.into();
        let current = match storage.get(&key) {
            Ok(Some(value)) => value.parse::<Theme>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring stored theme");
                fallback
            }),
            Ok(None) => fallback,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored theme");
                fallback
            }
        };
        Self {
            storage,
            key,
            current,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Switch to `theme` and persist it.
    pub fn apply(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(e) = self.storage.set(&self.key, theme.as_str()) {
            tracing::error!(error = %e, key = %self.key, "Failed to persist theme");
        }
    }

    /// Flip between light and dark, returning the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply(next);
        next
    }
}
