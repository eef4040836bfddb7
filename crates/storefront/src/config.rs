//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ORBIT_CAFE_STORAGE_PATH` - JSON file backing durable storage
//!   (default: orbit-cafe-storage.json)
//! - `ORBIT_CAFE_CART_KEY` - Storage slot for the cart (default: cart)
//! - `ORBIT_CAFE_THEME_KEY` - Storage slot for the theme (default: theme)
//! - `ORBIT_CAFE_DEFAULT_THEME` - `light` or `dark` (default: light)
//! - `ORBIT_CAFE_TOAST_TIMEOUT_MS` - Toast display time (default: 1800)
//! - `ORBIT_CAFE_CATALOG_PATH` - JSON menu file (default: built-in menu)
//! - `ORBIT_CAFE_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::path::PathBuf;
use std::time::Duration;

use orbit_cafe_core::Theme;
use thiserror::Error;

use crate::services::cart_store::{CartStoreOptions, DEFAULT_CART_KEY};
use crate::services::notify::DEFAULT_TOAST_TIMEOUT;
use crate::services::theme::DEFAULT_THEME_KEY;

const DEFAULT_STORAGE_PATH: &str = "orbit-cafe-storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// File backing durable storage
    pub storage_path: PathBuf,
    /// Storage slot for the serialized cart
    pub cart_key: String,
    /// Storage slot for the theme preference
    pub theme_key: String,
    /// Theme used when none is stored
    pub default_theme: Theme,
    /// How long toasts stay visible
    pub toast_timeout: Duration,
    /// Menu file; the built-in menu is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            cart_key: DEFAULT_CART_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            default_theme: Theme::default(),
            toast_timeout: DEFAULT_TOAST_TIMEOUT,
            catalog_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let storage_path = PathBuf::from(var_or("ORBIT_CAFE_STORAGE_PATH", DEFAULT_STORAGE_PATH));
        let cart_key = non_empty(
            "ORBIT_CAFE_CART_KEY",
            var_or("ORBIT_CAFE_CART_KEY", DEFAULT_CART_KEY),
        )?;
        let theme_key = non_empty(
            "ORBIT_CAFE_THEME_KEY",
            var_or("ORBIT_CAFE_THEME_KEY", DEFAULT_THEME_KEY),
        )?;
        if cart_key == theme_key {
            return Err(ConfigError::InvalidEnvVar(
                "ORBIT_CAFE_THEME_KEY".to_string(),
                "must differ from ORBIT_CAFE_CART_KEY".to_string(),
            ));
        }

        let default_theme = var_or("ORBIT_CAFE_DEFAULT_THEME", Theme::Light.as_str())
            .parse::<Theme>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("ORBIT_CAFE_DEFAULT_THEME".to_string(), e.to_string())
            })?;

        let toast_timeout = lookup("ORBIT_CAFE_TOAST_TIMEOUT_MS")
            .map(|ms| {
                ms.parse::<u64>().map(Duration::from_millis).map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "ORBIT_CAFE_TOAST_TIMEOUT_MS".to_string(),
                        e.to_string(),
                    )
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_TOAST_TIMEOUT);

        let catalog_path = lookup("ORBIT_CAFE_CATALOG_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let log_format = match var_or("ORBIT_CAFE_LOG_FORMAT", "pretty").as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "ORBIT_CAFE_LOG_FORMAT".to_string(),
                    format!("expected 'pretty' or 'json', got '{other}'"),
                ));
            }
        };

        Ok(Self {
            storage_path,
            cart_key,
            theme_key,
            default_theme,
            toast_timeout,
            catalog_path,
            log_format,
        })
    }

    /// Cart store settings derived from this configuration.
    #[must_use]
    pub fn cart_store_options(&self) -> CartStoreOptions {
        CartStoreOptions {
            storage_key: self.cart_key.clone(),
            toast_timeout: self.toast_timeout,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Reject blank values for a slot name.
fn non_empty(key: &str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "cannot be empty".to_string(),
        ));
    }
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.storage_path, PathBuf::from("orbit-cafe-storage.json"));
        assert_eq!(config.cart_key, "cart");
        assert_eq!(config.theme_key, "theme");
        assert_eq!(config.default_theme, Theme::Light);
        assert_eq!(config.toast_timeout, DEFAULT_TOAST_TIMEOUT);
        assert_eq!(
            config.cart_store_options().toast_timeout,
            CartStoreOptions::default().toast_timeout
        );
        assert!(config.catalog_path.is_none());
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ORBIT_CAFE_STORAGE_PATH", "/tmp/cafe.json"),
            ("ORBIT_CAFE_CART_KEY", "orbit-cart"),
            ("ORBIT_CAFE_DEFAULT_THEME", "dark"),
            ("ORBIT_CAFE_TOAST_TIMEOUT_MS", "500"),
            ("ORBIT_CAFE_CATALOG_PATH", "menu.json"),
            ("ORBIT_CAFE_LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.storage_path, PathBuf::from("/tmp/cafe.json"));
        assert_eq!(config.cart_key, "orbit-cart");
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.toast_timeout, Duration::from_millis(500));
        assert_eq!(config.catalog_path, Some(PathBuf::from("menu.json")));
        assert_eq!(config.log_format, LogFormat::Json);

        let options = config.cart_store_options();
        assert_eq!(options.storage_key, "orbit-cart");
        assert_eq!(options.toast_timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = load(&[("ORBIT_CAFE_TOAST_TIMEOUT_MS", "soon")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar(key, _) if key == "ORBIT_CAFE_TOAST_TIMEOUT_MS"
        ));
    }

    #[test]
    fn test_invalid_theme() {
        assert!(load(&[("ORBIT_CAFE_DEFAULT_THEME", "sepia")]).is_err());
    }

    #[test]
    fn test_invalid_log_format() {
        assert!(load(&[("ORBIT_CAFE_LOG_FORMAT", "xml")]).is_err());
    }

    #[test]
    fn test_slot_names_must_differ() {
        assert!(load(&[("ORBIT_CAFE_THEME_KEY", "cart")]).is_err());
        assert!(load(&[("ORBIT_CAFE_CART_KEY", "  ")]).is_err());
    }

    #[test]
    fn test_default_matches_empty_environment() {
        let loaded = load(&[]).unwrap();
        let default = StorefrontConfig::default();
        assert_eq!(loaded.storage_path, default.storage_path);
        assert_eq!(loaded.toast_timeout, default.toast_timeout);
    }
}
