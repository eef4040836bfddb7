//! Unified error handling for the storefront host.
//!
//! The ordering core itself never fails: lookups miss silently and storage
//! problems degrade to defaults. `AppError` covers what can stop the host
//! binary: bad configuration, an invalid catalog file, and broken I/O on
//! the intent stream.

use thiserror::Error;

use crate::config::ConfigError;
use crate::models::CatalogError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The supplied catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Reading intents or writing snapshots failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(ConfigError::InvalidEnvVar(
            "ORBIT_CAFE_LOG_FORMAT".to_string(),
            "bad".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Config error: Invalid environment variable ORBIT_CAFE_LOG_FORMAT: bad"
        );

        let err = AppError::from(CatalogError::DuplicateId(orbit_cafe_core::MenuItemId::new(4)));
        assert_eq!(err.to_string(), "Catalog error: duplicate menu item id 4");
    }
}
