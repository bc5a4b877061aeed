//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `ESHOPPER_CART_KEY` - Storage key holding the cart (default: `eshopper_cart`)
//! - `ESHOPPER_CURRENCY` - Currency for order summaries, either an ISO code
//!   (`EUR`) or a literal symbol (`kr`). Unset means `$`.
//! - `ESHOPPER_PLACEHOLDER_IMAGE` - Image used when a product has none
//!   (default: `img/product-1.jpg`)
//! - `ESHOPPER_NOTIFICATION_SECS` - How long a toast stays visible (default: 3)
//! - `ESHOPPER_DATA_DIR` - Directory for file-backed storage (default: `.eshopper`)

use std::path::PathBuf;

use chrono::TimeDelta;
use eshopper_core::{CurrencyCode, DEFAULT_CURRENCY_SYMBOL};
use thiserror::Error;

/// Default storage key, shared with the storefront scripts.
pub const DEFAULT_STORAGE_KEY: &str = "eshopper_cart";

/// Default image for products added without one.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "img/product-1.jpg";

const DEFAULT_NOTIFICATION_SECS: i64 = 3;
const DEFAULT_DATA_DIR: &str = ".eshopper";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Key under which the cart is persisted
    pub storage_key: String,
    /// Currency symbol for order summaries, `None` falls back to `$`
    pub currency_symbol: Option<String>,
    /// Image reference used when a product has none
    pub placeholder_image: String,
    /// How long a notification stays on screen before its exit animation
    pub notification_duration: TimeDelta,
    /// Directory used by file-backed storage
    pub data_dir: PathBuf,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency_symbol: None,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            notification_duration: TimeDelta::seconds(DEFAULT_NOTIFICATION_SECS),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage_key = match non_empty(lookup("ESHOPPER_CART_KEY")) {
            Some(key) if key.contains(['/', '\\']) => {
                return Err(ConfigError::InvalidEnvVar(
                    "ESHOPPER_CART_KEY".to_string(),
                    "must not contain path separators".to_string(),
                ));
            }
            Some(key) => key,
            None => defaults.storage_key,
        };

        let currency_symbol = non_empty(lookup("ESHOPPER_CURRENCY")).map(|value| {
            value
                .parse::<CurrencyCode>()
                .map_or(value, |code| code.symbol().to_string())
        });

        let placeholder_image =
            non_empty(lookup("ESHOPPER_PLACEHOLDER_IMAGE")).unwrap_or(defaults.placeholder_image);

        let notification_duration = match non_empty(lookup("ESHOPPER_NOTIFICATION_SECS")) {
            Some(raw) => parse_seconds("ESHOPPER_NOTIFICATION_SECS", &raw)?,
            None => defaults.notification_duration,
        };

        let data_dir = non_empty(lookup("ESHOPPER_DATA_DIR"))
            .map_or(defaults.data_dir, PathBuf::from);

        Ok(Self {
            storage_key,
            currency_symbol,
            placeholder_image,
            notification_duration,
            data_dir,
        })
    }

    /// The currency symbol to render prices with.
    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        self.currency_symbol
            .as_deref()
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Treat empty or whitespace-only values as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a non-negative number of seconds.
fn parse_seconds(key: &str, raw: &str) -> Result<TimeDelta, ConfigError> {
    let secs = raw
        .parse::<u32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    TimeDelta::try_seconds(i64::from(secs))
        .ok_or_else(|| ConfigError::InvalidEnvVar(key.to_string(), "out of range".to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<CartConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        CartConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config, CartConfig::default());
        assert_eq!(config.storage_key, "eshopper_cart");
        assert_eq!(config.placeholder_image, "img/product-1.jpg");
        assert_eq!(config.notification_duration, TimeDelta::seconds(3));
        assert_eq!(config.currency_symbol(), "$");
    }

    #[test]
    fn test_currency_code_maps_to_symbol() {
        let config = load(&[("ESHOPPER_CURRENCY", "eur")]).unwrap();
        assert_eq!(config.currency_symbol(), "€");
    }

    #[test]
    fn test_currency_literal_symbol() {
        let config = load(&[("ESHOPPER_CURRENCY", "kr")]).unwrap();
        assert_eq!(config.currency_symbol(), "kr");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = load(&[("ESHOPPER_CURRENCY", "  "), ("ESHOPPER_CART_KEY", "")]).unwrap();
        assert_eq!(config.currency_symbol, None);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ESHOPPER_CART_KEY", "guest_cart"),
            ("ESHOPPER_PLACEHOLDER_IMAGE", "img/none.png"),
            ("ESHOPPER_NOTIFICATION_SECS", "5"),
            ("ESHOPPER_DATA_DIR", "/tmp/carts"),
        ])
        .unwrap();
        assert_eq!(config.storage_key, "guest_cart");
        assert_eq!(config.placeholder_image, "img/none.png");
        assert_eq!(config.notification_duration, TimeDelta::seconds(5));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/carts"));
    }

    #[test]
    fn test_invalid_notification_secs() {
        let err = load(&[("ESHOPPER_NOTIFICATION_SECS", "-1")]).unwrap_err();
        assert!(err.to_string().contains("ESHOPPER_NOTIFICATION_SECS"));
    }

    #[test]
    fn test_storage_key_rejects_path_separators() {
        assert!(load(&[("ESHOPPER_CART_KEY", "../cart")]).is_err());
    }
}
