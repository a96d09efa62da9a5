//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults are noted below.
//!
//! - `APPBAY_TAX_RATE` - Tax rate applied to the subtotal (default: 0.08)
//! - `APPBAY_SHIPPING_FEE` - Flat shipping fee (default: 15)
//! - `APPBAY_FREE_SHIPPING_THRESHOLD` - Subtotal at or above which
//!   shipping is waived (default: unset, fee always applies)
//! - `APPBAY_DATA_DIR` - Directory for durable storage (default: the
//!   platform local-data directory + `appbay`)
//! - `APPBAY_CATALOG_PATH` - JSON catalog file (default: unset, callers
//!   fall back to their bundled catalog)

use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::cart::CheckoutPolicy;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Tax and shipping policy for carts.
    pub checkout: CheckoutPolicy,
    /// Directory the file-backed storage writes into.
    pub data_dir: PathBuf,
    /// Catalog file to load, if one was configured.
    pub catalog_path: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let tax_rate = get_decimal_or("APPBAY_TAX_RATE", Decimal::new(8, 2))?;
        let shipping_fee = get_decimal_or("APPBAY_SHIPPING_FEE", Decimal::from(15))?;
        let free_shipping_threshold = get_optional_decimal("APPBAY_FREE_SHIPPING_THRESHOLD")?;

        let data_dir = std::env::var("APPBAY_DATA_DIR").map_or_else(
            |_| default_data_dir(),
            PathBuf::from,
        );
        let catalog_path = std::env::var("APPBAY_CATALOG_PATH").ok().map(PathBuf::from);

        Ok(Self {
            checkout: CheckoutPolicy {
                tax_rate,
                shipping_fee,
                free_shipping_threshold,
            },
            data_dir,
            catalog_path,
        })
    }
}

/// Platform local-data directory + `appbay`, or a dotdir in the working
/// directory when the platform reports none.
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(|| PathBuf::from(".appbay"), |dir| dir.join("appbay"))
}

fn get_decimal_or(name: &str, default: Decimal) -> Result<Decimal, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<Decimal>()
            .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

fn get_optional_decimal(name: &str) -> Result<Option<Decimal>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<Decimal>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string())),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(unsafe_code)]
mod tests {
    use super::*;

    // Env vars are process-global, so the override and default cases run
    // sequentially inside one test.
    #[test]
    fn test_from_env() {
        unsafe {
            std::env::set_var("APPBAY_TAX_RATE", "0.05");
            std::env::set_var("APPBAY_SHIPPING_FEE", "0");
            std::env::set_var("APPBAY_FREE_SHIPPING_THRESHOLD", "100");
        }
        let config = StorefrontConfig::from_env().unwrap();
        assert_eq!(config.checkout.tax_rate, Decimal::new(5, 2));
        assert_eq!(config.checkout.shipping_fee, Decimal::ZERO);
        assert_eq!(
            config.checkout.free_shipping_threshold,
            Some(Decimal::from(100))
        );

        unsafe {
            std::env::set_var("APPBAY_TAX_RATE", "not-a-number");
        }
        assert!(matches!(
            StorefrontConfig::from_env(),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));

        unsafe {
            std::env::remove_var("APPBAY_TAX_RATE");
            std::env::remove_var("APPBAY_SHIPPING_FEE");
            std::env::remove_var("APPBAY_FREE_SHIPPING_THRESHOLD");
        }
        let config = StorefrontConfig::from_env().unwrap();
        assert_eq!(config.checkout.tax_rate, Decimal::new(8, 2));
        assert_eq!(config.checkout.shipping_fee, Decimal::from(15));
        assert!(config.checkout.free_shipping_threshold.is_none());
    }
}
