//! Shop configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOP_TAX_RATE` - Fraction of the subtotal charged as tax (default: 0.15)
//! - `SHOP_FREE_SHIPPING_THRESHOLD` - Subtotals above this ship free (default: 100.00)
//! - `SHOP_LOG_FORMAT` - `text` or `json` (default: text)
//! - `RUST_LOG` - Standard `tracing` filter directives

use std::str::FromStr;

use furniture_shop_core::{Price, PricingPolicy};
use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `text` or `json`, got `{other}`")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShopConfig {
    /// Tax rate and free-shipping threshold
    pub pricing: PricingPolicy,
    /// Log output format
    pub log_format: LogFormat,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed or is
    /// out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`ShopConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = PricingPolicy::default();

        let tax_rate = match lookup("SHOP_TAX_RATE") {
            Some(value) => parse_tax_rate(&value)
                .map_err(|e| ConfigError::InvalidEnvVar("SHOP_TAX_RATE".to_string(), e))?,
            None => defaults.tax_rate,
        };
        let free_shipping_threshold = match lookup("SHOP_FREE_SHIPPING_THRESHOLD") {
            Some(value) => parse_threshold(&value).map_err(|e| {
                ConfigError::InvalidEnvVar("SHOP_FREE_SHIPPING_THRESHOLD".to_string(), e)
            })?,
            None => defaults.free_shipping_threshold,
        };
        let log_format = match lookup("SHOP_LOG_FORMAT") {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("SHOP_LOG_FORMAT".to_string(), e))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            pricing: PricingPolicy {
                tax_rate,
                free_shipping_threshold,
            },
            log_format,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a tax rate between 0 and 1 inclusive.
fn parse_tax_rate(value: &str) -> Result<Decimal, String> {
    let rate = Decimal::from_str(value.trim()).map_err(|e| e.to_string())?;
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(format!("{rate} is not between 0 and 1"));
    }
    Ok(rate)
}

/// Parse a non-negative dollar amount.
fn parse_threshold(value: &str) -> Result<Price, String> {
    let amount = Decimal::from_str(value.trim()).map_err(|e| e.to_string())?;
    if amount.is_sign_negative() {
        return Err(format!("{amount} must not be negative"));
    }
    Ok(Price::new(amount).rounded())
}
