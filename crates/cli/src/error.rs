//! CLI error type.

use furniture_shop_core::{ItemError, QuantityError, StateCodeError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid item: {0}")]
    Item(#[from] ItemError),

    #[error("Invalid quantity: {0}")]
    Quantity(#[from] QuantityError),

    #[error("Invalid state: {0}")]
    State(#[from] StateCodeError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
