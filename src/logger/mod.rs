//! Logging initialization built on tracing-subscriber.
//!
//! The level comes from the logger settings unless `RUST_LOG` overrides
//! it; output is either human-readable or JSON.

use tracing_subscriber::EnvFilter;

use crate::config::LoggerConfig;
use crate::error::{AppError, AppResult};

/// Initializes the global tracing subscriber.
///
/// # Errors
/// Returns `AppError::Configuration` when a subscriber was already
/// installed or the level filter cannot be parsed.
pub fn init_logger(config: &LoggerConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AppError::Configuration {
            key: "logger.level".to_string(),
            source: anyhow::Error::from(e),
        })?;

    let result = match config.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };

    result.map_err(|e| AppError::Configuration {
        key: "logger".to_string(),
        source: anyhow::anyhow!("Failed to install tracing subscriber: {}", e),
    })
}
