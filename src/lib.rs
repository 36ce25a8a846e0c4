//! psn-harvest: a PlayStation Store discount harvester
//!
//! This crate walks the store's paginated discount catalog, resolves each
//! discounted listing's detail page for pricing and expiry metadata, and
//! rewrites a JSON result document after every accepted entry. Fetches go
//! through a round-robin proxy pool with retry-and-failover on failure.

pub mod config;
pub mod harvest;
pub mod output;
pub mod price;
pub mod proxy;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for psn-harvest operations
///
/// Transport failures deliberately do not appear here: a failed fetch is data
/// (`harvest::FetchOutcome::Failure`) handled inside the pagination driver,
/// never an abort. Only configuration and persistence faults terminate a run.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Failed to read proxy list {path}: {source}")]
    ProxySource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to persist results to {path}: {source}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid field selector: {0}")]
    Selector(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for psn-harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use harvest::{FetchOutcome, GameEntry, Harvester};
pub use price::normalize_price;
pub use proxy::ProxyPool;
