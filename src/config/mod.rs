//! Configuration module for psn-harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use psn_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Pages {}..={}", config.catalog.first_page, config.catalog.last_page);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CatalogConfig, Config, FetchConfig, OutputConfig, ProxyConfig};

// Re-export parser functions
pub use parser::load_config;
