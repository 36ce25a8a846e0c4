//! Harvest module - fetching, extraction, and pagination
//!
//! This module contains the core pipeline logic, including:
//! - HTTP fetching through proxy identities with retry-and-failover
//! - Structured field extraction from catalog and detail pages
//! - The pagination driver that orchestrates a full run

mod driver;
mod extractor;
mod fetcher;

pub use driver::{GameEntry, Harvester};
pub use extractor::{extract_price_record, extract_stubs, ItemStub, PriceRecord, SelectorSchema};
pub use fetcher::{build_http_client, fetch, fetch_with_retry, FetchOutcome};

use crate::config::Config;
use crate::proxy::ProxyPool;
use crate::HarvestError;
use std::path::Path;

/// Runs a complete harvest from validated configuration
///
/// Loads the proxy pool named by the configuration and drives the full page
/// range. This is the main library entry point.
pub async fn run_harvest(config: Config) -> Result<(), HarvestError> {
    let pool = ProxyPool::from_file(Path::new(&config.proxy.list_path))?;
    let mut harvester = Harvester::new(config, pool)?;
    harvester.run().await
}
