//! Pagination driver - the top-level harvest orchestrator
//!
//! Walks the configured page range strictly sequentially: one catalog page at
//! a time, one detail page at a time within it. Transport failures are
//! contained here as per-target skips; only persistence faults escape and
//! abort the run. There is no checkpointing - a re-invoked run starts over
//! from the first page.

use crate::config::Config;
use crate::harvest::extractor::{extract_price_record, extract_stubs, ItemStub, SelectorSchema};
use crate::harvest::fetcher::{fetch_with_retry, FetchOutcome};
use crate::output::ResultWriter;
use crate::price::normalize_price;
use crate::proxy::ProxyPool;
use crate::HarvestError;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// A fully resolved discount entry, immutable once constructed
///
/// Built by merging a catalog stub with the normalized pricing from its
/// detail page. The field names are the output document's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    pub title: String,
    pub discount: String,
    pub old_price: f64,
    pub new_price: f64,
    pub discount_expire: String,
    pub link: String,
}

/// Harvest orchestrator owning all run state
///
/// The result set, proxy cursor, and detail-request counter live here and
/// are only touched from the sequential drive loop.
pub struct Harvester {
    config: Config,
    pool: ProxyPool,
    schema: SelectorSchema,
    writer: ResultWriter,
    site_origin: Url,
    entries: Vec<GameEntry>,
    detail_requests: u64,
}

impl Harvester {
    /// Creates a harvester from validated configuration and a proxy pool
    pub fn new(config: Config, pool: ProxyPool) -> Result<Self, HarvestError> {
        let site_origin = Url::parse(&config.catalog.site_origin)?;
        let writer = ResultWriter::new(&config.output.results_path);
        let schema = SelectorSchema::new()?;

        Ok(Self {
            config,
            pool,
            schema,
            writer,
            site_origin,
            entries: Vec::new(),
            detail_requests: 0,
        })
    }

    /// Runs the harvest over the configured page range
    ///
    /// Completes successfully after the last page regardless of how many
    /// pages or items were skipped along the way.
    pub async fn run(&mut self) -> Result<(), HarvestError> {
        let first = self.config.catalog.first_page;
        let last = self.config.catalog.last_page;
        tracing::info!(
            "Starting harvest: pages {}..={}, {} proxies",
            first,
            last,
            self.pool.len()
        );

        for page in first..=last {
            // Scheduled rotation, independent of fetch outcomes.
            if page % self.config.proxy.page_rotation_cadence == 0 {
                self.pool.advance();
            }

            let page_url = page_url(&self.config.catalog.base_url, page)?;
            let outcome =
                fetch_with_retry(&page_url, &mut self.pool, self.config.fetch.retry_budget).await;

            let body = match outcome {
                FetchOutcome::Success { body, .. } => body,
                FetchOutcome::Failure { reason } => {
                    tracing::warn!(
                        "Skipping page {} after {} failed attempts: {}",
                        page,
                        self.config.fetch.retry_budget,
                        reason
                    );
                    continue;
                }
            };

            let mut stubs = extract_stubs(&body, &self.schema, &self.site_origin);

            if self.config.fetch.shuffle_items {
                stubs.shuffle(&mut rand::thread_rng());
            }

            for stub in stubs {
                self.process_stub(stub).await?;
            }

            tracing::debug!("Page {} processed", page);
        }

        tracing::info!("Harvest complete: {} entries collected", self.entries.len());
        Ok(())
    }

    /// Resolves one stub's detail page and, when it carries a timed
    /// discount, appends and persists the resulting entry
    ///
    /// Terminal fetch failures skip the stub with a warning; a missing
    /// expiry descriptor skips it silently. Only persistence errors
    /// propagate.
    async fn process_stub(&mut self, stub: ItemStub) -> Result<(), HarvestError> {
        self.detail_requests += 1;
        if self.detail_requests % u64::from(self.config.proxy.detail_rotation_cadence) == 0 {
            self.pool.advance();
        }

        let outcome =
            fetch_with_retry(&stub.link, &mut self.pool, self.config.fetch.retry_budget).await;

        let body = match outcome {
            FetchOutcome::Success { body, .. } => body,
            FetchOutcome::Failure { reason } => {
                tracing::warn!(
                    "Skipping {} after {} failed attempts: {}",
                    stub.link,
                    self.config.fetch.retry_budget,
                    reason
                );
                return Ok(());
            }
        };

        // No expiry descriptor means no timed discount; drop silently.
        let Some(record) = extract_price_record(&body, &self.schema) else {
            return Ok(());
        };

        let entry = GameEntry {
            title: stub.title,
            discount: stub.discount,
            old_price: normalize_price(&record.original_price),
            new_price: normalize_price(&record.current_price),
            discount_expire: record.expiry,
            link: stub.link.to_string(),
        };

        tracing::debug!("Accepted entry: {} ({})", entry.title, entry.discount);
        self.entries.push(entry);

        // Full rewrite after every accepted entry; a write failure is a
        // storage fault and aborts the run.
        self.writer.persist(&self.entries)?;

        let delay = self.config.fetch.item_delay_secs;
        if delay > 0.0 {
            tokio::time::sleep(Duration::from_secs_f64(delay)).await;
        }

        Ok(())
    }

    /// Entries accepted so far, in insertion order
    pub fn entries(&self) -> &[GameEntry] {
        &self.entries
    }
}

/// Builds the catalog URL for a page index by suffixing the page number
fn page_url(base_url: &str, page: u32) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{}{}", base_url, page))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_appends_page_number() {
        let url = page_url("https://store.playstation.com/en-tr/category/deals/", 17).unwrap();
        assert_eq!(
            url.as_str(),
            "https://store.playstation.com/en-tr/category/deals/17"
        );
    }

    #[test]
    fn test_game_entry_serializes_with_output_schema() {
        let entry = GameEntry {
            title: "Elden Ring".to_string(),
            discount: "-40%".to_string(),
            old_price: 1299.9,
            new_price: 779.94,
            discount_expire: "Ends in 3 days".to_string(),
            link: "https://store.playstation.com/en-tr/concept/1".to_string(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["title"], "Elden Ring");
        assert_eq!(json["old_price"], 1299.9);
        assert_eq!(json["new_price"], 779.94);
        assert_eq!(json["discount_expire"], "Ends in 3 days");
    }
}
