//! Round-robin proxy pool
//!
//! The pool hands out proxy identities in fixed order, wrapping past the end.
//! There is no health tracking: a proxy that just failed can be re-selected on
//! a later rotation. Retry and rotation cadences downstream are tuned against
//! plain round-robin, so the pool stays deliberately memory-free.

use crate::HarvestError;
use std::path::Path;

/// An ordered pool of proxy identities with a wrapping cursor
///
/// An empty pool is valid and means every request is made directly, without a
/// proxy. `current` and `advance` never fail.
#[derive(Debug, Clone)]
pub struct ProxyPool {
    proxies: Vec<String>,
    cursor: usize,
}

impl ProxyPool {
    /// Creates a pool from a list of proxy URLs
    pub fn new(proxies: Vec<String>) -> Self {
        Self { proxies, cursor: 0 }
    }

    /// Creates an empty pool (direct connections only)
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Loads a pool from a line-oriented proxy list file
    ///
    /// Blank lines are skipped and surrounding whitespace is trimmed. A
    /// missing file yields an empty pool; any other read error is fatal.
    pub fn from_file(path: &Path) -> Result<Self, HarvestError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "Proxy list {} not found, using direct connections",
                    path.display()
                );
                return Ok(Self::empty());
            }
            Err(e) => {
                return Err(HarvestError::ProxySource {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        let proxies: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        tracing::debug!("Loaded {} proxies from {}", proxies.len(), path.display());
        Ok(Self::new(proxies))
    }

    /// Returns the identity under the cursor, or `None` on an empty pool
    pub fn current(&self) -> Option<&str> {
        self.proxies.get(self.cursor).map(String::as_str)
    }

    /// Moves the cursor to the next identity, wrapping past the end
    ///
    /// Returns the newly selected identity, or `None` on an empty pool.
    pub fn advance(&mut self) -> Option<&str> {
        if self.proxies.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.proxies.len();
        self.current()
    }

    /// Number of identities in the pool
    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    /// Whether the pool has no identities
    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }
}
