//! HTTP fetching with proxy identities and retry-with-failover
//!
//! One fetch is one GET through one proxy identity (or a direct connection).
//! Every transport error, non-success status, or unreadable body is folded
//! into `FetchOutcome::Failure`; nothing here ever propagates an error to the
//! caller. The retry controller layers bounded failover on top: each failed
//! attempt rotates the pool before trying again.

use crate::proxy::ProxyPool;
use reqwest::{Client, Proxy};
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("psn-harvest/", env!("CARGO_PKG_VERSION"));

/// Result of a single fetch attempt
///
/// Only a fully retrieved body counts as success; there are no partial
/// documents.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully retrieved the document
    Success {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// The attempt failed (transport error, non-success status, body read)
    Failure {
        /// Failure description for diagnostics
        reason: String,
    },
}

impl FetchOutcome {
    /// Whether this outcome carries a document
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}

/// Builds an HTTP client bound to the given proxy identity
///
/// `None` means a direct connection. Timeouts follow the usual crawler
/// defaults; compression is negotiated transparently.
pub fn build_http_client(proxy: Option<&str>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true);

    if let Some(proxy_url) = proxy {
        builder = builder.proxy(Proxy::all(proxy_url)?);
    }

    builder.build()
}

/// Performs one retrieval attempt through the given identity
///
/// Emits a diagnostic trace of the outcome and converts every error into
/// `FetchOutcome::Failure`.
pub async fn fetch(url: &Url, proxy: Option<&str>) -> FetchOutcome {
    let client = match build_http_client(proxy) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build client for proxy {:?}: {}", proxy, e);
            return FetchOutcome::Failure {
                reason: format!("client build failed: {}", e),
            };
        }
    };

    match client.get(url.clone()).send().await {
        Ok(response) => {
            let status = response.status();
            tracing::debug!("Fetched {}: {}", url, status);

            if !status.is_success() {
                return FetchOutcome::Failure {
                    reason: format!("HTTP {}", status.as_u16()),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success {
                    status: status.as_u16(),
                    body,
                },
                Err(e) => FetchOutcome::Failure {
                    reason: format!("body read failed: {}", e),
                },
            }
        }
        Err(e) => {
            // Classify error
            let reason = if e.is_timeout() {
                "request timeout".to_string()
            } else if e.is_connect() {
                "connection failed".to_string()
            } else {
                e.to_string()
            };
            tracing::error!("Error fetching {}: {}", url, reason);
            FetchOutcome::Failure { reason }
        }
    }
}

/// Fetches a target with retry and proxy failover
///
/// Attempts with the pool's current identity; every failure advances the pool
/// before the next try, up to `retry_budget` total attempts. The first
/// success returns immediately. Exhausting the budget returns the last
/// failure, which the caller must treat as a skip for this target — terminal
/// failure is a per-target condition, never fatal to the run.
pub async fn fetch_with_retry(
    url: &Url,
    pool: &mut ProxyPool,
    retry_budget: u32,
) -> FetchOutcome {
    let mut last_failure = FetchOutcome::Failure {
        reason: "no attempts made".to_string(),
    };

    for attempt in 1..=retry_budget {
        let outcome = fetch(url, pool.current()).await;
        match outcome {
            FetchOutcome::Success { .. } => return outcome,
            FetchOutcome::Failure { ref reason } => {
                tracing::debug!(
                    "Attempt {}/{} for {} failed ({}), rotating proxy",
                    attempt,
                    retry_budget,
                    url,
                    reason
                );
                pool.advance();
                last_failure = outcome;
            }
        }
    }

    last_failure
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_direct_client() {
        assert!(build_http_client(None).is_ok());
    }

    #[test]
    fn test_build_proxied_client() {
        assert!(build_http_client(Some("http://127.0.0.1:8080")).is_ok());
    }

    #[test]
    fn test_build_client_rejects_malformed_proxy() {
        assert!(build_http_client(Some("not a proxy url")).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_target_is_failure() {
        // Port 1 is never listening locally
        let url = Url::parse("http://127.0.0.1:1/").unwrap();
        let outcome = fetch(&url, None).await;
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn test_malformed_proxy_is_failure_not_panic() {
        let url = Url::parse("http://127.0.0.1:1/").unwrap();
        let outcome = fetch(&url, Some("::::")).await;
        assert!(!outcome.is_success());
    }
}
