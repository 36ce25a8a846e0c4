use serde::Deserialize;

/// Main configuration structure for psn-harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub proxy: ProxyConfig,
    pub fetch: FetchConfig,
    pub output: OutputConfig,
}

/// Catalog traversal configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the paginated catalog; the page number is appended directly
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Origin against which relative detail-page hrefs are resolved
    #[serde(rename = "site-origin")]
    pub site_origin: String,

    /// First catalog page to visit (inclusive)
    #[serde(rename = "first-page")]
    pub first_page: u32,

    /// Last catalog page to visit (inclusive)
    #[serde(rename = "last-page")]
    pub last_page: u32,
}

/// Proxy pool and rotation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    /// Path to the line-oriented proxy list; a missing file means direct
    /// connections only
    #[serde(rename = "list-path")]
    pub list_path: String,

    /// Force-advance the pool every this many catalog pages
    #[serde(rename = "page-rotation-cadence")]
    pub page_rotation_cadence: u32,

    /// Force-advance the pool every this many detail-page requests
    #[serde(rename = "detail-rotation-cadence")]
    pub detail_rotation_cadence: u32,
}

/// Fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Total attempts per target before it is skipped
    #[serde(rename = "retry-budget")]
    pub retry_budget: u32,

    /// Delay between processed items (seconds)
    #[serde(rename = "item-delay-secs")]
    pub item_delay_secs: f64,

    /// Randomize stub processing order within a page
    #[serde(rename = "shuffle-items", default)]
    pub shuffle_items: bool,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON results document
    #[serde(rename = "results-path")]
    pub results_path: String,
}
