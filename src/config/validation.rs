use crate::config::types::{CatalogConfig, Config, FetchConfig, OutputConfig, ProxyConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_catalog_config(&config.catalog)?;
    validate_proxy_config(&config.proxy)?;
    validate_fetch_config(&config.fetch)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates catalog traversal configuration
fn validate_catalog_config(config: &CatalogConfig) -> Result<(), ConfigError> {
    Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    Url::parse(&config.site_origin)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid site-origin: {}", e)))?;

    if config.first_page < 1 {
        return Err(ConfigError::Validation(format!(
            "first-page must be >= 1, got {}",
            config.first_page
        )));
    }

    if config.last_page < config.first_page {
        return Err(ConfigError::Validation(format!(
            "last-page must be >= first-page, got {} < {}",
            config.last_page, config.first_page
        )));
    }

    Ok(())
}

/// Validates proxy rotation configuration
fn validate_proxy_config(config: &ProxyConfig) -> Result<(), ConfigError> {
    if config.page_rotation_cadence < 1 {
        return Err(ConfigError::Validation(format!(
            "page-rotation-cadence must be >= 1, got {}",
            config.page_rotation_cadence
        )));
    }

    if config.detail_rotation_cadence < 1 {
        return Err(ConfigError::Validation(format!(
            "detail-rotation-cadence must be >= 1, got {}",
            config.detail_rotation_cadence
        )));
    }

    Ok(())
}

/// Validates fetch behavior configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.retry_budget < 1 {
        return Err(ConfigError::Validation(format!(
            "retry-budget must be >= 1, got {}",
            config.retry_budget
        )));
    }

    if !config.item_delay_secs.is_finite() || config.item_delay_secs < 0.0 {
        return Err(ConfigError::Validation(format!(
            "item-delay-secs must be >= 0, got {}",
            config.item_delay_secs
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.results_path.is_empty() {
        return Err(ConfigError::Validation(
            "results-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
