use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[catalog]
base-url = "https://store.playstation.com/en-tr/category/deals/"
site-origin = "https://store.playstation.com"
first-page = 1
last-page = 243

[proxy]
list-path = "./proxy.txt"
page-rotation-cadence = 5
detail-rotation-cadence = 10

[fetch]
retry-budget = 3
item-delay-secs = 1.5
shuffle-items = true

[output]
results-path = "./psn_games.json"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.catalog.first_page, 1);
        assert_eq!(config.catalog.last_page, 243);
        assert_eq!(config.proxy.page_rotation_cadence, 5);
        assert_eq!(config.proxy.detail_rotation_cadence, 10);
        assert_eq!(config.fetch.retry_budget, 3);
        assert!(config.fetch.shuffle_items);
    }

    #[test]
    fn test_shuffle_defaults_to_false() {
        let config_content = r#"
[catalog]
base-url = "https://store.playstation.com/en-tr/category/deals/"
site-origin = "https://store.playstation.com"
first-page = 1
last-page = 2

[proxy]
list-path = "./proxy.txt"
page-rotation-cadence = 5
detail-rotation-cadence = 10

[fetch]
retry-budget = 3
item-delay-secs = 0.0

[output]
results-path = "./psn_games.json"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();
        assert!(!config.fetch.shuffle_items);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let config_content = "this is not valid TOML {{{";
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[catalog]
base-url = "https://store.playstation.com/en-tr/category/deals/"
site-origin = "https://store.playstation.com"
first-page = 1
last-page = 2

[proxy]
list-path = "./proxy.txt"
page-rotation-cadence = 0
detail-rotation-cadence = 10

[fetch]
retry-budget = 3
item-delay-secs = 1.0

[output]
results-path = "./psn_games.json"
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
