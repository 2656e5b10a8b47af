use crate::config::types::{Config, CrawlerConfig, OutputConfig, ServerConfig, UserAgentConfig};
use crate::ConfigError;
use std::net::SocketAddr;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    validate_server_config(&config.server)?;
    validate_seeds(config)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_concurrent_fetches < 1 || config.max_concurrent_fetches > 100 {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_fetches must be between 1 and 100, got {}",
            config.max_concurrent_fetches
        )));
    }

    if config.page_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "page_timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.asset_timeout_secs < config.page_timeout_secs {
        return Err(ConfigError::Validation(format!(
            "asset_timeout_secs ({}) must not be shorter than page_timeout_secs ({})",
            config.asset_timeout_secs, config.page_timeout_secs
        )));
    }

    if config.asset_extensions.is_empty() {
        return Err(ConfigError::Validation(
            "asset_extensions cannot be empty".to_string(),
        ));
    }

    for ext in &config.asset_extensions {
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Validation(format!(
                "asset extension must be alphanumeric, got '{}'",
                ext
            )));
        }
        if ext.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::Validation(format!(
                "asset extension must be lowercase, got '{}'",
                ext
            )));
        }
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.root_dir.is_empty() {
        return Err(ConfigError::Validation(
            "root_dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config
        .bind_addr
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::Validation(format!("Invalid bind_addr: {}", e)))?;

    Ok(())
}

/// Validates seed entries
fn validate_seeds(config: &Config) -> Result<(), ConfigError> {
    for seed in &config.seed {
        if seed.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "seed url cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{default_asset_extensions, SeedEntry};

    fn base_config() -> Config {
        Config {
            crawler: CrawlerConfig {
                max_concurrent_fetches: 16,
                page_timeout_secs: 10,
                asset_timeout_secs: 15,
                asset_extensions: default_asset_extensions(),
            },
            user_agent: UserAgentConfig {
                crawler_name: "gossamer".to_string(),
                crawler_version: "1.0".to_string(),
                contact_url: "https://example.com/about".to_string(),
            },
            output: OutputConfig {
                root_dir: "./output".to_string(),
            },
            server: ServerConfig::default(),
            seed: vec![SeedEntry {
                url: "https://example.com".to_string(),
                depth: 1,
            }],
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&base_config()).is_ok());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = base_config();
        config.crawler.max_concurrent_fetches = 0;
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_excessive_concurrency_rejected() {
        let mut config = base_config();
        config.crawler.max_concurrent_fetches = 500;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_asset_timeout_shorter_than_page_timeout_rejected() {
        let mut config = base_config();
        config.crawler.asset_timeout_secs = 5;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_extension_list_rejected() {
        let mut config = base_config();
        config.crawler.asset_extensions.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_uppercase_extension_rejected() {
        let mut config = base_config();
        config.crawler.asset_extensions.push("PDF".to_string());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_crawler_name_rejected() {
        let mut config = base_config();
        config.user_agent.crawler_name = "bad name!".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_contact_url_rejected() {
        let mut config = base_config();
        config.user_agent.contact_url = "not a url".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_empty_root_dir_rejected() {
        let mut config = base_config();
        config.output.root_dir = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_bind_addr_rejected() {
        let mut config = base_config();
        config.server.bind_addr = "nonsense".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_seed_url_rejected() {
        let mut config = base_config();
        config.seed.push(SeedEntry {
            url: "   ".to_string(),
            depth: 0,
        });
        assert!(validate(&config).is_err());
    }
}
