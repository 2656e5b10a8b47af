//! Gossamer: a domain-scoped web spider for clean-text harvesting
//!
//! This crate crawls seed URLs to a bounded link depth within each seed's
//! registered domain, extracts readable text from every fetched page, downloads
//! linked assets, and groups the resulting documents per domain.

pub mod assets;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod orchestrator;
pub mod output;
pub mod server;
pub mod url;

use thiserror::Error;

/// Main error type for Gossamer operations
#[derive(Debug, Error)]
pub enum GossamerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
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

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Result type alias for Gossamer operations
pub type Result<T> = std::result::Result<T, GossamerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::ExtractedDocument;
pub use orchestrator::Orchestrator;
pub use url::{domain_label, normalize_url, registered_domain, same_registered_domain};
