//! Configuration module for Gossamer
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use gossamer::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Output root: {}", config.output.root_dir);
//! ```

mod parser;
mod types;
mod validation;

pub use types::{
    Config, CrawlerConfig, OutputConfig, SeedEntry, ServerConfig, UserAgentConfig,
    default_asset_extensions,
};

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
