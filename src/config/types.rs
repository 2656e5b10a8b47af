use serde::Deserialize;

/// Main configuration structure for Gossamer
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub seed: Vec<SeedEntry>,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of page fetches in flight at once
    #[serde(rename = "max-concurrent-fetches", default = "default_max_concurrent")]
    pub max_concurrent_fetches: u32,

    /// Per-request timeout for page fetches, in seconds
    #[serde(rename = "page-timeout-secs", default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    /// Per-request timeout for asset downloads, in seconds
    #[serde(rename = "asset-timeout-secs", default = "default_asset_timeout")]
    pub asset_timeout_secs: u64,

    /// File extensions treated as downloadable assets rather than pages
    #[serde(rename = "asset-extensions", default = "default_asset_extensions")]
    pub asset_extensions: Vec<String>,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving per-domain JSON files and downloaded assets
    #[serde(rename = "root-dir")]
    pub root_dir: String,
}

/// HTTP front-end configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the /crawl endpoint binds to
    #[serde(rename = "bind-addr", default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// A crawl root: one seed URL with its link-hop budget
///
/// Also the per-item shape of the HTTP front end's request batch.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEntry {
    /// The URL to start crawling from
    pub url: String,

    /// Additional link hops allowed from this seed; 0 crawls only the seed
    #[serde(default = "default_depth")]
    pub depth: u32,
}

fn default_max_concurrent() -> u32 {
    16
}

fn default_page_timeout() -> u64 {
    10
}

fn default_asset_timeout() -> u64 {
    15
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_depth() -> u32 {
    1
}

/// The default downloadable-extension set
pub fn default_asset_extensions() -> Vec<String> {
    [
        "pdf", "csv", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt", "zip", "gz", "tar",
        "rar", "png", "jpg", "jpeg", "gif", "webp", "svg", "mp3", "mp4",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
