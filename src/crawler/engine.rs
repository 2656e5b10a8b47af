//! Depth-bounded recursive crawl engine
//!
//! The engine walks each seed's link graph inside its registered domain,
//! deduplicating against a visited set shared across the whole batch. A
//! branch marks its URL visited before the fetch suspends, so two branches
//! racing to the same target can never both fetch it. Fan-out per level is
//! concurrent with join-all semantics; a global semaphore bounds how many
//! fetches are in flight at once.

use crate::config::{CrawlerConfig, SeedEntry};
use crate::crawler::{extract_hrefs, fetch_page};
use crate::url::{normalize_url, partition_links};
use futures::future::{join_all, BoxFuture};
use reqwest::Client;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;
use url::Url;

/// One successfully fetched page, before extraction
#[derive(Debug, Clone)]
pub struct PageRecord {
    /// Normalized URL of the page
    pub url: Url,

    /// Raw HTML body as fetched
    pub html: String,

    /// Remaining link-hop budget at fetch time (seed depth for roots)
    pub depth: u32,

    /// Same-domain links classified as downloadable assets
    pub asset_links: Vec<Url>,
}

/// Recursive crawler over seed URLs
///
/// The engine owns the HTTP client, the in-flight limiter, and the asset
/// extension set; the visited set lives for exactly one `crawl_all` call,
/// so separate invocations never share dedup state.
pub struct CrawlEngine {
    client: Client,
    limiter: Arc<Semaphore>,
    asset_extensions: Vec<String>,
}

impl CrawlEngine {
    /// Creates an engine from a built HTTP client and the crawler config
    pub fn new(client: Client, config: &CrawlerConfig) -> Self {
        Self {
            client,
            limiter: Arc::new(Semaphore::new(config.max_concurrent_fetches as usize)),
            asset_extensions: config.asset_extensions.clone(),
        }
    }

    /// Crawls every seed in order, sharing one visited set across the batch
    ///
    /// Seeds are processed sequentially; within a seed, child links fan out
    /// concurrently. A seed whose URL cannot be normalized is logged and
    /// skipped; it contributes no records and does not affect its siblings.
    /// The returned sequence is flat, with each page preceding its
    /// descendants.
    pub async fn crawl_all(&self, seeds: &[SeedEntry]) -> Vec<PageRecord> {
        let visited = Mutex::new(HashSet::new());
        let mut records = Vec::new();

        for seed in seeds {
            let url = match normalize_url(&seed.url) {
                Ok(u) => u,
                Err(e) => {
                    tracing::warn!("Skipping malformed seed URL {}: {}", seed.url, e);
                    continue;
                }
            };

            tracing::info!("Crawling seed {} (depth {})", url, seed.depth);
            records.extend(self.crawl_url(&visited, url, seed.depth).await);
        }

        tracing::info!("Crawl finished: {} pages fetched", records.len());
        records
    }

    /// Recursively crawls one URL and its same-domain descendants
    ///
    /// The check-and-mark on the visited set is a single operation under the
    /// lock and happens before the first await, which keeps the "fetched at
    /// most once" invariant under the multi-threaded runtime. The semaphore
    /// permit is held only across the fetch itself, never across recursion,
    /// so deep crawls cannot exhaust the permit pool.
    fn crawl_url<'a>(
        &'a self,
        visited: &'a Mutex<HashSet<String>>,
        url: Url,
        depth: u32,
    ) -> BoxFuture<'a, Vec<PageRecord>> {
        Box::pin(async move {
            {
                let mut visited = visited.lock().unwrap();
                if !visited.insert(url.as_str().to_string()) {
                    return Vec::new();
                }
            }

            tracing::debug!("Fetching {} (depth {})", url, depth);

            let body = {
                let _permit = self.limiter.acquire().await.ok();
                fetch_page(&self.client, &url).await
            };

            let html = match body {
                Some(html) => html,
                None => return Vec::new(),
            };

            let hrefs = extract_hrefs(&html);
            let partition = partition_links(&url, &hrefs, &self.asset_extensions);

            let mut records = vec![PageRecord {
                url: url.clone(),
                html,
                depth,
                asset_links: partition.assets,
            }];

            // depth 0 means this page spends the last hop; no children
            if depth > 0 {
                let children = join_all(
                    partition
                        .pages
                        .into_iter()
                        .map(|link| self.crawl_url(visited, link, depth - 1)),
                )
                .await;

                for child in children {
                    records.extend(child);
                }
            }

            records
        })
    }
}
