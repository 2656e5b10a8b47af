//! Crawl-and-extract orchestration
//!
//! Drives the crawl engine over a seed batch, runs every fetched page
//! through the extraction pipeline, attaches downloaded asset references,
//! groups documents per domain, and hands each group to the output writer.
//! The orchestrator owns its clients and configuration explicitly; nothing
//! is ambient, and no state survives between invocations.

use crate::assets::AssetStore;
use crate::config::{Config, SeedEntry};
use crate::crawler::{build_http_client, CrawlEngine};
use crate::extract::{extract_document, ExtractedDocument};
use crate::url::domain_label;
use crate::{output, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Owns the engine, the asset store, and the output root for one service
pub struct Orchestrator {
    engine: CrawlEngine,
    assets: AssetStore,
    output_root: PathBuf,
}

impl Orchestrator {
    /// Builds an orchestrator from validated configuration
    ///
    /// Two HTTP clients are constructed: the page client with the shorter
    /// page timeout and the asset client with the longer asset timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let page_client = build_http_client(
            &config.user_agent,
            Duration::from_secs(config.crawler.page_timeout_secs),
        )?;
        let asset_client = build_http_client(
            &config.user_agent,
            Duration::from_secs(config.crawler.asset_timeout_secs),
        )?;

        let output_root = PathBuf::from(&config.output.root_dir);

        Ok(Self {
            engine: CrawlEngine::new(page_client, &config.crawler),
            assets: AssetStore::new(asset_client, &output_root),
            output_root,
        })
    }

    /// Crawls a seed batch and returns the full flat document sequence
    ///
    /// Per-domain output files are written as a side effect; a failed write
    /// is logged and never fails the call, so the returned documents are
    /// complete even when persistence is not.
    pub async fn crawl_and_extract(
        &self,
        seeds: &[SeedEntry],
        text_only: bool,
    ) -> Vec<ExtractedDocument> {
        tracing::info!("Starting crawl and extract for {} seed(s)", seeds.len());

        let pages = self.engine.crawl_all(seeds).await;

        let mut documents = Vec::new();
        for page in &pages {
            let mut document = extract_document(page, text_only);
            let domain = domain_label(&page.url).unwrap_or_default();

            for asset_url in &page.asset_links {
                if let Some(reference) = self.assets.download(asset_url, &domain).await {
                    document.linked_assets.push(reference);
                }
            }

            documents.push(document);
        }

        tracing::info!(
            "Extraction complete: returning {} document(s)",
            documents.len()
        );

        for (domain, group) in group_by_domain(&documents) {
            match output::write_domain_group(&self.output_root, &domain, &group) {
                Ok(path) => {
                    tracing::info!("Saved {} document(s) to {}", group.len(), path.display());
                }
                Err(e) => {
                    tracing::error!("Failed to write output for {}: {}", domain, e);
                }
            }
        }

        documents
    }
}

/// Groups documents by their URL's domain label (leading `www.` stripped)
///
/// Document order within each group follows the input sequence.
pub fn group_by_domain(
    documents: &[ExtractedDocument],
) -> HashMap<String, Vec<ExtractedDocument>> {
    let mut groups: HashMap<String, Vec<ExtractedDocument>> = HashMap::new();

    for document in documents {
        let domain = Url::parse(&document.url)
            .ok()
            .and_then(|url| domain_label(&url))
            .unwrap_or_default();
        groups.entry(domain).or_default().push(document.clone());
    }

    groups
}
