//! HTTP front end
//!
//! A thin axum wrapper around the orchestrator: `POST /crawl` accepts a
//! batch of seed URLs (a single object or a list) plus a text-only flag and
//! responds with the extracted document sequence. Request validation
//! failures surface as client errors; everything past validation is
//! contained inside the orchestrator and always yields a response.

use crate::config::{Config, SeedEntry};
use crate::extract::ExtractedDocument;
use crate::orchestrator::Orchestrator;
use crate::{GossamerError, Result};
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;

/// Seed batch: the original wire shape accepts one seed or a list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SeedBatch {
    One(SeedEntry),
    Many(Vec<SeedEntry>),
}

impl SeedBatch {
    fn into_vec(self) -> Vec<SeedEntry> {
        match self {
            SeedBatch::One(seed) => vec![seed],
            SeedBatch::Many(seeds) => seeds,
        }
    }
}

/// `POST /crawl` request body
#[derive(Debug, Deserialize)]
pub struct CrawlRequest {
    pub urls: SeedBatch,

    /// Text-only extraction (dense text with heuristic fallback); `false`
    /// requests full structured documents with title and headers
    #[serde(default = "default_text_only")]
    pub extract_text_only: bool,
}

fn default_text_only() -> bool {
    true
}

/// `POST /crawl` response envelope
#[derive(Debug, Serialize)]
pub struct CrawlResponse {
    pub status: &'static str,
    pub data: Vec<ExtractedDocument>,
}

/// Builds the application router
pub fn router(orchestrator: Arc<Orchestrator>) -> Router {
    Router::new()
        .route("/crawl", post(handle_crawl))
        .with_state(orchestrator)
}

/// Handles a crawl request end to end
///
/// The orchestrator contains every per-URL failure internally, so a
/// well-formed request always receives a success envelope, possibly with an
/// empty or partial document list.
async fn handle_crawl(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(request): Json<CrawlRequest>,
) -> Json<CrawlResponse> {
    let seeds = request.urls.into_vec();
    tracing::info!("Received crawl request with {} URL(s)", seeds.len());

    let data = orchestrator
        .crawl_and_extract(&seeds, request.extract_text_only)
        .await;

    Json(CrawlResponse {
        status: "success",
        data,
    })
}

/// Runs the HTTP front end until the process is stopped
pub async fn serve(config: Config) -> Result<()> {
    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .map_err(|e| GossamerError::Server(format!("invalid bind address: {}", e)))?;

    let orchestrator = Arc::new(Orchestrator::new(&config)?);
    let app = router(orchestrator);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_seed_body_deserializes() {
        let body = r#"{"urls": {"url": "https://example.com", "depth": 2}}"#;
        let request: CrawlRequest = serde_json::from_str(body).unwrap();

        let seeds = request.urls.into_vec();
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].url, "https://example.com");
        assert_eq!(seeds[0].depth, 2);
        assert!(request.extract_text_only);
    }

    #[test]
    fn test_seed_list_body_deserializes() {
        let body = r#"{
            "urls": [
                {"url": "https://a.com"},
                {"url": "https://b.com", "depth": 0}
            ],
            "extract_text_only": false
        }"#;
        let request: CrawlRequest = serde_json::from_str(body).unwrap();

        let seeds = request.urls.into_vec();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].depth, 1, "depth defaults to 1");
        assert_eq!(seeds[1].depth, 0);
        assert!(!request.extract_text_only);
    }

    #[test]
    fn test_negative_depth_rejected() {
        let body = r#"{"urls": {"url": "https://example.com", "depth": -1}}"#;
        assert!(serde_json::from_str::<CrawlRequest>(body).is_err());
    }

    #[test]
    fn test_missing_urls_rejected() {
        let body = r#"{"extract_text_only": true}"#;
        assert!(serde_json::from_str::<CrawlRequest>(body).is_err());
    }
}
