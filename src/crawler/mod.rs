//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP client construction and page fetching
//! - HTML parsing and href extraction
//! - Depth-bounded recursive traversal with batch-wide deduplication

mod engine;
mod fetcher;
mod parser;

pub use engine::{CrawlEngine, PageRecord};
pub use fetcher::{build_http_client, fetch_page};
pub use parser::extract_hrefs;
