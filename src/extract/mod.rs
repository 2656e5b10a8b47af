//! Extraction pipeline: fetched HTML to structured documents
//!
//! Text-only mode runs the dense-text extractor first and falls back to the
//! heuristic DOM extractor when it finds nothing. Full mode always uses the
//! heuristic extractor, which is the sole source of title and headers. Both
//! extractors report present/absent outcomes; extraction degrades to empty
//! fields rather than failing a page.

mod dense;
mod heuristic;

pub use dense::dense_text;
pub use heuristic::{heuristic_content, HeuristicContent};

use crate::assets::AssetReference;
use crate::crawler::PageRecord;
use serde::Serialize;

/// One extracted document, ready for grouping and serialization
///
/// Text-only mode serializes `{url, text, linked_assets}`; full mode adds
/// `title` and `headers`.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    /// Normalized URL of the source page
    pub url: String,

    /// Page title; present in full mode and for empty pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// h1/h2/h3 texts in document order; present in full mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,

    /// Extracted body text
    pub text: String,

    /// Successfully downloaded assets linked from this page
    pub linked_assets: Vec<AssetReference>,
}

/// Converts a fetched page into a document
///
/// An empty HTML body produces a minimal document rather than a failure.
/// In text-only mode the dense extractor's absence triggers the heuristic
/// fallback; in full mode the heuristic extractor runs unconditionally.
/// `linked_assets` is left empty here; the orchestrator fills it in after
/// downloads complete.
pub fn extract_document(record: &PageRecord, text_only: bool) -> ExtractedDocument {
    let url = record.url.as_str().to_string();

    if record.html.is_empty() {
        return ExtractedDocument {
            url,
            title: Some(String::new()),
            headers: None,
            text: String::new(),
            linked_assets: Vec::new(),
        };
    }

    if text_only {
        let text = match dense_text(&record.html) {
            Some(text) => text,
            None => {
                tracing::info!("Falling back to heuristic extraction for {}", record.url);
                heuristic_content(&record.html).body
            }
        };

        ExtractedDocument {
            url,
            title: None,
            headers: None,
            text: text.trim().to_string(),
            linked_assets: Vec::new(),
        }
    } else {
        let content = heuristic_content(&record.html);

        ExtractedDocument {
            url,
            title: Some(content.title),
            headers: Some(content.headers),
            text: content.body,
            linked_assets: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn record(html: &str) -> PageRecord {
        PageRecord {
            url: Url::parse("https://example.com/page").unwrap(),
            html: html.to_string(),
            depth: 0,
            asset_links: Vec::new(),
        }
    }

    #[test]
    fn test_empty_html_minimal_document() {
        let doc = extract_document(&record(""), true);
        assert_eq!(doc.url, "https://example.com/page");
        assert_eq!(doc.title, Some(String::new()));
        assert_eq!(doc.text, "");
        assert!(doc.linked_assets.is_empty());
    }

    #[test]
    fn test_text_only_fallback_to_paragraphs() {
        // Too little content for the dense extractor; the heuristic
        // paragraph path must supply the text.
        let html = r#"<html><head><title>T</title></head><body><p>Hello</p></body></html>"#;
        let doc = extract_document(&record(html), true);
        assert_eq!(doc.text, "Hello");
        assert_eq!(doc.title, None);
        assert_eq!(doc.headers, None);
    }

    #[test]
    fn test_full_mode_uses_heuristic_fields() {
        let html = r#"
            <html>
            <head><title>Guide</title></head>
            <body>
                <h1>Intro</h1>
                <p>First paragraph.</p>
                <h2>Details</h2>
                <p>Second paragraph.</p>
            </body>
            </html>
        "#;
        let doc = extract_document(&record(html), false);
        assert_eq!(doc.title, Some("Guide".to_string()));
        assert_eq!(
            doc.headers,
            Some(vec!["Intro".to_string(), "Details".to_string()])
        );
        assert_eq!(doc.text, "First paragraph. Second paragraph.");
    }

    #[test]
    fn test_text_only_serialization_shape() {
        let html = r#"<html><body><p>Hi</p></body></html>"#;
        let doc = extract_document(&record(html), true);
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("title").is_none());
        assert!(json.get("headers").is_none());
        assert!(json.get("text").is_some());
        assert!(json.get("linked_assets").is_some());
    }

    #[test]
    fn test_full_mode_serialization_shape() {
        let html = r#"<html><head><title>T</title></head><body><p>Hi</p></body></html>"#;
        let doc = extract_document(&record(html), false);
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("title").is_some());
        assert!(json.get("headers").is_some());
    }
}
