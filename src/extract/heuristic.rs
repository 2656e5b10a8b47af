//! Heuristic DOM extraction
//!
//! Derives title, headers, and body directly from markup structure, with no
//! boilerplate removal. This is the fallback when dense extraction finds
//! nothing, and the sole structured source in full mode.

use scraper::{Html, Selector};

/// Structured content pulled straight from the markup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeuristicContent {
    /// `<title>` text, trimmed; empty when absent
    pub title: String,

    /// `<h1>`/`<h2>`/`<h3>` texts in document order
    pub headers: Vec<String>,

    /// All `<p>` texts, trimmed and joined by single spaces
    pub body: String,
}

/// Extracts title, headers, and paragraph text from an HTML document
///
/// Missing elements degrade to empty fields; this function has no failure
/// mode.
pub fn heuristic_content(html: &str) -> HeuristicContent {
    let document = Html::parse_document(html);

    let title = select_texts(&document, "title")
        .into_iter()
        .next()
        .unwrap_or_default();

    let headers = select_texts(&document, "h1, h2, h3");

    let body = select_texts(&document, "p").join(" ");

    HeuristicContent {
        title,
        headers,
        body,
    }
}

/// Collects the trimmed text of every element matching the selector,
/// skipping elements whose text is empty
fn select_texts(document: &Html, selector: &str) -> Vec<String> {
    match Selector::parse(selector) {
        Ok(selector) => document
            .select(&selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect(),
        Err(_) => Vec::new(),
    }
}
