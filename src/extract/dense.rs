//! Primary dense-text extraction via Readability
//!
//! Pulls the main readable text out of a page while discarding boilerplate
//! (navigation, footers, ad blocks). Pages the algorithm cannot confidently
//! reduce to an article yield `None`, which the pipeline treats as a signal
//! to fall back to the heuristic extractor.

use dom_smoothie::Readability;

/// Extracts the dense body text of a page, if the page has one
///
/// Setup failures, parse failures, and whitespace-only output all map to
/// `None`; this function never panics on hostile markup.
pub fn dense_text(html: &str) -> Option<String> {
    let mut readability = match Readability::new(html, None, None) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("Readability rejected document: {}", e);
            return None;
        }
    };

    let article = match readability.parse() {
        Ok(article) => article,
        Err(e) => {
            tracing::debug!("Readability found no content: {}", e);
            return None;
        }
    };

    let text = article.text_content.to_string();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
