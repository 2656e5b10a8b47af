//! HTML parsing for href extraction
//!
//! Pulls the raw `<a href>` values out of a fetched page, in document order.
//! Resolution, normalization, and domain filtering happen in the link
//! classifier; this module only reads the markup.

use scraper::{Html, Selector};

/// Extracts all raw `<a href>` values from an HTML document
///
/// **Include:** every `<a href="...">` in the document, in order.
///
/// **Exclude:**
/// - `<a href="..." download>` (explicit file-save links)
/// - empty hrefs
///
/// Raw values are returned untouched beyond trimming; the link classifier
/// decides what is navigable.
///
/// # Example
///
/// ```
/// use gossamer::crawler::extract_hrefs;
///
/// let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
/// assert_eq!(extract_hrefs(html), vec!["/page".to_string()]);
/// ```
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut hrefs = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if element.value().attr("download").is_some() {
                continue;
            }

            if let Some(href) = element.value().attr("href") {
                let href = href.trim();
                if !href.is_empty() {
                    hrefs.push(href.to_string());
                }
            }
        }
    }

    hrefs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_href() {
        let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
        assert_eq!(extract_hrefs(html), vec!["/page".to_string()]);
    }

    #[test]
    fn test_extract_multiple_hrefs_in_order() {
        let html = r#"
            <html>
            <body>
                <a href="/page1">Link 1</a>
                <a href="/page2">Link 2</a>
                <a href="https://other.com/page3">Link 3</a>
            </body>
            </html>
        "#;
        assert_eq!(
            extract_hrefs(html),
            vec![
                "/page1".to_string(),
                "/page2".to_string(),
                "https://other.com/page3".to_string()
            ]
        );
    }

    #[test]
    fn test_skip_download_links() {
        let html = r#"<html><body><a href="/file.pdf" download>Download</a></body></html>"#;
        assert!(extract_hrefs(html).is_empty());
    }

    #[test]
    fn test_skip_empty_href() {
        let html = r#"<html><body><a href="   ">Blank</a></body></html>"#;
        assert!(extract_hrefs(html).is_empty());
    }

    #[test]
    fn test_anchor_without_href_ignored() {
        let html = r#"<html><body><a name="top">Anchor</a></body></html>"#;
        assert!(extract_hrefs(html).is_empty());
    }

    #[test]
    fn test_raw_values_kept_verbatim() {
        // Special schemes are filtered later by the link classifier
        let html = r#"<html><body><a href="mailto:test@example.com">Email</a></body></html>"#;
        assert_eq!(extract_hrefs(html), vec!["mailto:test@example.com"]);
    }

    #[test]
    fn test_no_links() {
        let html = r#"<html><body><p>No links here</p></body></html>"#;
        assert!(extract_hrefs(html).is_empty());
    }
}
