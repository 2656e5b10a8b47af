//! Link partitioning: crawlable pages vs downloadable assets
//!
//! Raw hrefs from a page are resolved against the page URL, normalized,
//! deduplicated, restricted to the page's registered domain, and then split
//! by file extension into the two disjoint sets the crawl engine consumes.

use crate::url::{normalize_url, same_registered_domain};
use std::collections::HashSet;
use url::Url;

/// The two disjoint link sets produced from one page's outbound links
#[derive(Debug, Default)]
pub struct LinkPartition {
    /// Same-domain links that look like HTML pages, eligible for recursion
    pub pages: Vec<Url>,

    /// Same-domain links whose final path segment carries a downloadable
    /// extension
    pub assets: Vec<Url>,
}

/// Partitions a page's raw hrefs into crawlable and asset links
///
/// Each href is resolved relative to `base`, normalized, deduplicated within
/// this page's link list, and kept only when it shares the base URL's
/// registered domain. Malformed or unresolvable hrefs are dropped silently.
/// Every surviving link lands in exactly one of the two output sets.
///
/// # Arguments
///
/// * `base` - The (normalized) URL of the page the hrefs came from
/// * `hrefs` - Raw href values in document order
/// * `asset_extensions` - Lowercase extensions treated as downloadable
pub fn partition_links(base: &Url, hrefs: &[String], asset_extensions: &[String]) -> LinkPartition {
    let mut seen: HashSet<String> = HashSet::new();
    let mut partition = LinkPartition::default();

    for href in hrefs {
        let resolved = match resolve_link(href, base) {
            Some(u) => u,
            None => continue,
        };

        let normalized = match normalize_url(resolved.as_str()) {
            Ok(u) => u,
            Err(_) => continue,
        };

        if !seen.insert(normalized.as_str().to_string()) {
            continue;
        }

        if !same_registered_domain(base, &normalized) {
            continue;
        }

        match asset_extension(&normalized) {
            Some(ext) if asset_extensions.iter().any(|e| e == &ext) => {
                partition.assets.push(normalized);
            }
            _ => partition.pages.push(normalized),
        }
    }

    partition
}

/// Resolves a raw href against a base URL, excluding non-navigable links
///
/// Returns None for empty hrefs, fragment-only anchors, `javascript:`,
/// `mailto:`, `tel:` and `data:` links, and anything that fails to resolve
/// to an HTTP(S) URL.
fn resolve_link(href: &str, base: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base.join(href) {
        Ok(resolved) if resolved.scheme() == "http" || resolved.scheme() == "https" => {
            Some(resolved)
        }
        _ => None,
    }
}

/// Returns the lowercase extension of a URL's final path segment, if any
///
/// ```
/// use gossamer::url::asset_extension;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/files/report.PDF").unwrap();
/// assert_eq!(asset_extension(&url), Some("pdf".to_string()));
/// ```
pub fn asset_extension(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.last()?;
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
