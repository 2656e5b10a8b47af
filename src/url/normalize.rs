use crate::UrlError;
use url::Url;

/// Normalizes a URL into its canonical crawl identity
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Parse the URL; a scheme-less URL is retried with an `https://` prefix
/// 3. Reject schemes other than HTTP and HTTPS
/// 4. Strip trailing slashes from the path, unless the path is the root `/`
/// 5. Remove the query string
/// 6. Remove the fragment
///
/// Two URLs that normalize identically are the same crawl target; the
/// normalized string form is the dedup key used by the crawl engine.
///
/// Normalization is idempotent: `normalize_url(u)` run on its own output
/// yields the same URL.
///
/// # Arguments
///
/// * `raw` - The URL string to normalize
///
/// # Returns
///
/// * `Ok(Url)` - Normalized URL
/// * `Err(UrlError)` - Failed to parse or normalize the URL
///
/// # Examples
///
/// ```
/// use gossamer::url::normalize_url;
///
/// let url = normalize_url("example.com/page/").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/page");
/// ```
pub fn normalize_url(raw: &str) -> Result<Url, UrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Malformed("empty URL".to_string()));
    }

    // Step 2: Parse, defaulting a missing scheme to https
    let mut url = match Url::parse(trimmed) {
        Ok(u) => u,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{}", trimmed))
                .map_err(|e| UrlError::Parse(e.to_string()))?
        }
        Err(e) => return Err(UrlError::Parse(e.to_string())),
    };

    // Step 3: Validate scheme
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingDomain);
    }

    // Step 4: Strip trailing slashes, keeping the root path
    let path = url.path();
    let stripped = path.trim_end_matches('/');
    if stripped.is_empty() {
        url.set_path("/");
    } else if stripped != path {
        let stripped = stripped.to_string();
        url.set_path(&stripped);
    }

    // Steps 5 & 6: Drop query and fragment from the crawl identity
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
