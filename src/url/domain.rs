use std::net::IpAddr;
use url::Url;

/// Extracts the registered domain (eTLD+1) from a hostname
///
/// Uses the Public Suffix List so multi-label TLDs resolve correctly:
/// `a.b.example.co.uk` yields `example.co.uk`. Hosts the list does not
/// cover fall back to their last two labels; IP literals are returned
/// verbatim so loopback addresses compare equal to themselves.
///
/// # Examples
///
/// ```
/// use gossamer::url::registered_domain;
///
/// assert_eq!(registered_domain("blog.example.com"), "example.com");
/// assert_eq!(registered_domain("a.b.example.co.uk"), "example.co.uk");
/// assert_eq!(registered_domain("127.0.0.1"), "127.0.0.1");
/// ```
pub fn registered_domain(host: &str) -> String {
    if host.parse::<IpAddr>().is_ok() {
        return host.to_string();
    }

    match psl::domain(host.as_bytes()) {
        Some(domain) => String::from_utf8_lossy(domain.as_bytes()).to_string(),
        // Fallback for hosts outside the PSL (e.g. localhost, intranet names)
        None => {
            let parts: Vec<&str> = host.split('.').collect();
            if parts.len() >= 2 {
                format!("{}.{}", parts[parts.len() - 2], parts[parts.len() - 1])
            } else {
                host.to_string()
            }
        }
    }
}

/// Checks whether two URLs share a registered domain
///
/// Subdomains of one registered domain are considered the same site:
/// `blog.example.com` and `example.com` match. URLs without a host never
/// match anything.
pub fn same_registered_domain(base: &Url, target: &Url) -> bool {
    match (base.host_str(), target.host_str()) {
        (Some(b), Some(t)) => {
            registered_domain(&b.to_lowercase()) == registered_domain(&t.to_lowercase())
        }
        _ => false,
    }
}

/// Returns the grouping key for a URL: its host with any leading `www.` removed
///
/// This is the key used to partition documents and asset directories per
/// domain in the output layout.
pub fn domain_label(url: &Url) -> Option<String> {
    url.host_str().map(|h| {
        let host = h.to_lowercase();
        match host.strip_prefix("www.") {
            Some(rest) => rest.to_string(),
            None => host,
        }
    })
}
