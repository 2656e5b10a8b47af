//! Asset download store
//!
//! Downloads linked files (PDFs, spreadsheets, images, archives) and persists
//! them under a domain-scoped directory inside the output root. Every failure
//! is contained: a download that cannot complete simply contributes no
//! reference to its page's document.

use crate::url::asset_extension;
use reqwest::Client;
use serde::Serialize;
use std::path::{Path, PathBuf};
use url::Url;

/// A successfully downloaded asset attached to a document
#[derive(Debug, Clone, Serialize)]
pub struct AssetReference {
    /// Source URL of the asset
    pub url: String,

    /// Lowercase file extension
    #[serde(rename = "type")]
    pub file_type: String,

    /// Local path the asset was saved to
    pub path: String,
}

/// Downloads assets into `<output-root>/assets/<domain>/<filename>`
pub struct AssetStore {
    client: Client,
    root: PathBuf,
}

impl AssetStore {
    /// Creates a store rooted under the output directory
    ///
    /// The client should carry the asset timeout, which is allowed to be
    /// longer than the page timeout.
    pub fn new(client: Client, output_root: &Path) -> Self {
        Self {
            client,
            root: output_root.join("assets"),
        }
    }

    /// Downloads one asset, returning its reference on success
    ///
    /// The filename is the URL's final path segment; a URL without one is
    /// logged and skipped. Transport errors, non-2xx statuses, and write
    /// failures all yield `None`.
    pub async fn download(&self, url: &Url, domain: &str) -> Option<AssetReference> {
        let filename = match url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|name| !name.is_empty())
        {
            Some(name) => name.to_string(),
            None => {
                tracing::warn!("No usable filename in asset URL: {}", url);
                return None;
            }
        };

        let save_dir = self.root.join(domain);
        if let Err(e) = tokio::fs::create_dir_all(&save_dir).await {
            tracing::error!(
                "Failed to create asset directory {}: {}",
                save_dir.display(),
                e
            );
            return None;
        }

        let response = match self.client.get(url.clone()).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Failed to download {}: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("HTTP {} downloading {}", status.as_u16(), url);
            return None;
        }

        let bytes = match response.bytes().await {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!("Failed to read asset body from {}: {}", url, e);
                return None;
            }
        };

        let save_path = save_dir.join(&filename);
        if let Err(e) = tokio::fs::write(&save_path, &bytes).await {
            tracing::error!("Failed to write asset {}: {}", save_path.display(), e);
            return None;
        }

        tracing::info!("Downloaded {} -> {}", url, save_path.display());

        Some(AssetReference {
            url: url.as_str().to_string(),
            file_type: asset_extension(url).unwrap_or_default(),
            path: save_path.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_reference_serializes_type_field() {
        let reference = AssetReference {
            url: "https://example.com/doc.pdf".to_string(),
            file_type: "pdf".to_string(),
            path: "output/assets/example.com/doc.pdf".to_string(),
        };

        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json["type"], "pdf");
        assert!(json.get("file_type").is_none());
    }

    // Download behavior is exercised against mock servers in the
    // integration tests under tests/.
}
