//! Per-domain JSON output writer
//!
//! Serializes each domain's document group to `<output-root>/<domain>.json`
//! as a pretty-printed JSON array. Files are fully overwritten on each
//! write; nothing is merged across invocations.

use crate::extract::ExtractedDocument;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes one domain's documents to its JSON file, returning the path
///
/// Creates the output root on demand. Non-ASCII text is preserved as-is in
/// the serialized output.
pub fn write_domain_group(
    root: &Path,
    domain: &str,
    documents: &[ExtractedDocument],
) -> Result<PathBuf> {
    fs::create_dir_all(root)?;

    let path = root.join(format!("{}.json", domain));
    let json = serde_json::to_string_pretty(documents)?;
    fs::write(&path, json)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn doc(url: &str, text: &str) -> ExtractedDocument {
        ExtractedDocument {
            url: url.to_string(),
            title: None,
            headers: None,
            text: text.to_string(),
            linked_assets: Vec::new(),
        }
    }

    #[test]
    fn test_writes_json_array() {
        let dir = tempdir().unwrap();
        let docs = vec![
            doc("https://example.com/a", "first"),
            doc("https://example.com/b", "second"),
        ];

        let path = write_domain_group(dir.path(), "example.com", &docs).unwrap();
        assert_eq!(path, dir.path().join("example.com.json"));

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["text"], "first");
    }

    #[test]
    fn test_non_ascii_preserved() {
        let dir = tempdir().unwrap();
        let docs = vec![doc("https://example.com/é", "naïve café — 研究")];

        let path = write_domain_group(dir.path(), "example.com", &docs).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("naïve café — 研究"));
    }

    #[test]
    fn test_overwrites_previous_file() {
        let dir = tempdir().unwrap();

        let first = vec![doc("https://example.com/a", "old")];
        write_domain_group(dir.path(), "example.com", &first).unwrap();

        let second = vec![doc("https://example.com/b", "new")];
        let path = write_domain_group(dir.path(), "example.com", &second).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("new"));
        assert!(!content.contains("old"));
    }

    #[test]
    fn test_creates_missing_root() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep/output");

        let result = write_domain_group(&nested, "example.com", &[]);
        assert!(result.is_ok());
        assert!(nested.join("example.com.json").exists());
    }
}
