//! Manifest reference lookup.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// An HTTPS URL ending in the HLS manifest extension.
static MANIFEST_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https://[^\s"'<>]+?\.m3u8"#).expect("manifest URL pattern is valid")
});

/// Find the first master manifest URL embedded in a page body.
pub fn find_manifest_url(body: &str) -> Result<String> {
    MANIFEST_URL
        .find(body)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::ManifestNotFound(format!("{} bytes searched", body.len())))
}
