//! Filename generation and manipulation.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use crate::error::{Error, Result};
use crate::page::VideoMetadata;

/// Extension of the concatenated transport stream.
pub const VIDEO_EXTENSION: &str = "ts";

/// Sanitize a path component (folder or file name part).
///
/// Path separators and characters rejected by common filesystems are
/// replaced with underscores. Components that would still name the current
/// or parent directory are rejected.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    if sanitized == "." || sanitized == ".." {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    Ok(sanitized)
}

/// Format the generation timestamp embedded in filenames.
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%Y%m%d-%H%M%S").to_string()
}

/// Build `<date>_<creator>_<title>_<timestamp>.ts` for a video.
pub fn build_video_filename(metadata: &VideoMetadata, timestamp: &str) -> Result<String> {
    Ok(format!(
        "{}_{}_{}_{}.{}",
        sanitize_path_component(&metadata.date)?,
        sanitize_path_component(&metadata.creator)?,
        sanitize_path_component(&metadata.title)?,
        timestamp,
        VIDEO_EXTENSION
    ))
}

/// Give up after this many numbered alternatives.
const MAX_UNIQUE_ATTEMPTS: u32 = 1000;

/// Generate a unique filename by appending a number if the file exists.
///
/// Never returns a path that already exists.
pub fn make_unique_filename(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Ok(path.to_path_buf());
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parent = path.parent().unwrap_or(Path::new("."));

    for counter in 1..=MAX_UNIQUE_ATTEMPTS {
        let new_name = if ext.is_empty() {
            format!("{}_{}", stem, counter)
        } else {
            format!("{}_{}.{}", stem, counter, ext)
        };

        let new_path = parent.join(&new_name);
        if !new_path.exists() {
            return Ok(new_path);
        }
    }

    Err(Error::InvalidFilename(format!(
        "No free name for {} after {} attempts",
        path.display(),
        MAX_UNIQUE_ATTEMPTS
    )))
}
