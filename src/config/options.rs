//! Run configuration.

use std::path::PathBuf;

use crate::config::modes::ResolutionPolicy;

/// Default output directory, relative to the working directory.
pub const DEFAULT_DOWNLOAD_DIRECTORY: &str = "videos";

/// Configuration for a single run, assembled from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Video or series page URL.
    pub url: String,

    /// Password for protected videos.
    pub password: Option<String>,

    /// Download every video of the series containing `url`.
    pub download_all: bool,

    /// Automatic resolution policy; `None` asks interactively.
    pub resolution: Option<ResolutionPolicy>,

    /// Base directory for downloads.
    pub download_directory: PathBuf,

    /// Browser user agent string.
    pub user_agent: String,

    /// Skip TLS certificate verification (the portal's CDN needs this).
    pub accept_invalid_certs: bool,

    /// Whether to show per-segment progress.
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            password: None,
            download_all: false,
            resolution: Some(ResolutionPolicy::default()),
            download_directory: PathBuf::from(DEFAULT_DOWNLOAD_DIRECTORY),
            user_agent: default_user_agent(),
            accept_invalid_certs: true,
            show_progress: true,
        }
    }
}

/// Browser user agent sent with every request.
pub fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36".to_string()
}

impl Config {
    /// Create a configuration for the given URL with defaults elsewhere.
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Human-readable description of the selection mode.
    pub fn resolution_label(&self) -> String {
        match self.resolution {
            Some(policy) => policy.to_string(),
            None => "interactive".to_string(),
        }
    }
}
