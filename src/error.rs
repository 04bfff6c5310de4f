//! Error types for the lecture2go-downloader application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Access errors
    #[error("Password required for protected video: {0}")]
    CredentialRequired(String),

    #[error("Password rejected for protected video: {0}")]
    CredentialIncorrect(String),

    // Page errors
    #[error("Unexpected page structure: missing '{0}'")]
    PageStructure(String),

    // Manifest errors
    #[error("No manifest reference found in page: {0}")]
    ManifestNotFound(String),

    #[error("Manifest has no usable variants: {0}")]
    ManifestEmpty(String),

    #[error("M3U8 processing error: {0}")]
    M3U8(String),

    #[error("Resolution selection failed: {0}")]
    Selection(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CREDENTIAL_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const PAGE_ERROR: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
}
