//! Configuration module for the lecture2go-downloader.
//!
//! This module handles:
//! - The in-memory run configuration built from CLI arguments
//! - Resolution policy definitions
//! - Configuration validation

pub mod modes;
pub mod options;
pub mod validation;

pub use modes::ResolutionPolicy;
pub use options::Config;
pub use validation::{validate_config, validate_password, validate_url};
