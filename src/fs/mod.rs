//! Filesystem module.
//!
//! Provides:
//! - Output path construction
//! - Filename generation and sanitizing

pub mod naming;
pub mod paths;

pub use naming::{
    build_video_filename, format_timestamp, make_unique_filename, sanitize_path_component,
};
pub use paths::{topic_folder, video_output_path};
