//! Download module for lecture recordings.
//!
//! This module provides:
//! - M3U8/HLS manifest resolution
//! - Resolution selection strategies
//! - Sequential segment download and concatenation
//! - The per-video pipeline and series orchestration
//! - Run statistics

pub mod m3u8;
pub mod pipeline;
pub mod segments;
pub mod select;
pub mod state;

pub use m3u8::{PlaylistVariant, Segment};
pub use pipeline::Downloader;
pub use segments::write_segments;
pub use select::{selector_for, AutomaticSelector, InteractiveSelector, ResolutionSelector};
pub use state::{RunStats, VideoReport};
