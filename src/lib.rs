//! Lecture2Go Downloader - lecture recordings from the Lecture2Go portal
//!
//! This library locates the HLS stream behind a Lecture2Go video page,
//! picks a quality variant and concatenates its segments into one file.
//!
//! # Features
//!
//! - Password-protected videos
//! - Whole lecture series, oldest video first
//! - Automatic (min/max) or interactive resolution selection
//! - Output named after topic, date, creator and title
//!
//! # Example
//!
//! ```no_run
//! use lecture2go_downloader::{
//!     api::Session, download::selector_for, page::Lecture2GoParser, Config, Downloader,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::for_url("https://lecture2go.uni-hamburg.de/l2go/-/get/v/12345");
//!     let session = Session::new(&config)?;
//!
//!     let stats = Downloader::new(&session, &Lecture2GoParser, selector_for(&config), &config)
//!         .run()
//!         .await?;
//!     println!("{} video(s) downloaded", stats.videos_downloaded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod page;

// Re-exports for convenience
pub use api::{AccessGate, Session, Transport};
pub use config::{Config, ResolutionPolicy};
pub use download::{Downloader, RunStats, VideoReport};
pub use error::{Error, Result};
pub use page::{Lecture2GoParser, PageParser, SeriesEntry, VideoMetadata};
