//! Per-video download pipeline and series orchestration.

use chrono::Local;
use indicatif::ProgressBar;
use url::Url;

use crate::api::{AccessGate, Transport};
use crate::config::Config;
use crate::download::m3u8::{load_segments, load_variants};
use crate::download::segments::write_segments;
use crate::download::select::ResolutionSelector;
use crate::download::state::{RunStats, VideoReport};
use crate::error::{Error, Result};
use crate::fs::video_output_path;
use crate::output::{create_segment_bar, print_info, print_success, print_warning};
use crate::page::PageParser;

/// Drives a run: resolves the video queue and downloads each video in turn.
///
/// Any error aborts the whole run; a partially written file stays on disk.
pub struct Downloader<'a> {
    transport: &'a dyn Transport,
    parser: &'a dyn PageParser,
    selector: Box<dyn ResolutionSelector + 'a>,
    gate: AccessGate,
    config: &'a Config,
}

impl<'a> Downloader<'a> {
    pub fn new(
        transport: &'a dyn Transport,
        parser: &'a dyn PageParser,
        selector: Box<dyn ResolutionSelector + 'a>,
        config: &'a Config,
    ) -> Self {
        Self {
            transport,
            parser,
            selector,
            gate: AccessGate::new(config.password.clone()),
            config,
        }
    }

    /// Download every queued video.
    pub async fn run(&mut self) -> Result<RunStats> {
        let queue = self.video_queue().await?;
        if queue.is_empty() {
            print_warning("No videos found to download");
        }

        let mut stats = RunStats::new(queue.len());
        for (index, url) in queue.iter().enumerate() {
            print_info(&format!("Video {}/{}: {}", index + 1, queue.len(), url));

            let report = self.download_video(url).await?;
            stats.record(&report);
        }

        Ok(stats)
    }

    /// URLs to download, oldest first in series mode.
    pub async fn video_queue(&self) -> Result<Vec<String>> {
        if !self.config.download_all {
            return Ok(vec![self.config.url.clone()]);
        }

        tracing::info!("Parsing website for all videos in series...");
        let page_url = Url::parse(&self.config.url)?;
        let body = self.gate.open_page(self.transport, &self.config.url).await?;
        let entries = self.parser.series(&body, &page_url)?;
        tracing::info!("Found {} videos in series", entries.len());

        for entry in &entries {
            tracing::debug!("{} | {} | {}", entry.date, entry.title, entry.url);
        }

        Ok(entries.into_iter().map(|entry| entry.url).collect())
    }

    /// Download a single video page's stream into one file.
    pub async fn download_video(&mut self, url: &str) -> Result<VideoReport> {
        tracing::info!("Starting to fetch content from {}", url);
        let body = self.gate.open_page(self.transport, url).await?;

        // Everything needed to name and fill the file is resolved before writing.
        let metadata = self.parser.metadata(&body)?;
        let manifest_url = self.parser.manifest_url(&body)?;
        tracing::debug!("Metadata: {:?}", metadata);
        tracing::debug!("Manifest: {}", manifest_url);

        let variants = load_variants(self.transport, &manifest_url).await?;
        let index = self.selector.select(&variants)?;
        let variant = variants
            .get(index)
            .ok_or_else(|| Error::Selection(format!("variant index {} out of range", index)))?;
        tracing::info!(
            "Using {}x{} variant",
            variant.resolution_width,
            variant.resolution_height
        );

        let segments = load_segments(self.transport, variant).await?;
        let output_path =
            video_output_path(&self.config.download_directory, &metadata, &Local::now())?;

        print_info(&format!(
            "Downloading {} ({} segments)...",
            output_path.display(),
            segments.len()
        ));

        let progress = if self.config.show_progress {
            create_segment_bar(segments.len() as u64)
        } else {
            ProgressBar::hidden()
        };

        let bytes = write_segments(self.transport, &segments, &output_path, &progress).await?;
        print_success(&format!("Saved {}", output_path.display()));

        Ok(VideoReport {
            path: output_path,
            resolution_width: variant.resolution_width,
            segments: segments.len(),
            bytes,
        })
    }
}
