//! Download statistics.

use std::path::PathBuf;

/// Outcome of one completed video download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReport {
    /// Written file.
    pub path: PathBuf,

    /// Width of the downloaded variant.
    pub resolution_width: u64,

    pub segments: usize,

    pub bytes: u64,
}

/// Statistics accumulated over a whole run.
#[derive(Debug, Default)]
pub struct RunStats {
    pub videos_planned: usize,
    pub videos_downloaded: u64,
    pub segments_written: u64,
    pub bytes_written: u64,
    pub files: Vec<PathBuf>,
}

impl RunStats {
    /// Create statistics for a run over `videos_planned` videos.
    pub fn new(videos_planned: usize) -> Self {
        Self {
            videos_planned,
            ..Default::default()
        }
    }

    /// Record a completed video.
    pub fn record(&mut self, report: &VideoReport) {
        self.videos_downloaded += 1;
        self.segments_written += report.segments as u64;
        self.bytes_written += report.bytes;
        self.files.push(report.path.clone());
    }
}
