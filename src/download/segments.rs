//! Sequential segment download and concatenation.

use std::path::Path;

use indicatif::ProgressBar;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::api::Transport;
use crate::download::m3u8::Segment;
use crate::error::{Error, Result};

/// Download `segments` in order and concatenate them into `output_path`.
///
/// Parent directories are created as needed and the file is always created
/// fresh. On failure the partially written file is flushed and left on disk.
/// Returns the number of bytes written.
pub async fn write_segments(
    transport: &dyn Transport,
    segments: &[Segment],
    output_path: &Path,
    progress: &ProgressBar,
) -> Result<u64> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut file = File::create(output_path).await?;

    let written = append_segments(transport, segments, &mut file, progress).await;
    let flushed = file.flush().await;
    progress.finish_and_clear();

    let written = written?;
    flushed?;

    Ok(written)
}

async fn append_segments(
    transport: &dyn Transport,
    segments: &[Segment],
    file: &mut File,
    progress: &ProgressBar,
) -> Result<u64> {
    let total = segments.len();
    let mut written: u64 = 0;

    for (index, segment) in segments.iter().enumerate() {
        let bytes = transport.get_bytes(&segment.url).await.map_err(|e| {
            Error::Download(format!("Segment {}/{} failed: {}", index + 1, total, e))
        })?;

        file.write_all(&bytes).await?;
        written += bytes.len() as u64;

        tracing::debug!("Segment {}/{}: {} bytes", index + 1, total, bytes.len());
        progress.inc(1);
    }

    Ok(written)
}
