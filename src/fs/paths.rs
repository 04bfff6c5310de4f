//! Output path construction.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use crate::error::Result;
use crate::fs::naming::{
    build_video_filename, format_timestamp, make_unique_filename, sanitize_path_component,
};
use crate::page::VideoMetadata;

/// Folder holding all videos of a topic.
pub fn topic_folder(base_dir: &Path, topic: &str) -> Result<PathBuf> {
    Ok(base_dir.join(sanitize_path_component(topic)?))
}

/// Full output path for a video generated at `generated_at`.
pub fn video_output_path<Tz: TimeZone>(
    base_dir: &Path,
    metadata: &VideoMetadata,
    generated_at: &DateTime<Tz>,
) -> Result<PathBuf>
where
    Tz::Offset: std::fmt::Display,
{
    let folder = topic_folder(base_dir, &metadata.topic)?;
    let filename = build_video_filename(metadata, &format_timestamp(generated_at))?;
    make_unique_filename(&folder.join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_topic_folder() {
        let path = topic_folder(Path::new("videos"), "Analysis I/II").unwrap();
        assert_eq!(path, PathBuf::from("videos/Analysis I_II"));
        assert!(topic_folder(Path::new("videos"), "..").is_err());
    }

    #[test]
    fn test_video_output_path() {
        let metadata = VideoMetadata {
            topic: "Analysis I".to_string(),
            title: "Folgen".to_string(),
            creator: "Dr. Beispiel".to_string(),
            date: "2023-10-17".to_string(),
        };
        let time = Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap(),
        );

        let path = video_output_path(Path::new("/downloads"), &metadata, &time).unwrap();
        assert_eq!(
            path,
            PathBuf::from("/downloads/Analysis I/2023-10-17_Dr. Beispiel_Folgen_20240102-030405.ts")
        );
    }
}
