//! Video metadata extraction.

use scraper::Html;

use crate::error::Result;
use crate::page::{element_text, select_first};

/// Descriptive fields of one video, used to name its output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    /// Breadcrumb label of the lecture series.
    pub topic: String,

    /// Video title.
    pub title: String,

    /// First listed creator.
    pub creator: String,

    /// Recording date, year first (`YYYY-MM-DD`).
    pub date: String,
}

/// Reorder a `DD.MM.YYYY` date to `YYYY-MM-DD`.
pub fn reformat_date(date: &str) -> String {
    date.split('.').rev().collect::<Vec<_>>().join("-")
}

/// Parse a video page into its metadata.
pub fn parse_metadata(document: &Html) -> Result<VideoMetadata> {
    let root = document.root_element();

    let video_info = select_first(root, "div#video-info")?;
    let date = element_text(select_first(video_info, "div.video-label")?);

    let path = select_first(root, "div.path")?;
    let topic = element_text(select_first(path, "span.breadcrumb-item")?);

    let title = element_text(select_first(root, "h2.video-title")?);

    let creators = select_first(root, "div.allcreators")?;
    let creator = element_text(select_first(creators, "a")?);

    Ok(VideoMetadata {
        topic,
        title,
        creator,
        date: reformat_date(&date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const VIDEO_PAGE: &str = r#"
        <html><body>
          <div class="path">
            <span class="breadcrumb-item"> Lineare Algebra </span>
            <span class="breadcrumb-item">WiSe 23/24</span>
          </div>
          <h2 class="video-title">
            Vorlesung 3: Vektorräume
          </h2>
          <div class="allcreators">
            <a href="/creator/1">Prof. Dr. Muster</a>, <a href="/creator/2">Dr. Beispiel</a>
          </div>
          <div id="video-info">
            <div class="video-label">07.11.2023</div>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_reformat_date() {
        assert_eq!(reformat_date("07.11.2023"), "2023-11-07");
        assert_eq!(reformat_date("31.12.1999"), "1999-12-31");
        assert_eq!(reformat_date("01.01.2024"), "2024-01-01");
    }

    #[test]
    fn test_parse_metadata() {
        let metadata = parse_metadata(&Html::parse_document(VIDEO_PAGE)).unwrap();
        assert_eq!(
            metadata,
            VideoMetadata {
                topic: "Lineare Algebra".to_string(),
                title: "Vorlesung 3: Vektorräume".to_string(),
                creator: "Prof. Dr. Muster".to_string(),
                date: "2023-11-07".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_element_is_page_structure_error() {
        let page = VIDEO_PAGE.replace("allcreators", "creators");
        let err = parse_metadata(&Html::parse_document(&page)).unwrap_err();
        match err {
            Error::PageStructure(what) => assert_eq!(what, "div.allcreators"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_date_label_outside_video_info_is_ignored() {
        let page = VIDEO_PAGE.replace(r#"id="video-info""#, r#"id="other""#);
        assert!(matches!(
            parse_metadata(&Html::parse_document(&page)),
            Err(Error::PageStructure(_))
        ));
    }
}
