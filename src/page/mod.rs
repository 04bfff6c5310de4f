//! Video page scraping.
//!
//! Everything that knows the portal's HTML layout lives behind
//! [`PageParser`], so layout changes stay inside this module.

pub mod manifest;
pub mod metadata;
pub mod series;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{Error, Result};

pub use manifest::find_manifest_url;
pub use metadata::{parse_metadata, reformat_date, VideoMetadata};
pub use series::{parse_series, SeriesEntry};

/// Typed view over a video page.
pub trait PageParser {
    /// Extract topic, title, creator and date.
    fn metadata(&self, html: &str) -> Result<VideoMetadata>;

    /// List the related videos of the series, oldest first.
    fn series(&self, html: &str, page_url: &Url) -> Result<Vec<SeriesEntry>>;

    /// Find the master manifest URL referenced by the page.
    fn manifest_url(&self, body: &str) -> Result<String>;
}

/// Parser for the Lecture2Go video page layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lecture2GoParser;

impl PageParser for Lecture2GoParser {
    fn metadata(&self, html: &str) -> Result<VideoMetadata> {
        parse_metadata(&Html::parse_document(html))
    }

    fn series(&self, html: &str, page_url: &Url) -> Result<Vec<SeriesEntry>> {
        parse_series(&Html::parse_document(html), page_url)
    }

    fn manifest_url(&self, body: &str) -> Result<String> {
        find_manifest_url(body)
    }
}

/// Compile a CSS selector.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::PageStructure(format!("{} (bad selector: {})", css, e)))
}

/// First element under `scope` matching `css`, or a page structure error.
pub(crate) fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Result<ElementRef<'a>> {
    let sel = selector(css)?;
    scope
        .select(&sel)
        .next()
        .ok_or_else(|| Error::PageStructure(css.to_string()))
}

/// Trimmed text content of an element and its descendants.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
