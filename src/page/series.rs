//! Series listing extraction.

use scraper::Html;
use url::Url;

use crate::error::{Error, Result};
use crate::page::{element_text, select_first, selector};

/// One related video of a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesEntry {
    /// Date label as shown on the page.
    pub date: String,

    pub title: String,

    /// Absolute video page URL.
    pub url: String,
}

/// Parse the related-videos list of a page.
///
/// The page lists the newest video first; entries are returned oldest first.
pub fn parse_series(document: &Html, page_url: &Url) -> Result<Vec<SeriesEntry>> {
    let list = select_first(document.root_element(), "ul.ul-related")?;
    let item_selector = selector("li")?;

    let mut entries = Vec::new();
    for item in list.select(&item_selector) {
        let date = element_text(select_first(item, "div.video-label")?);
        let heading = select_first(item, "h4.video-title")?;
        let link = select_first(heading, "a")?;

        let href = link
            .value()
            .attr("href")
            .ok_or_else(|| Error::PageStructure("h4.video-title a[href]".to_string()))?;

        entries.push(SeriesEntry {
            date,
            title: element_text(link),
            url: page_url.join(href)?.to_string(),
        });
    }

    entries.reverse();
    Ok(entries)
}
