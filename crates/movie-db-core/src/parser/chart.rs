//! Chart page parser for IMDb
//!
//! Parses the Top chart HTML into an ordered list of records holding the
//! title and the raw rating text.

use scraper::{ElementRef, Html, Selector};

use crate::error::{MovieDbError, Result};
use crate::types::MovieRecord;

/// One entry of the ranked list
const ITEM_SELECTOR: &str = "li.ipc-metadata-list-summary-item";

/// Heading carrying "<rank>. <title>"
const TITLE_SELECTOR: &str = "h3.ipc-title__text";

/// Star rating, usually followed by the vote count
const RATING_SELECTOR: &str = "span.ipc-rating-star--imdb";

/// Parse chart entries from the IMDb Top chart page HTML.
///
/// Items without a title or a rating element are skipped. Document order is
/// preserved.
///
/// # Arguments
/// * `html` - Raw HTML content of the chart page
///
/// # Returns
/// * `Ok(Vec<MovieRecord>)` with raw ratings, possibly empty
/// * `Err(MovieDbError::ParseError)` if a selector cannot be built
pub fn parse_chart(html: &str) -> Result<Vec<MovieRecord>> {
    let document = Html::parse_document(html);

    let item_selector = selector(ITEM_SELECTOR)?;
    let title_selector = selector(TITLE_SELECTOR)?;
    let rating_selector = selector(RATING_SELECTOR)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for item in document.select(&item_selector) {
        match parse_chart_item(&item, &title_selector, &rating_selector) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} chart items without title or rating", skipped);
    }
    tracing::info!("Total movies scraped: {}", records.len());

    Ok(records)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| MovieDbError::ParseError(format!("Invalid selector: {:?}", e)))
}

/// Parse a single list item into a record.
fn parse_chart_item(
    item: &ElementRef,
    title_selector: &Selector,
    rating_selector: &Selector,
) -> Option<MovieRecord> {
    let title_el = item.select(title_selector).next()?;
    let rating_el = item.select(rating_selector).next()?;

    let title = strip_rank(&element_text(&title_el));
    let rating = first_token(&element_text(&rating_el))?.to_string();

    Some(MovieRecord::new(title, rating))
}

/// Concatenate the trimmed text nodes of an element.
///
/// A rating rendered as `<span>9.3<span>(3M)</span></span>` becomes
/// `"9.3(3M)"`; the cleaner takes care of the suffix.
fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<String>()
}

/// Drop the leading rank token and rejoin the rest with single spaces.
///
/// # Examples
/// ```
/// use movie_db_core::parser::strip_rank;
///
/// assert_eq!(strip_rank("1. The Shawshank Redemption"), "The Shawshank Redemption");
/// assert_eq!(strip_rank("12.  Fight   Club"), "Fight Club");
/// ```
pub fn strip_rank(text: &str) -> String {
    text.split_whitespace().skip(1).collect::<Vec<_>>().join(" ")
}

/// First whitespace-delimited token of a string, if any.
pub fn first_token(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}
