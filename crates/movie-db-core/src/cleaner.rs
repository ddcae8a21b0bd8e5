//! Rating normalization
//!
//! Turns the scraped rating text into a number and drops the records where
//! that is not possible. Cleaning never reorders records.

use crate::types::{MovieRecord, Rating};

/// Extract a numeric rating from scraped text.
///
/// The leading decimal number is taken (`"9.2(1.2M)"` -> `9.2`). Text that
/// does not start with a digit is still accepted if the whole trimmed string
/// is a decimal, such as `".5"`. Non-finite values are rejected.
///
/// # Examples
/// ```
/// use movie_db_core::cleaner::clean_rating;
///
/// assert_eq!(clean_rating("9.2 (1.2M)"), Some(9.2));
/// assert_eq!(clean_rating("8"), Some(8.0));
/// assert_eq!(clean_rating("unrated"), None);
/// ```
pub fn clean_rating(raw: &str) -> Option<f64> {
    let candidate = leading_number(raw).unwrap_or_else(|| raw.trim());
    candidate.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Leading `<digits>[.<digits>]` of a string.
fn leading_number(text: &str) -> Option<&str> {
    let re = regex_lite::Regex::new(r"^\d+(?:\.\d+)?").ok()?;
    re.find(text).map(|m| m.as_str())
}

/// Coerce every rating to a number and drop records that fail.
///
/// Already numeric ratings are kept as they are, so cleaning twice is the
/// same as cleaning once. An empty record set has no rating column to clean
/// and is passed through untouched.
pub fn clean(records: Vec<MovieRecord>) -> Vec<MovieRecord> {
    if records.is_empty() {
        tracing::warn!("'rating' column not found in the scraped data");
        return records;
    }

    let before = records.len();
    let cleaned: Vec<MovieRecord> = records
        .into_iter()
        .filter_map(|mut record| {
            let score = match &record.rating {
                Rating::Score(value) => Some(*value).filter(|v| v.is_finite()),
                Rating::Raw(text) => clean_rating(text),
            }?;
            record.rating = Rating::Score(score);
            Some(record)
        })
        .collect();

    let dropped = before - cleaned.len();
    if dropped > 0 {
        tracing::debug!("Dropped {} records without a numeric rating", dropped);
    }

    cleaned
}
