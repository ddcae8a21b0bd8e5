//! Data types for the movie database scraper
//!
//! A run produces one ordered `Vec<MovieRecord>`. Records start life with the
//! raw rating text scraped from the chart, gain metadata from the lookup API,
//! and end up with a numeric rating after cleaning.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker used for metadata the lookup API did not supply
pub const NOT_AVAILABLE: &str = "N/A";

/// Column names of the output file, in record field order
pub const CSV_HEADER: [&str; 6] = ["title", "rating", "box_office", "awards", "genre", "director"];

/// Rating of a chart entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    /// Text as scraped, before cleaning (e.g. "9.2" or "9.2(1.2M)")
    Raw(String),
    /// Cleaned numeric score
    Score(f64),
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Raw(text) => f.write_str(text),
            // Whole scores keep one decimal so 9.0 does not print as "9"
            Rating::Score(value) if value.fract() == 0.0 => write!(f, "{:.1}", value),
            Rating::Score(value) => write!(f, "{}", value),
        }
    }
}

/// The four fields copied from a successful lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub box_office: String,
    pub awards: String,
    pub genre: String,
    pub director: String,
}

impl Metadata {
    /// Metadata with every field set to the "N/A" marker
    pub fn not_available() -> Self {
        Self {
            box_office: NOT_AVAILABLE.to_string(),
            awards: NOT_AVAILABLE.to_string(),
            genre: NOT_AVAILABLE.to_string(),
            director: NOT_AVAILABLE.to_string(),
        }
    }
}

/// One ranked title
///
/// Metadata fields are `None` when the lookup for this title failed, and
/// `Some("N/A")` when the lookup succeeded but did not include the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Title with the leading rank number removed
    pub title: String,
    /// Raw or cleaned rating
    pub rating: Rating,
    pub box_office: Option<String>,
    pub awards: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
}

impl MovieRecord {
    /// Create a freshly scraped record with no metadata
    pub fn new(title: impl Into<String>, raw_rating: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rating: Rating::Raw(raw_rating.into()),
            box_office: None,
            awards: None,
            genre: None,
            director: None,
        }
    }

    /// Attach the result of a successful lookup
    pub fn apply_metadata(&mut self, metadata: Metadata) {
        self.box_office = Some(metadata.box_office);
        self.awards = Some(metadata.awards);
        self.genre = Some(metadata.genre);
        self.director = Some(metadata.director);
    }

    /// Whether any lookup result has been attached
    pub fn has_metadata(&self) -> bool {
        self.box_office.is_some()
            || self.awards.is_some()
            || self.genre.is_some()
            || self.director.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_no_metadata() {
        let record = MovieRecord::new("The Godfather", "9.2");
        assert_eq!(record.rating, Rating::Raw("9.2".to_string()));
        assert!(!record.has_metadata());
    }

    #[test]
    fn test_apply_metadata() {
        let mut record = MovieRecord::new("Heat", "8.3");
        record.apply_metadata(Metadata {
            box_office: "$67,436,818".to_string(),
            ..Metadata::not_available()
        });

        assert!(record.has_metadata());
        assert_eq!(record.box_office.as_deref(), Some("$67,436,818"));
        assert_eq!(record.director.as_deref(), Some(NOT_AVAILABLE));
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::Score(8.5).to_string(), "8.5");
        assert_eq!(Rating::Score(9.0).to_string(), "9.0");
        assert_eq!(Rating::Raw("9.2(1.2M)".to_string()).to_string(), "9.2(1.2M)");
    }

    #[test]
    fn test_record_serialization() {
        let mut record = MovieRecord::new("Alien", "8.5");
        record.rating = Rating::Score(8.5);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"rating\":8.5"));
        assert!(json.contains("\"box_office\":null"));

        let deserialized: MovieRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
    }
}
