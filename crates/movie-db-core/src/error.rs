//! Error types for the movie database scraper
//!
//! This module defines all error types used throughout the library.
//! Per-record problems (a failed lookup, an unparseable rating) are recovered
//! where they happen and never reach the caller as one of these.

use thiserror::Error;

/// Error type for movie database operations
#[derive(Error, Debug)]
pub enum MovieDbError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with anything other than 200 OK
    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Lookup API body was not valid JSON
    #[error("Invalid JSON response: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The chart page was fetched but contained no usable entries
    #[error("No movies found on the chart page")]
    EmptyChart,

    /// Writing the output file failed
    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type alias for movie database operations
pub type Result<T> = std::result::Result<T, MovieDbError>;
