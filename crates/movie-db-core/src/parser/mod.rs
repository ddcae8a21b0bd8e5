//! Parsers for fetched content
//!
//! This module contains parsers for extracting data from:
//! - `chart`: the IMDb Top chart HTML page
//! - `lookup`: OMDb JSON responses

pub mod chart;
pub mod lookup;

// Re-export main parsing functions
pub use chart::{first_token, parse_chart, strip_rank};
pub use lookup::parse_lookup_response;
