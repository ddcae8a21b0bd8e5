//! Movie Database Scraper Core Library
//!
//! This crate scrapes the IMDb Top chart, enriches every entry with
//! metadata from the OMDb API, cleans the ratings and saves the result
//! as CSV.
//!
//! # Features
//! - Parse the chart page into ordered title/rating records
//! - Sequential, paced metadata lookups with per-record failure isolation
//! - Numeric rating cleaning
//! - CSV output

pub mod cleaner;
pub mod client;
pub mod config;
pub mod enricher;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use client::HttpClient;
pub use config::Config;
pub use enricher::Enricher;
pub use error::{MovieDbError, Result};
pub use scraper::MovieScraper;
pub use types::{Metadata, MovieRecord, Rating, NOT_AVAILABLE};
