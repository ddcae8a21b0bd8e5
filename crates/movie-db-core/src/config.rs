//! Run configuration
//!
//! Built once by the entry point and handed to [`crate::MovieScraper`]; nothing
//! in the library reads the environment on its own.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the OMDb API key
pub const OMDB_API_KEY_VAR: &str = "OMDB_API_KEY";

/// IMDb Top chart page
pub const DEFAULT_CHART_URL: &str = "https://www.imdb.com/chart/top/";

/// OMDb lookup endpoint
pub const DEFAULT_LOOKUP_URL: &str = "http://www.omdbapi.com/";

/// Pause between two successive lookups
pub const DEFAULT_LOOKUP_PAUSE: Duration = Duration::from_secs(1);

/// Output file written to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "cleaned_movie_data.csv";

/// Configuration for a scrape-enrich-clean-save run
#[derive(Debug, Clone)]
pub struct Config {
    /// Ranking page to scrape
    pub chart_url: String,
    /// Lookup API endpoint
    pub lookup_url: String,
    /// Lookup API key; `None` leaves the `apikey` parameter off the request
    pub api_key: Option<String>,
    /// Fixed pause after each lookup before the next one starts (default: 1s)
    pub lookup_pause: Duration,
    /// Where the cleaned records are written
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chart_url: DEFAULT_CHART_URL.to_string(),
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            api_key: None,
            lookup_pause: DEFAULT_LOOKUP_PAUSE,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    /// Load the configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first if present.
    /// A missing API key is not an error here; every lookup will fail instead.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }

        Self {
            api_key: std::env::var(OMDB_API_KEY_VAR).ok(),
            ..Self::default()
        }
    }
}
