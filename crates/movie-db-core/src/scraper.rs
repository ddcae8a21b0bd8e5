//! Main movie database scraper API
//!
//! This module ties the HTTP client, the parsers, the enricher, the cleaner
//! and the store together into a single run:
//! fetch chart → extract → enrich → clean → save.

use crate::cleaner;
use crate::client::HttpClient;
use crate::config::Config;
use crate::enricher::Enricher;
use crate::error::{MovieDbError, Result};
use crate::parser::parse_chart;
use crate::store;
use crate::types::MovieRecord;

/// Main scraper API
///
/// # Example
/// ```no_run
/// use movie_db_core::{Config, MovieScraper};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = MovieScraper::new(Config::from_env())?;
///
///     let records = scraper.scrape_and_save().await?;
///     println!("Saved {} movies", records.len());
///
///     Ok(())
/// }
/// ```
pub struct MovieScraper {
    client: HttpClient,
    enricher: Enricher,
    config: Config,
}

impl MovieScraper {
    /// Create a new scraper for the given configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        let client = HttpClient::new()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a new scraper with a pre-built client.
    pub fn with_client(client: HttpClient, config: Config) -> Self {
        let enricher = Enricher::new(
            client.clone(),
            config.lookup_url.clone(),
            config.api_key.clone(),
            config.lookup_pause,
        );

        Self {
            client,
            enricher,
            config,
        }
    }

    /// Fetch and parse the chart page.
    ///
    /// # Returns
    /// * `Ok(Vec<MovieRecord>)` with raw ratings, in chart order
    /// * `Err(MovieDbError::HttpStatus)` / `Err(MovieDbError::HttpError)` if
    ///   the page could not be fetched
    /// * `Err(MovieDbError::EmptyChart)` if no entry could be parsed
    pub async fn scrape_chart(&self) -> Result<Vec<MovieRecord>> {
        let html = self.client.fetch(&self.config.chart_url, &[]).await?;
        let records = parse_chart(&html)?;

        if records.is_empty() {
            return Err(MovieDbError::EmptyChart);
        }

        Ok(records)
    }

    /// Attach lookup metadata to every record, in order.
    pub async fn enrich(&self, records: Vec<MovieRecord>) -> Vec<MovieRecord> {
        self.enricher.enrich(records).await
    }

    /// Run the whole pipeline and return the records that were written.
    ///
    /// Chart failures abort before anything is written. Lookup and rating
    /// problems are handled per record.
    pub async fn scrape_and_save(&self) -> Result<Vec<MovieRecord>> {
        tracing::info!("Starting IMDb scrape...");
        let records = self.scrape_chart().await?;

        tracing::info!("Scraping complete. Now fetching additional data from OMDb...");
        let enriched = self.enrich(records).await;

        let cleaned = cleaner::clean(enriched);
        store::save(&cleaned, &self.config.output_path)?;

        Ok(cleaned)
    }
}
