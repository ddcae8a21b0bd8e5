//! Movie database CLI entry point
//!
//! Scrapes the IMDb Top chart, enriches it from OMDb, saves
//! `cleaned_movie_data.csv`, then serves an interactive menu over the result.

mod menu;

use std::io;

use anyhow::Context;
use movie_db_core::{Config, MovieScraper};

use crate::menu::Console;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    if config.api_key.is_none() {
        tracing::debug!("OMDB_API_KEY is not set");
    }

    let scraper = MovieScraper::new(config).context("failed to create HTTP client")?;

    let records = match scraper.scrape_and_save().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to scrape and save data. Exiting.");
            return Err(e).context("scrape failed");
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock())
        .run(&records)
        .context("console I/O failed")?;

    Ok(())
}
