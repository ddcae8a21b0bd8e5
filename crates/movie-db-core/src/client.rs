//! HTTP client for the chart page and the lookup API
//!
//! This module provides a thin GET client that reports any non-200 answer as
//! an error.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::StatusCode;

use crate::error::{MovieDbError, Result};

/// Default User-Agent mimicking a modern browser
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default Accept-Language header so the chart is served in English
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// GET-only HTTP client shared by the chart fetch and the lookups
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new client with browser-like default headers
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
        );

        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the body of `url` as text
    ///
    /// `query` pairs are percent-encoded and appended to the URL.
    ///
    /// # Errors
    /// - `MovieDbError::HttpError` - transport failure
    /// - `MovieDbError::HttpStatus` - any status other than 200
    pub async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let full_url = build_url(url, query);
        tracing::debug!("GET {}", full_url);

        let response = self.client.get(&full_url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(MovieDbError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Append percent-encoded query pairs to a base URL
fn build_url(base: &str, query: &[(&str, &str)]) -> String {
    if query.is_empty() {
        return base.to_string();
    }

    let pairs = query
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, separator, pairs)
}
