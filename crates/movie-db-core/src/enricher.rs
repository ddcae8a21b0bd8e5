//! Per-title metadata enrichment from the OMDb API
//!
//! Lookups run one after another in chart order with a fixed pause between
//! them. A failed lookup only affects its own record.

use std::time::Duration;

use tokio::time::sleep;

use crate::client::HttpClient;
use crate::error::Result;
use crate::parser::parse_lookup_response;
use crate::types::{Metadata, MovieRecord};

/// Sequential metadata lookup for chart records
pub struct Enricher {
    client: HttpClient,
    lookup_url: String,
    api_key: Option<String>,
    pause: Duration,
}

impl Enricher {
    /// Create a new enricher.
    ///
    /// # Arguments
    /// * `client` - HTTP client used for lookups
    /// * `lookup_url` - OMDb endpoint
    /// * `api_key` - OMDb key, sent as `apikey` when present
    /// * `pause` - wait after each lookup finishes, before the next one
    pub fn new(
        client: HttpClient,
        lookup_url: impl Into<String>,
        api_key: Option<String>,
        pause: Duration,
    ) -> Self {
        Self {
            client,
            lookup_url: lookup_url.into(),
            api_key,
            pause,
        }
    }

    /// Look up a single title.
    ///
    /// # Returns
    /// * `Ok(Some(Metadata))` for a usable response
    /// * `Ok(None)` if the API answered with an empty object
    /// * `Err(_)` on transport failure, non-200 status or malformed JSON
    pub async fn lookup(&self, title: &str) -> Result<Option<Metadata>> {
        let mut query = vec![("t", title)];
        if let Some(key) = self.api_key.as_deref() {
            query.push(("apikey", key));
        }

        let body = self.client.fetch(&self.lookup_url, &query).await?;
        parse_lookup_response(&body)
    }

    /// Attach lookup metadata to every record, in order.
    ///
    /// Records whose lookup fails keep their metadata unset and the loop
    /// moves on to the next title. The pause is counted from the end of the
    /// previous lookup, so a slow API never shortens it.
    pub async fn enrich(&self, records: Vec<MovieRecord>) -> Vec<MovieRecord> {
        let total = records.len();
        let mut enriched = Vec::with_capacity(total);

        for (index, mut record) in records.into_iter().enumerate() {
            if index > 0 {
                sleep(self.pause).await;
            }
            tracing::info!("Fetching data for: {} ({}/{})", record.title, index + 1, total);

            match self.lookup(&record.title).await {
                Ok(Some(metadata)) => record.apply_metadata(metadata),
                Ok(None) => {
                    tracing::warn!("Empty lookup response for {}", record.title);
                }
                Err(e) => {
                    tracing::warn!("Unable to fetch data for {}: {}", record.title, e);
                }
            }

            enriched.push(record);
        }

        enriched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MovieDbError;
    use serde_json::json;
    use std::time::Instant;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn enricher(server: &MockServer, api_key: Option<&str>) -> Enricher {
        Enricher::new(
            HttpClient::new().unwrap(),
            format!("{}/", server.uri()),
            api_key.map(str::to_string),
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn test_lookup_sends_title_and_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("t", "The Godfather"))
            .and(query_param("apikey", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Director": "Francis Ford Coppola"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let metadata = enricher(&server, Some("secret"))
            .lookup("The Godfather")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(metadata.director, "Francis Ford Coppola");
        assert_eq!(metadata.genre, "N/A");
    }

    #[tokio::test]
    async fn test_lookup_non_ok_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = enricher(&server, None).lookup("Anything").await;
        assert!(matches!(
            result,
            Err(MovieDbError::HttpStatus { status: 401, .. })
        ));
    }

    #[tokio::test]
    async fn test_enrich_failure_isolation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("t", "A"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Genre": "Drama"})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("t", "B"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("t", "C"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Genre": "Comedy"})))
            .mount(&server)
            .await;

        let records = vec![
            MovieRecord::new("A", "8.0"),
            MovieRecord::new("B", "7.0"),
            MovieRecord::new("C", "6.0"),
        ];
        let enriched = enricher(&server, Some("k")).enrich(records).await;

        let titles: Vec<_> = enriched.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(enriched[0].genre.as_deref(), Some("Drama"));
        assert!(!enriched[1].has_metadata());
        assert_eq!(enriched[2].genre.as_deref(), Some("Comedy"));
    }

    #[tokio::test]
    async fn test_enrich_empty_object_leaves_metadata_unset() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let enriched = enricher(&server, None)
            .enrich(vec![MovieRecord::new("Ghost", "5.0")])
            .await;

        assert_eq!(enriched.len(), 1);
        assert!(!enriched[0].has_metadata());
    }

    #[tokio::test]
    async fn test_enrich_transport_failure() {
        // Nothing listens on the discard port
        let enricher = Enricher::new(
            HttpClient::new().unwrap(),
            "http://127.0.0.1:9/",
            None,
            Duration::ZERO,
        );

        let enriched = enricher.enrich(vec![MovieRecord::new("Offline", "8.0")]).await;
        assert_eq!(enriched.len(), 1);
        assert!(!enriched[0].has_metadata());
    }

    #[tokio::test]
    async fn test_enrich_pauses_after_slow_lookups() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"Genre": "Drama"}))
                    .set_delay(Duration::from_millis(300)),
            )
            .expect(3)
            .mount(&server)
            .await;

        let enricher = Enricher::new(
            HttpClient::new().unwrap(),
            format!("{}/", server.uri()),
            None,
            Duration::from_millis(200),
        );
        let records = vec![
            MovieRecord::new("A", "8.0"),
            MovieRecord::new("B", "7.0"),
            MovieRecord::new("C", "6.0"),
        ];

        let start = Instant::now();
        let enriched = enricher.enrich(records).await;
        let elapsed = start.elapsed();

        // 3 slow replies plus 2 full pauses between them
        assert!(elapsed >= Duration::from_millis(3 * 300 + 2 * 200), "took {:?}", elapsed);
        assert!(enriched.iter().all(|r| r.genre.as_deref() == Some("Drama")));
    }

    #[tokio::test]
    async fn test_enrich_no_pause_before_first_or_after_last() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let enricher = Enricher::new(
            HttpClient::new().unwrap(),
            format!("{}/", server.uri()),
            None,
            Duration::from_secs(5),
        );

        let start = Instant::now();
        enricher.enrich(vec![MovieRecord::new("Only", "8.0")]).await;

        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
