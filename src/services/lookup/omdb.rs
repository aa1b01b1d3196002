/// OMDb API client
///
/// Issues `GET {api_url}?apikey={key}&t={query}` and maps the body to a
/// `LookupResult`. OMDb reports API-level failures (unknown title, bad key) as
/// `{"Response":"False","Error":...}` bodies, sometimes with a non-2xx status,
/// so the body is decoded regardless of status.
use crate::{
    config::Config,
    error::{LookupError, LookupErrorReason, GENERIC_LOOKUP_ERROR},
    models::RawLookupResult,
    services::lookup::{LookupResult, MovieLookup},
};
use reqwest::Client as HttpClient;
use std::fmt::Display;

#[derive(Clone)]
pub struct OmdbClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    expose_error_detail: bool,
}

impl OmdbClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            expose_error_detail: false,
        }
    }

    /// Creates a client from application config
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.omdb_api_key.clone(), config.omdb_api_url.clone())
            .with_error_detail(config.expose_lookup_error_detail)
    }

    /// Report the underlying transport/parse error instead of the generic message
    pub fn with_error_detail(mut self, expose: bool) -> Self {
        self.expose_error_detail = expose;
        self
    }

    /// Builds a network or parse failure, discarding the detail unless configured otherwise
    fn failure(&self, reason: LookupErrorReason, detail: impl Display) -> LookupError {
        let message = if self.expose_error_detail {
            detail.to_string()
        } else {
            GENERIC_LOOKUP_ERROR.to_string()
        };

        LookupError { reason, message }
    }

    /// Maps a response body to a lookup outcome
    fn parse_body(&self, body: &str) -> LookupResult {
        let raw: RawLookupResult = serde_json::from_str(body).map_err(|e| {
            tracing::warn!(error = %e, provider = "omdb", "Failed to parse OMDb response");
            self.failure(LookupErrorReason::ParseFailure, e)
        })?;

        match raw {
            RawLookupResult::Found(found) => Ok(found),
            RawLookupResult::Failed { error } => Err(LookupError::not_found(error)),
        }
    }
}

#[async_trait::async_trait]
impl MovieLookup for OmdbClient {
    async fn lookup(&self, query: &str) -> LookupResult {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("apikey", self.api_key.as_str()), ("t", query)])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, query = %query, provider = "omdb", "OMDb request failed");
                self.failure(LookupErrorReason::NetworkFailure, e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::warn!(error = %e, query = %query, provider = "omdb", "Failed to read OMDb response");
            self.failure(LookupErrorReason::NetworkFailure, e)
        })?;
        tracing::debug!(status = %status, response = %body, "Raw OMDb response");

        let result = self.parse_body(&body);

        match &result {
            Ok(found) => tracing::info!(
                query = %query,
                imdb_id = %found.imdb_id,
                provider = "omdb",
                "Movie lookup completed"
            ),
            Err(e) => tracing::info!(
                query = %query,
                reason = %e.reason,
                provider = "omdb",
                "Movie lookup returned no movie"
            ),
        }

        result
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FOUND_BODY: &str = r#"{
        "Title": "The Shawshank Redemption",
        "Year": "1994",
        "Plot": "Two imprisoned men bond over a number of years.",
        "Poster": "https://m.media-amazon.com/images/M/shawshank.jpg",
        "imdbID": "tt0111161",
        "Response": "True"
    }"#;

    fn create_test_client(api_url: String) -> OmdbClient {
        OmdbClient::new("test_key".to_string(), api_url)
    }

    #[test]
    fn test_parse_body_not_found() {
        let client = create_test_client("http://test.local/".to_string());
        let err = client
            .parse_body(r#"{"Response":"False","Error":"Movie not found!"}"#)
            .unwrap_err();
        assert_eq!(err.reason, LookupErrorReason::NotFound);
        assert_eq!(err.message, "Movie not found!");
    }

    #[test]
    fn test_parse_body_malformed_hides_detail() {
        let client = create_test_client("http://test.local/".to_string());
        let err = client.parse_body("<html>oops</html>").unwrap_err();
        assert_eq!(err.reason, LookupErrorReason::ParseFailure);
        assert_eq!(err.message, GENERIC_LOOKUP_ERROR);
    }

    #[test]
    fn test_parse_body_malformed_exposes_detail_when_enabled() {
        let client = create_test_client("http://test.local/".to_string()).with_error_detail(true);
        let err = client.parse_body("<html>oops</html>").unwrap_err();
        assert_eq!(err.reason, LookupErrorReason::ParseFailure);
        assert_ne!(err.message, GENERIC_LOOKUP_ERROR);
    }

    #[tokio::test]
    async fn test_lookup_sends_key_and_title() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("apikey", "test_key"))
            .and(query_param("t", "the shawshank redemption"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FOUND_BODY))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(format!("{}/", mock_server.uri()));
        let found = client.lookup("the shawshank redemption").await.unwrap();

        assert_eq!(found.imdb_id, "tt0111161");
        assert_eq!(found.title, "The Shawshank Redemption");
    }

    #[tokio::test]
    async fn test_lookup_error_body_with_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_string(r#"{"Response":"False","Error":"Invalid API key!"}"#),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(format!("{}/", mock_server.uri()));
        let err = client.lookup("anything").await.unwrap_err();

        assert_eq!(err.reason, LookupErrorReason::NotFound);
        assert_eq!(err.message, "Invalid API key!");
    }

    #[tokio::test]
    async fn test_lookup_connection_refused_is_network_failure() {
        // Nothing listens on the discard port
        let client = create_test_client("http://127.0.0.1:9/".to_string());
        let err = client.lookup("Inception").await.unwrap_err();

        assert_eq!(err.reason, LookupErrorReason::NetworkFailure);
        assert_eq!(err.message, GENERIC_LOOKUP_ERROR);
    }

    #[tokio::test]
    async fn test_lookup_connection_refused_exposes_detail_when_enabled() {
        let client = create_test_client("http://127.0.0.1:9/".to_string()).with_error_detail(true);
        let err = client.lookup("Inception").await.unwrap_err();

        assert_eq!(err.reason, LookupErrorReason::NetworkFailure);
        assert_ne!(err.message, GENERIC_LOOKUP_ERROR);
        assert!(!err.message.is_empty());
    }
}
