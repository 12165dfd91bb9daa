use std::time::Duration;

use url::Url;

use crate::decode::decode_search_body;
use crate::{FailureKind, SearchError, SearchOutcome, SearchRequest};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// One attempt against one endpoint. Implementations report transport-level
/// failures as errors; a semantically empty response is `Ok`.
#[async_trait::async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(
        &self,
        endpoint: &str,
        request: &SearchRequest,
    ) -> Result<SearchOutcome, SearchError>;

    /// Health probe against the endpoint's sibling `health` route.
    async fn probe(&self, endpoint: &str) -> Result<(), SearchError>;
}

#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: reqwest::Client,
}

impl HttpSearchBackend {
    pub fn new(settings: ClientSettings) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SearchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(
        &self,
        endpoint: &str,
        request: &SearchRequest,
    ) -> Result<SearchOutcome, SearchError> {
        let url = Url::parse_with_params(
            endpoint,
            &[
                ("startinglink", request.starting.as_str()),
                ("endinglink", request.ending.as_str()),
            ],
        )
        .map_err(|err| SearchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        decode_search_body(&body)
            .map_err(|err| SearchError::new(FailureKind::MalformedBody, err.to_string()))
    }

    async fn probe(&self, endpoint: &str) -> Result<(), SearchError> {
        let url = health_url(endpoint)?;
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ))
        }
    }
}

/// Resolves the `health` route next to a search endpoint, e.g.
/// `https://host/api/getResults` -> `https://host/api/health`.
fn health_url(endpoint: &str) -> Result<Url, SearchError> {
    Url::parse(endpoint)
        .and_then(|url| url.join("health"))
        .map_err(|err| SearchError::new(FailureKind::InvalidUrl, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(FailureKind::Timeout, err.to_string());
    }
    SearchError::new(FailureKind::Network, err.to_string())
}
