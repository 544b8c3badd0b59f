//! HTTP client for the public creature data REST API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::infrastructure::ports::{DataSourcePort, ResourceRef, SourceError};

/// Default API root.
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Read-only client returning raw JSON bodies.
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_HTTP_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, resource: &ResourceRef) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_POKEAPI_BASE_URL)
    }
}

#[async_trait]
impl DataSourcePort for PokeApiClient {
    async fn fetch(&self, resource: &ResourceRef) -> Result<String, SourceError> {
        let url = self.url_for(resource);
        tracing::debug!(url = %url, "Fetching resource");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(SourceError::transient)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::not_found(resource.kind.as_str(), &resource.key));
        }
        if !status.is_success() {
            return Err(SourceError::transient(format!("{url} returned {status}")));
        }

        response.text().await.map_err(SourceError::transient)
    }
}
