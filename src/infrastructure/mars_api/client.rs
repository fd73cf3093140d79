//! HTTP client for the Mars real estate API.
//!
//! Wraps the `/realestate` endpoint, mapping every transport, HTTP-status,
//! and deserialization problem to [`DomainError::FetchFailed`]. No partial
//! results: a fetch either yields the full listing set or fails.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::{ApiConfig, MarsProperty, PropertyFilter};
use crate::domain::ports::PropertySource;

/// HTTP adapter implementing [`PropertySource`].
#[derive(Debug, Clone)]
pub struct MarsApiClient {
    /// The underlying HTTP client.
    http: Client,
    /// Base URL of the service, without a trailing slash.
    base_url: String,
}

impl MarsApiClient {
    /// Create a client with the default configuration.
    pub fn new() -> DomainResult<Self> {
        Self::with_config(&ApiConfig::default())
    }

    /// Create a client from an explicit configuration.
    ///
    /// Tests point `base_url` at a local mock server.
    pub fn with_config(config: &ApiConfig) -> DomainResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::FetchFailed(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_properties(&self, filter: PropertyFilter) -> DomainResult<Vec<MarsProperty>> {
        let url = format!(
            "{}/realestate?filter={}",
            self.base_url,
            filter.as_query_value()
        );

        let resp = self.http.get(&url).send().await.map_err(|e| {
            DomainError::FetchFailed(format!("realestate request failed: {e}"))
        })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::FetchFailed(format!(
                "realestate returned {status}: {body}"
            )));
        }

        resp.json::<Vec<MarsProperty>>().await.map_err(|e| {
            DomainError::FetchFailed(format!("realestate parse failed: {e}"))
        })
    }
}

#[async_trait]
impl PropertySource for MarsApiClient {
    async fn fetch(&self, filter: PropertyFilter) -> DomainResult<Vec<MarsProperty>> {
        self.get_properties(filter).await
    }
}
