//! Mock property source for testing.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::{MarsProperty, PropertyFilter};
use crate::domain::ports::PropertySource;

/// Scripted outcome for a single `fetch` call.
#[derive(Debug, Clone)]
pub struct MockFetch {
    /// Artificial latency before the outcome is produced.
    pub delay: Option<Duration>,
    /// Listings to return, or an error message.
    pub result: Result<Vec<MarsProperty>, String>,
}

impl Default for MockFetch {
    fn default() -> Self {
        Self {
            delay: None,
            result: Ok(Vec::new()),
        }
    }
}

impl MockFetch {
    pub fn success(properties: Vec<MarsProperty>) -> Self {
        Self {
            delay: None,
            result: Ok(properties),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            delay: None,
            result: Err(error.into()),
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// In-memory [`PropertySource`] with per-filter scripted responses.
///
/// Each filter has its own FIFO script; once a filter's script is
/// exhausted, calls for it receive the default response (empty success
/// unless overridden). Every call is recorded for later inspection.
pub struct MockPropertySource {
    scripts: Mutex<HashMap<PropertyFilter, VecDeque<MockFetch>>>,
    default_response: MockFetch,
    calls: Mutex<Vec<PropertyFilter>>,
}

impl MockPropertySource {
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            default_response: MockFetch::default(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Replace the response used when a filter's script is exhausted.
    #[must_use]
    pub fn with_default(mut self, response: MockFetch) -> Self {
        self.default_response = response;
        self
    }

    /// Append a scripted response for `filter`.
    pub async fn enqueue(&self, filter: PropertyFilter, response: MockFetch) {
        self.scripts
            .lock()
            .await
            .entry(filter)
            .or_default()
            .push_back(response);
    }

    /// Filters seen so far, in call order.
    pub async fn calls(&self) -> Vec<PropertyFilter> {
        self.calls.lock().await.clone()
    }
}

impl Default for MockPropertySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertySource for MockPropertySource {
    async fn fetch(&self, filter: PropertyFilter) -> DomainResult<Vec<MarsProperty>> {
        self.calls.lock().await.push(filter);

        let scripted = self
            .scripts
            .lock()
            .await
            .get_mut(&filter)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| self.default_response.clone());

        if let Some(delay) = scripted.delay {
            tokio::time::sleep(delay).await;
        }

        scripted.result.map_err(DomainError::FetchFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exhausted_script_falls_back_to_the_default_response() {
        let source = MockPropertySource::new().with_default(MockFetch::failure("unscripted call"));
        source
            .enqueue(PropertyFilter::ShowRent, MockFetch::success(Vec::new()))
            .await;

        // Scripted response first, then the overridden default.
        assert!(source.fetch(PropertyFilter::ShowRent).await.is_ok());
        let err = match source.fetch(PropertyFilter::ShowRent).await {
            Err(err) => err,
            Ok(_) => panic!("default response should fail"),
        };
        assert!(err.to_string().contains("unscripted call"));

        assert_eq!(
            source.calls().await,
            vec![PropertyFilter::ShowRent, PropertyFilter::ShowRent]
        );
    }
}
