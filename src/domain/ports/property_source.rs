use async_trait::async_trait;

use crate::domain::error::DomainResult;
use crate::domain::models::{MarsProperty, PropertyFilter};

/// Port for the remote listing service.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Fetch all listings matching `filter`.
    ///
    /// Returns the full result set in service order, or a
    /// [`DomainError::FetchFailed`](crate::domain::error::DomainError)
    /// on any transport or deserialization problem. No partial results.
    async fn fetch(&self, filter: PropertyFilter) -> DomainResult<Vec<MarsProperty>>;
}
