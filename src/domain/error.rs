//! Domain errors for the marsgaze engine.

use thiserror::Error;

/// Domain-level errors.
///
/// All causes of a failed listing fetch (network unreachable, HTTP error
/// status, malformed response, timeout) collapse into [`FetchFailed`];
/// the load controller absorbs it into the `Error` status rather than
/// propagating it further.
///
/// [`FetchFailed`]: DomainError::FetchFailed
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Invalid filter: {0}. Must be one of: rent, buy, all")]
    InvalidFilter(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
