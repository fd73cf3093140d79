//! Adapters for the Mars real estate service.

pub mod client;
pub mod mock;

pub use client::MarsApiClient;
pub use mock::{MockFetch, MockPropertySource};
