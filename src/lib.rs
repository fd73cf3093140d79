//! Marsgaze - observable load-state engine for the Mars real estate API.
//!
//! Marsgaze fetches Mars property listings over HTTP and exposes the fetch
//! lifecycle as observable state: a tri-state load status, the current
//! result set, and a one-shot selection signal for driving navigation.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors, and port traits
//! - **Service Layer** (`services`): Observable values and the load controller
//! - **Infrastructure Layer** (`infrastructure`): HTTP adapter, config, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use marsgaze::{MarsApiClient, OverviewController, PropertyFilter};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(MarsApiClient::new()?);
//!     let controller = OverviewController::new(client);
//!     controller.refresh(PropertyFilter::ShowRent);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::error::{DomainError, DomainResult};
pub use domain::models::{
    ApiConfig, Config, LoadStatus, LoggingConfig, MarsProperty, PropertyFilter,
};
pub use domain::ports::PropertySource;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::mars_api::{MarsApiClient, MockFetch, MockPropertySource};
pub use services::{ObservableValue, Observer, OverviewController, SubscriptionHandle};
