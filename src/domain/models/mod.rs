//! Domain models: listings, filters, load status, configuration.

pub mod config;
pub mod filter;
pub mod property;
pub mod status;

pub use config::{ApiConfig, Config, LoggingConfig};
pub use filter::PropertyFilter;
pub use property::MarsProperty;
pub use status::LoadStatus;
