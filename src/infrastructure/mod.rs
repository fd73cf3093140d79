//! Infrastructure layer: external integrations and adapters.

pub mod config;
pub mod logging;
pub mod mars_api;
