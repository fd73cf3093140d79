//! Domain layer for the marsgaze engine.
//!
//! This module contains core models, domain errors, and port traits.

pub mod error;
pub mod models;
pub mod ports;

pub use error::{DomainError, DomainResult};
