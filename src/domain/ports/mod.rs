//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interfaces that infrastructure
//! adapters must implement:
//! - `PropertySource`: remote listing fetches
//!
//! These traits define the contracts that allow the domain to be independent
//! of specific infrastructure implementations.

pub mod property_source;

pub use property_source::PropertySource;
