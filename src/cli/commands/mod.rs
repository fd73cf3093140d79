//! CLI command implementations.

pub mod properties;
