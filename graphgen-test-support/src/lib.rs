//! Shared test utilities used across graphgen crates.

pub mod ci;
pub mod tracing;
