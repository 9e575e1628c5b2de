//! Common Test Utilities
//!
//! Shared fixtures used across test modules:
//! - Catalog builders (`fixtures`)

pub mod fixtures;

pub use fixtures::*;
