//! Internal test suites.
//!
//! - `common`: shared fixtures (catalog builders)
//! - `property`: proptest invariant suites for the normalizer, the edit
//!   distance, and the matcher

mod common;
mod property;
