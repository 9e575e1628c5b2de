//! Property-based tests for the Field Guide
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! Run all property tests:
//! ```sh
//! cargo test property --release
//! ```
//!
//! Run a specific property test module:
//! ```sh
//! cargo test property::matcher_props --release
//! ```
//!
//! ## Test Modules
//!
//! - `normalizer_props`: Tests for text normalization
//!   - Idempotent (normalizing twice changes nothing)
//!   - Deterministic for the same input
//!   - Output carries no uppercase ASCII, separators, or edge whitespace
//!   - Tokens are non-empty and whitespace-free
//!
//! - `distance_props`: Tests for the Levenshtein edit distance
//!   - Symmetric, zero exactly on equal inputs
//!   - Bounded below by the length difference, above by the longer length
//!   - Satisfies the triangle inequality
//!
//! - `matcher_props`: Tests for search matching and ranking
//!   - Same query returns same order
//!   - Scores are positive and descending
//!   - No duplicate keywords in a result list
//!   - Scope filtering and the result cap always hold
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod distance_props;
mod matcher_props;
mod normalizer_props;
