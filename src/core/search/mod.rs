//! Text normalization, edit distance, and query matching.
//!
//! The search pipeline is deliberately small and synchronous: queries and
//! candidate terms pass through one [`normalize`] function, the fuzzy tier
//! measures token similarity with [`levenshtein`], and the [`Matcher`]
//! combines both into a ranked result list. Everything here is pure; I/O
//! (index loading, image resolution) lives in the sibling modules.
//!
//! # Architecture
//!
//! - [`normalize`] / [`normalize_basename`] / [`tokenize`]: the single
//!   canonical text form shared by queries, keywords, aliases, and filenames
//! - [`levenshtein`]: unit-cost edit distance, two-row dynamic programming
//! - [`Matcher`] + [`MatchConfig`]: exact and fuzzy tiers, scoring, ranking

pub mod distance;
pub mod matcher;
pub mod normalize;

// Re-export the search surface
pub use distance::levenshtein;
pub use matcher::{MatchConfig, Matcher};
pub use normalize::{normalize, normalize_basename, normalize_name, strip_image_extension, tokenize};
