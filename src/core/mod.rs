//! Core engine modules.
//!
//! # Architecture
//!
//! - [`catalog`]: keyword data models, the insertion-ordered index, loader
//! - [`search`]: text normalization, edit distance, the tiered matcher
//! - [`assets`]: resource location, image manifests, image resolution
//! - [`details`]: descriptive detail dataset and image-to-entry lookup
//! - [`gallery`]: browse listings with display-ready labels
//! - [`guide`]: the [`guide::FieldGuide`] facade wiring it all together

pub mod assets;
pub mod catalog;
pub mod details;
pub mod error;
pub mod gallery;
pub mod guide;
pub mod logging;
pub mod search;

// Re-export the types most callers want
pub use catalog::{Category, DuplicatePolicy, KeywordEntry, KeywordIndex, MatchResult, Scope};
pub use error::{GuideError, Result};
pub use guide::{FieldGuide, SearchHit};
