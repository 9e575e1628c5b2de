//! The keyword catalog: data models, the index, and its loader.
//!
//! # Architecture
//!
//! - [`types`]: [`Category`], [`Scope`], [`KeywordEntry`], [`MatchResult`]
//! - [`index`]: [`KeywordIndex`] (insertion-ordered, unique keywords) and
//!   the [`DuplicatePolicy`] applied while building it
//! - [`loader`]: the on-disk JSON wire format and [`CatalogCache`], the
//!   lazily loaded, explicitly reloadable process-scoped index cache

pub mod index;
pub mod loader;
pub mod types;

// Re-export the catalog surface
pub use index::{DuplicatePolicy, KeywordIndex};
pub use loader::{parse_index, CatalogCache, INDEX_PATH};
pub use types::{Category, KeywordEntry, MatchResult, Scope};
