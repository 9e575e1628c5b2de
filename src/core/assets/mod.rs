//! Resource location and image asset plumbing.
//!
//! # Architecture
//!
//! - [`locator`]: [`ResourceLocator`], the single ordered-candidate path
//!   resolver every loader goes through
//! - [`manifest`]: [`ManifestStore`], cached lenient per-category manifests
//!   with built-in fallbacks
//! - [`images`]: the [`ImageResolver`] strategy ([`ManifestImageResolver`]
//!   or the [`NoImages`] no-op)
//! - [`generate`]: the [`ManifestGenerator`] strategy for optional manifest
//!   regeneration ([`NoopGenerator`] by default)

pub mod generate;
pub mod images;
pub mod locator;
pub mod manifest;

// Re-export the asset surface
pub use generate::{ManifestGenerator, NoopGenerator};
pub use images::{ImageResolver, ManifestImageResolver, NoImages};
pub use locator::{ensure_user_data_dir, user_data_dir, ResourceLocator};
pub use manifest::{fallback_entries, manifest_path, ManifestStore};
