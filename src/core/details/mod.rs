//! Descriptive detail data for catalog subjects.
//!
//! # Architecture
//!
//! - [`types`]: the dataset shape ([`DetailData`], [`DetailEntry`],
//!   [`DetailSection`], [`DetailItem`])
//! - [`store`]: [`DetailStore`], the lazily loaded cache plus the
//!   image-path-to-entry candidate lookup

pub mod store;
pub mod types;

// Re-export the details surface
pub use store::{DetailMatch, DetailStore, DETAILS_PATH};
pub use types::{DetailData, DetailEntry, DetailItem, DetailSection};
