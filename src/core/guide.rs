//! The engine facade wiring catalog, matcher, and asset collaborators.
//!
//! [`FieldGuide`] owns one of everything: the index cache, the matcher, the
//! manifest store, the detail store, and the two injectable strategies
//! (image resolution and manifest generation). Construction wires the
//! defaults from an [`AppConfig`]; hosts with different needs swap
//! strategies through the `with_*` builders.
//!
//! # Design Notes
//!
//! - `search` is the only operation that can fail, and only because the
//!   keyword index could not be loaded; the caller reports a notice and
//!   carries on. Everything downstream of a loaded index degrades softly.
//! - Image lookups run concurrently per hit, but the returned order is the
//!   matcher's ranking order, never resolution completion order.

use std::sync::Arc;

use futures::future;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::core::assets::generate::{ManifestGenerator, NoopGenerator};
use crate::core::assets::images::{ImageResolver, ManifestImageResolver};
use crate::core::assets::manifest::ManifestStore;
use crate::core::catalog::loader::CatalogCache;
use crate::core::catalog::types::{Category, Scope};
use crate::core::details::store::{DetailMatch, DetailStore};
use crate::core::error::Result;
use crate::core::gallery::{build_gallery, GalleryItem};
use crate::core::search::matcher::Matcher;

// ============================================================================
// SearchHit
// ============================================================================

/// One ranked search result with its resolved image, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub keyword: String,
    pub category: Category,
    pub score: i64,
    pub image: Option<String>,
}

// ============================================================================
// FieldGuide
// ============================================================================

/// The assembled guide engine.
pub struct FieldGuide {
    matcher: Matcher,
    catalog: CatalogCache,
    manifests: Arc<ManifestStore>,
    images: Box<dyn ImageResolver>,
    details: DetailStore,
    generator: Box<dyn ManifestGenerator>,
}

impl FieldGuide {
    /// Build an engine from configuration with the default collaborators:
    /// manifest-backed image resolution and no manifest generator.
    pub fn new(config: &AppConfig) -> Self {
        let locator = Arc::new(config.locator());
        let manifests = Arc::new(ManifestStore::new(Arc::clone(&locator)));

        Self {
            matcher: Matcher::new(config.matching.clone()),
            catalog: CatalogCache::new(
                Arc::clone(&locator),
                config.data.index_path.clone(),
                config.data.duplicate_policy,
            ),
            images: Box::new(ManifestImageResolver::new(Arc::clone(&manifests))),
            details: DetailStore::new(Arc::clone(&locator), config.data.details_path.clone()),
            generator: Box::new(NoopGenerator),
            manifests,
        }
    }

    /// Replace the image resolution strategy.
    pub fn with_image_resolver(mut self, images: Box<dyn ImageResolver>) -> Self {
        self.images = images;
        self
    }

    /// Replace the manifest generation strategy.
    pub fn with_generator(mut self, generator: Box<dyn ManifestGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Run a search and resolve an image for every hit.
    ///
    /// Fails only when the keyword index cannot be loaded. An unmatched
    /// query is `Ok` with an empty list.
    pub async fn search(&self, query: &str, scope: Scope) -> Result<Vec<SearchHit>> {
        let index = self.catalog.get().await?;
        let results = self.matcher.search(query, scope, &index);
        debug!(query = %query, scope = %scope, hits = results.len(), "search complete");

        // Concurrent lookups; join_all keeps the ranking order.
        let lookups = results
            .iter()
            .map(|r| self.images.find_image(&r.keyword, r.category));
        let images = future::join_all(lookups).await;

        Ok(results
            .into_iter()
            .zip(images)
            .map(|(r, image)| SearchHit {
                keyword: r.keyword,
                category: r.category,
                score: r.score,
                image,
            })
            .collect())
    }

    /// The browse listing for a category.
    pub async fn gallery(&self, category: Category) -> Vec<GalleryItem> {
        let files = self.manifests.entries(category).await;
        build_gallery(&files, category)
    }

    /// Descriptive details for an image path, if the dataset has them.
    pub async fn detail_for_image(&self, path: &str) -> Option<DetailMatch> {
        self.details.lookup_for_image(path).await
    }

    /// Rebuild the keyword index from disk; returns the new entry count.
    pub async fn reload_index(&self) -> Result<usize> {
        let index = self.catalog.reload().await?;
        Ok(index.len())
    }

    /// Run the manifest generator (if one is wired), then re-read the
    /// manifest and return the fresh gallery listing.
    pub async fn refresh_gallery(&self, category: Category) -> Vec<GalleryItem> {
        match self.generator.generate(category).await {
            Ok(true) => debug!(category = %category, "manifest regenerated"),
            Ok(false) => {}
            // Generator trouble degrades to re-reading whatever exists.
            Err(err) => warn!(category = %category, error = %err, "manifest generator failed"),
        }
        self.manifests.invalidate(category).await;
        self.gallery(category).await
    }
}

impl std::fmt::Debug for FieldGuide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldGuide")
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
