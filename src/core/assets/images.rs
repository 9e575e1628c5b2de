//! Image resolution for matched keywords.
//!
//! Given a keyword and its category, the resolver scans the category's
//! manifest for the first file whose normalized basename equals the
//! normalized keyword. Image lookup is an optional collaborator: engines
//! built without image data inject [`NoImages`] and every hit simply
//! carries no image.

use std::sync::Arc;

use async_trait::async_trait;

use super::manifest::ManifestStore;
use crate::core::catalog::types::Category;
use crate::core::search::normalize::{normalize, normalize_basename};

/// Strategy for resolving a keyword to an image path.
#[async_trait]
pub trait ImageResolver: Send + Sync {
    /// First image path for `keyword` in `category`, or `None`.
    async fn find_image(&self, keyword: &str, category: Category) -> Option<String>;
}

// ============================================================================
// Manifest-backed resolver
// ============================================================================

/// Resolves images by scanning the per-category manifest.
#[derive(Debug)]
pub struct ManifestImageResolver {
    manifests: Arc<ManifestStore>,
}

impl ManifestImageResolver {
    pub fn new(manifests: Arc<ManifestStore>) -> Self {
        Self { manifests }
    }
}

#[async_trait]
impl ImageResolver for ManifestImageResolver {
    async fn find_image(&self, keyword: &str, category: Category) -> Option<String> {
        let target = normalize(keyword);
        if target.is_empty() {
            return None;
        }

        let entries = self.manifests.entries(category).await;
        entries
            .iter()
            .find(|path| normalize_basename(path) == target)
            .cloned()
    }
}

// ============================================================================
// No-op resolver
// ============================================================================

/// Default no-op strategy: every lookup resolves to no image.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

#[async_trait]
impl ImageResolver for NoImages {
    async fn find_image(&self, _keyword: &str, _category: Category) -> Option<String> {
        None
    }
}

// ============================================================================
// Tests
// ============================================================================
