//! Manifest regeneration seam.
//!
//! The historical code probed for an ambient "run the manifest generator"
//! capability (a local hook, then a server endpoint) before re-reading the
//! manifest. Here that is an explicit strategy injected at engine
//! construction; the default does nothing. An implementation that actually
//! spawns a generator process belongs to the host application.

use async_trait::async_trait;

use crate::core::catalog::types::Category;
use crate::core::error::Result;

/// Optional collaborator that can (re)build a category's image manifest.
#[async_trait]
pub trait ManifestGenerator: Send + Sync {
    /// Attempt to regenerate the manifest for `category`.
    ///
    /// Returns `Ok(true)` when a generator ran, which tells the caller to
    /// invalidate the cached manifest and re-read it. `Ok(false)` means no
    /// generator is available.
    async fn generate(&self, category: Category) -> Result<bool>;
}

/// Default no-op generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGenerator;

#[async_trait]
impl ManifestGenerator for NoopGenerator {
    async fn generate(&self, _category: Category) -> Result<bool> {
        Ok(false)
    }
}
