//! Resource Path Resolution
//!
//! Locates data files at runtime across an ordered list of candidate root
//! directories, handling both development mode (files in the source tree)
//! and installed mode (files under the user data directory).
//!
//! The historical code re-implemented this as an ad-hoc fallback chain at
//! every fetch site; here it is one [`ResourceLocator`] constructed once and
//! shared by every loader. Roots are tried in order and the last error is
//! kept for the failure report.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::error::{GuideError, Result};

/// Application subdirectory under the platform data directory.
pub const DATA_DIR_NAME: &str = "fieldguide";

// ============================================================================
// ResourceLocator
// ============================================================================

/// Ordered candidate roots for resolving relative resource paths.
///
/// A relative path such as `data/keyword_index.json` is joined onto each
/// root in turn; the first root where the read succeeds wins. When every
/// candidate fails, the error carries the last failure seen, which in
/// practice names the most specific problem (a parse-adjacent I/O error
/// rather than a bare "not found" from an unused root).
#[derive(Debug, Clone)]
pub struct ResourceLocator {
    roots: Vec<PathBuf>,
}

impl Default for ResourceLocator {
    /// Current working directory first, then the user data directory.
    fn default() -> Self {
        let mut roots = vec![PathBuf::from(".")];
        if let Some(dir) = user_data_dir() {
            roots.push(dir);
        }
        Self { roots }
    }
}

impl ResourceLocator {
    /// Build a locator from an explicit root list, in priority order.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Prepend a root, giving it the highest priority.
    pub fn with_root_first(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.insert(0, root.into());
        self
    }

    /// The candidate roots in priority order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// First existing candidate for `relative`, or `None`.
    pub fn locate(&self, relative: impl AsRef<Path>) -> Option<PathBuf> {
        let relative = relative.as_ref();
        self.roots
            .iter()
            .map(|root| root.join(relative))
            .find(|candidate| candidate.exists())
    }

    /// Read `relative` from the first candidate root where the read
    /// succeeds.
    ///
    /// Walks the roots in order; on total failure returns
    /// [`GuideError::ResourceUnavailable`] carrying the last error seen.
    pub async fn read_to_string(&self, relative: impl AsRef<Path>) -> Result<String> {
        let relative = relative.as_ref();
        let mut last_error: Option<std::io::Error> = None;

        for root in &self.roots {
            let candidate = root.join(relative);
            match tokio::fs::read_to_string(&candidate).await {
                Ok(text) => {
                    debug!(path = %candidate.display(), "resource located");
                    return Ok(text);
                }
                Err(err) => {
                    last_error = Some(err);
                }
            }
        }

        Err(GuideError::ResourceUnavailable {
            resource: relative.display().to_string(),
            detail: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no candidate locations configured".to_string()),
        })
    }
}

/// The per-user data directory for the guide.
///
/// `~/.local/share/fieldguide/` on Linux, the platform equivalent elsewhere.
pub fn user_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(DATA_DIR_NAME))
}

/// Ensure the user data directory exists, creating it if needed.
pub fn ensure_user_data_dir() -> std::io::Result<PathBuf> {
    let dir = user_data_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine user data directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

// ============================================================================
// Tests
// ============================================================================
