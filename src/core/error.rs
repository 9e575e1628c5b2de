//! Error types for the field guide engine.
//!
//! Load failures are fail-soft at the engine boundary: a search invocation
//! that cannot obtain the keyword index reports a notice and returns, and
//! missing manifests degrade to "no image" rather than surfacing here.

use thiserror::Error;

use super::catalog::types::Category;

/// Result type alias for guide operations.
pub type Result<T> = std::result::Result<T, GuideError>;

/// Error enum for catalog loading and resource retrieval.
#[derive(Error, Debug)]
pub enum GuideError {
    // =========================================================================
    // Catalog Integrity Errors
    // =========================================================================

    /// The same canonical keyword appeared twice during one index load.
    ///
    /// Rejected by default; see `DuplicatePolicy` for the compatibility
    /// alternative that keeps the last occurrence instead.
    #[error("Duplicate keyword '{keyword}': already loaded as {existing}, seen again as {duplicate}")]
    DuplicateKeyword {
        /// The keyword that collided
        keyword: String,
        /// Category of the entry already in the index
        existing: Category,
        /// Category of the rejected duplicate
        duplicate: Category,
    },

    // =========================================================================
    // Resource Errors
    // =========================================================================

    /// Every candidate location for a resource failed.
    ///
    /// `detail` carries the last error seen while walking the candidate
    /// list, for the log line.
    #[error("Resource unavailable: {resource} ({detail})")]
    ResourceUnavailable {
        /// Relative resource path that was requested
        resource: String,
        /// Last failure observed across the candidate locations
        detail: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
