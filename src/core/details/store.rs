//! Detail dataset store and image-to-entry lookup.
//!
//! The dataset loads once through the resource locator and stays cached for
//! the process lifetime; a failed load caches an empty dataset so the cost
//! is paid once (explicit [`reload`](DetailStore::reload) retries).
//!
//! Looking up the entry for an image path is forgiving by construction:
//! dataset keys are descriptive names that only loosely follow the image
//! filenames, so the store derives several candidate keys from the filename
//! and tries them in order against a normalized-key map. Key normalization
//! here deliberately keeps extensions — keys are names, not filenames.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::types::{DetailData, DetailEntry};
use crate::core::assets::locator::ResourceLocator;
use crate::core::search::normalize::{normalize_basename, normalize_name, strip_image_extension};

/// Default relative path of the detail dataset.
pub const DETAILS_PATH: &str = "data/details.json";

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static PUNCTUATION_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]+").unwrap());

// ============================================================================
// Candidate keys
// ============================================================================

/// Separator runs to single spaces, trimmed; no case or diacritic changes.
fn unify_separators(s: &str) -> String {
    static SEPARATOR_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_\-]+").unwrap());
    SEPARATOR_RUNS.replace_all(s, " ").trim().to_string()
}

/// Punctuation removed, whitespace collapsed; underscores count as word
/// characters and survive.
fn strip_punctuation(s: &str) -> String {
    let stripped = PUNCTUATION_RUNS.replace_all(s, "");
    WHITESPACE_RUNS.replace_all(&stripped, " ").trim().to_string()
}

/// Ordered candidate keys for an image path, deduplicated.
///
/// From most literal to most relaxed: the lowercased basename with
/// separators intact, the separator-unified form, the fully normalized
/// form, a spaces-removed form, and punctuation-stripped variants of the
/// literal and normalized forms.
fn candidate_keys(image_path: &str) -> Vec<String> {
    let file_base = image_path.rsplit('/').next().unwrap_or(image_path);
    let base_raw = strip_image_extension(file_base);
    let base_raw_lower = base_raw.trim().to_lowercase();
    let key_candidate = normalize_basename(image_path);

    let candidates = [
        base_raw_lower.clone(),
        unify_separators(&base_raw_lower),
        key_candidate.clone(),
        WHITESPACE_RUNS.replace_all(&base_raw_lower, "").into_owned(),
        strip_punctuation(&base_raw_lower),
        strip_punctuation(&key_candidate),
    ];

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| !c.is_empty() && seen.insert(c.clone()))
        .collect()
}

// ============================================================================
// DetailStore
// ============================================================================

/// A matched detail entry together with the dataset key it matched under.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailMatch {
    /// The original dataset key, suitable as a display heading.
    pub name: String,
    pub entry: DetailEntry,
}

/// Cached detail dataset behind the resource locator.
pub struct DetailStore {
    locator: Arc<ResourceLocator>,
    path: PathBuf,
    cached: RwLock<Option<Arc<DetailData>>>,
}

impl DetailStore {
    pub fn new(locator: Arc<ResourceLocator>, path: impl Into<PathBuf>) -> Self {
        Self {
            locator,
            path: path.into(),
            cached: RwLock::new(None),
        }
    }

    /// The dataset, loading it on first call.
    ///
    /// A failed load caches an empty dataset rather than an error: detail
    /// data is presentation garnish, and one load attempt per lifecycle is
    /// enough.
    pub async fn data(&self) -> Arc<DetailData> {
        if let Some(data) = self.cached.read().await.as_ref() {
            return Arc::clone(data);
        }

        let mut slot = self.cached.write().await;
        if let Some(data) = slot.as_ref() {
            return Arc::clone(data);
        }

        let data = Arc::new(self.load().await);
        *slot = Some(Arc::clone(&data));
        data
    }

    /// Discard the cached dataset and load it again.
    pub async fn reload(&self) -> Arc<DetailData> {
        let data = Arc::new(self.load().await);
        *self.cached.write().await = Some(Arc::clone(&data));
        data
    }

    async fn load(&self) -> DetailData {
        match self.locator.read_to_string(&self.path).await {
            Ok(text) => match serde_json::from_str::<DetailData>(&text) {
                Ok(data) => {
                    debug!(count = data.len(), "detail dataset loaded");
                    data
                }
                Err(err) => {
                    warn!(error = %err, "detail dataset malformed; continuing without details");
                    DetailData::default()
                }
            },
            Err(err) => {
                warn!(error = %err, "detail dataset unavailable; continuing without details");
                DetailData::default()
            }
        }
    }

    /// Find the detail entry for an image path, or `None` when nothing in
    /// the dataset matches any candidate key.
    pub async fn lookup_for_image(&self, image_path: &str) -> Option<DetailMatch> {
        let data = self.data().await;
        if data.is_empty() {
            return None;
        }

        // Later keys overwrite earlier ones on a normalized collision.
        let norm_map: HashMap<String, &String> = data
            .keys()
            .map(|key| (normalize_name(key), key))
            .collect();

        for candidate in candidate_keys(image_path) {
            if let Some(&key) = norm_map.get(candidate.as_str()) {
                if let Some(entry) = data.get(key) {
                    debug!(candidate = %candidate, key = %key, "detail entry matched");
                    return Some(DetailMatch {
                        name: key.clone(),
                        entry: entry.clone(),
                    });
                }
            }
        }

        debug!(path = %image_path, "no detail entry for image");
        None
    }
}

impl fmt::Debug for DetailStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetailStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
