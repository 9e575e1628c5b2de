//! Per-category image manifest store.
//!
//! Each category ships a manifest at `images/<category>/manifest.json`,
//! nominally a JSON array of path strings. Historical data also occurs as a
//! bare string, as `{ "files": [...] }` or `{ "paths": [...] }` wrappers,
//! or as an arbitrary object whose string values are the paths; all of
//! these decode leniently. A manifest that cannot be loaded, cannot be
//! parsed, or comes up empty is replaced by the category's built-in
//! fallback list, so the guide keeps working from a bare checkout.
//!
//! Manifests are cached per category and refreshed only by explicit
//! [`invalidate`](ManifestStore::invalidate). Lookups never fail.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::locator::ResourceLocator;
use crate::core::catalog::types::Category;

// ============================================================================
// Fallback lists
// ============================================================================

/// Built-in bugs image list used when no usable manifest exists.
///
/// Mirrors the files shipped alongside the guide data, spelling quirks
/// included; the names must stay byte-for-byte what is on disk.
const BUGS_FALLBACK: &[&str] = &[
    "images/bugs/bed_bug.png",
    "images/bugs/black_widow.png",
    "images/bugs/Blister Beetle.png",
    "images/bugs/bumble bee.png",
    "images/bugs/bumble_bee.jpg",
    "images/bugs/centipede.png",
    "images/bugs/Chigger_Trombiculidae.png",
    "images/bugs/flea.png",
    "images/bugs/human_botfly.png",
    "images/bugs/mosquito.png",
    "images/bugs/Nuttallilella.png",
    "images/bugs/Trantuala.png",
    "images/bugs/wasp.png",
    "images/bugs/wheel bug.png",
];

/// Fallback image list for a category; only bugs ships one.
pub fn fallback_entries(category: Category) -> Vec<String> {
    match category {
        Category::Bugs => BUGS_FALLBACK.iter().map(|s| s.to_string()).collect(),
        Category::Animals | Category::Plants => Vec::new(),
    }
}

/// Relative manifest path for a category.
pub fn manifest_path(category: Category) -> PathBuf {
    PathBuf::from("images")
        .join(category.dir_name())
        .join("manifest.json")
}

// ============================================================================
// Shape coercion
// ============================================================================

/// Coerce any of the historical manifest shapes into a flat path list.
///
/// Non-string leaves are dropped; unrecognized shapes decode to empty.
fn coerce_file_list(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => string_items(items),
        Value::String(path) => vec![path],
        Value::Object(map) => {
            if let Some(files) = map.get("files").and_then(Value::as_array) {
                string_items(files.clone())
            } else if let Some(paths) = map.get("paths").and_then(Value::as_array) {
                string_items(paths.clone())
            } else {
                // Flatten string values one level deep.
                let mut files = Vec::new();
                for value in map.into_iter().map(|(_, v)| v) {
                    match value {
                        Value::String(path) => files.push(path),
                        Value::Array(items) => files.extend(string_items(items)),
                        _ => {}
                    }
                }
                files
            }
        }
        _ => Vec::new(),
    }
}

fn string_items(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|v| match v {
            Value::String(path) => Some(path),
            _ => None,
        })
        .collect()
}

// ============================================================================
// ManifestStore
// ============================================================================

/// Cached per-category manifests behind the resource locator.
pub struct ManifestStore {
    locator: Arc<ResourceLocator>,
    cached: RwLock<HashMap<Category, Arc<Vec<String>>>>,
}

impl ManifestStore {
    pub fn new(locator: Arc<ResourceLocator>) -> Self {
        Self {
            locator,
            cached: RwLock::new(HashMap::new()),
        }
    }

    /// The manifest entries for `category`, loading and caching on first
    /// use. Never fails; degraded loads produce the fallback list.
    pub async fn entries(&self, category: Category) -> Arc<Vec<String>> {
        if let Some(list) = self.cached.read().await.get(&category) {
            return Arc::clone(list);
        }

        let mut map = self.cached.write().await;
        if let Some(list) = map.get(&category) {
            return Arc::clone(list);
        }

        let list = Arc::new(self.load(category).await);
        map.insert(category, Arc::clone(&list));
        list
    }

    /// Drop the cached manifest for `category`; the next
    /// [`entries`](Self::entries) call re-reads it.
    pub async fn invalidate(&self, category: Category) {
        self.cached.write().await.remove(&category);
    }

    async fn load(&self, category: Category) -> Vec<String> {
        let path = manifest_path(category);
        let loaded = match self.locator.read_to_string(&path).await {
            Ok(text) => match serde_json::from_str::<Value>(&text) {
                Ok(value) => Some(coerce_file_list(value)),
                Err(err) => {
                    warn!(category = %category, error = %err, "manifest JSON malformed");
                    None
                }
            },
            Err(err) => {
                warn!(category = %category, error = %err, "manifest unavailable");
                None
            }
        };

        match loaded {
            Some(files) if !files.is_empty() => {
                debug!(category = %category, count = files.len(), "manifest loaded");
                files
            }
            // Missing, malformed, or empty all take the fallback.
            _ => fallback_entries(category),
        }
    }
}

impl std::fmt::Debug for ManifestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManifestStore").finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
