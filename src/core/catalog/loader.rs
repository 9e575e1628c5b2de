//! Keyword index loading: wire format and the process-scoped cache.
//!
//! The index file is a JSON object keyed by canonical keyword:
//!
//! ```json
//! {
//!   "mosquito": { "class": "bugs", "OtherKeywords": ["skeeter"] },
//!   "poison ivy": { "class": "plants", "OtherKeywords": [] }
//! }
//! ```
//!
//! File order is significant (it becomes the tie-break order for equal
//! scores), so decoding goes through a visitor that keeps entries in
//! document order and preserves duplicate keys for the
//! [`DuplicatePolicy`] to rule on. Entries with an unrecognized `class`
//! are logged and skipped rather than failing the whole load.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::index::{DuplicatePolicy, KeywordIndex};
use super::types::{Category, KeywordEntry};
use crate::core::assets::locator::ResourceLocator;
use crate::core::error::Result;

/// Default relative path of the keyword index file.
pub const INDEX_PATH: &str = "data/keyword_index.json";

// ============================================================================
// Wire format
// ============================================================================

/// One entry value as stored on disk.
#[derive(Debug, Deserialize)]
struct RawEntry {
    /// Category name; unrecognized values skip the entry.
    class: String,
    /// Alias list; absent means no aliases.
    #[serde(default, rename = "OtherKeywords")]
    other_keywords: Vec<String>,
}

/// The whole index document in file order, duplicate keys preserved.
struct RawIndex(Vec<(String, RawEntry)>);

impl<'de> Deserialize<'de> for RawIndex {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawIndexVisitor;

        impl<'de> Visitor<'de> for RawIndexVisitor {
            type Value = RawIndex;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a keyword index object")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((keyword, raw)) = map.next_entry::<String, RawEntry>()? {
                    entries.push((keyword, raw));
                }
                Ok(RawIndex(entries))
            }
        }

        deserializer.deserialize_map(RawIndexVisitor)
    }
}

/// Parse index JSON into a [`KeywordIndex`].
///
/// Entries whose `class` is not a known category are logged and skipped.
/// Duplicate keywords are handled per `policy`.
pub fn parse_index(text: &str, policy: DuplicatePolicy) -> Result<KeywordIndex> {
    let raw: RawIndex = serde_json::from_str(text)?;
    let total = raw.0.len();

    let mut entries = Vec::with_capacity(total);
    for (keyword, value) in raw.0 {
        match Category::from_name(&value.class) {
            Some(category) => {
                entries.push(
                    KeywordEntry::new(keyword, category).with_aliases(value.other_keywords),
                );
            }
            None => {
                warn!(keyword = %keyword, class = %value.class, "skipping entry with unknown class");
            }
        }
    }

    let index = KeywordIndex::from_entries(entries, policy)?;
    debug!(count = index.len(), total, "keyword index parsed");
    Ok(index)
}

// ============================================================================
// CatalogCache
// ============================================================================

/// Process-scoped cache for the keyword index.
///
/// Loads lazily on first use, holds the index for the process lifetime, and
/// rebuilds only on explicit [`reload`](Self::reload). Shared via `Arc` so
/// a reload is observed by every holder on its next [`get`](Self::get).
pub struct CatalogCache {
    locator: Arc<ResourceLocator>,
    path: PathBuf,
    policy: DuplicatePolicy,
    cached: RwLock<Option<Arc<KeywordIndex>>>,
}

impl CatalogCache {
    pub fn new(
        locator: Arc<ResourceLocator>,
        path: impl Into<PathBuf>,
        policy: DuplicatePolicy,
    ) -> Self {
        Self {
            locator,
            path: path.into(),
            policy,
            cached: RwLock::new(None),
        }
    }

    /// The cached index, loading it on first call.
    pub async fn get(&self) -> Result<Arc<KeywordIndex>> {
        if let Some(index) = self.cached.read().await.as_ref() {
            return Ok(Arc::clone(index));
        }

        let mut slot = self.cached.write().await;
        // Another task may have loaded while we waited for the write lock.
        if let Some(index) = slot.as_ref() {
            return Ok(Arc::clone(index));
        }

        let index = Arc::new(self.load().await?);
        *slot = Some(Arc::clone(&index));
        Ok(index)
    }

    /// Discard the cached index and load it again.
    pub async fn reload(&self) -> Result<Arc<KeywordIndex>> {
        let index = Arc::new(self.load().await?);
        *self.cached.write().await = Some(Arc::clone(&index));
        Ok(index)
    }

    async fn load(&self) -> Result<KeywordIndex> {
        let text = self.locator.read_to_string(&self.path).await?;
        parse_index(&text, self.policy)
    }
}

impl fmt::Debug for CatalogCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogCache")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
