//! The in-memory keyword index.
//!
//! [`KeywordIndex`] owns every [`KeywordEntry`] for the lifetime of a load.
//! It is immutable once built and rebuilt whole on reload; nothing mutates
//! entries in place. Iteration order is the insertion (load) order — ranked
//! results break score ties by this order, so it must stay reproducible.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::KeywordEntry;
use crate::core::error::{GuideError, Result};

// ============================================================================
// DuplicatePolicy
// ============================================================================

/// How a load treats a canonical keyword that appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Duplicates are a data-integrity error; the load fails.
    #[default]
    Reject,
    /// The last occurrence replaces the earlier one, keeping the earlier
    /// one's position in the iteration order. Matches historical data sets
    /// that relied on plain key reassignment.
    LastWins,
}

// ============================================================================
// KeywordIndex
// ============================================================================

/// Immutable map from canonical keyword to its catalog entry.
///
/// Backed by an insertion-ordered map: equal-score search results tie-break
/// by the order entries were loaded.
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    entries: IndexMap<String, KeywordEntry>,
}

impl KeywordIndex {
    /// Build an index from entries, applying `policy` to duplicate keywords.
    pub fn from_entries<I>(entries: I, policy: DuplicatePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = KeywordEntry>,
    {
        let mut map: IndexMap<String, KeywordEntry> = IndexMap::new();
        for entry in entries {
            if let Some(existing) = map.get(&entry.keyword) {
                match policy {
                    DuplicatePolicy::Reject => {
                        return Err(GuideError::DuplicateKeyword {
                            keyword: entry.keyword,
                            existing: existing.category,
                            duplicate: entry.category,
                        });
                    }
                    DuplicatePolicy::LastWins => {
                        log::warn!(
                            "duplicate keyword '{}' replaced ({} -> {})",
                            entry.keyword,
                            existing.category,
                            entry.category
                        );
                    }
                }
            }
            // IndexMap keeps the original position on key replacement.
            map.insert(entry.keyword.clone(), entry);
        }
        Ok(Self { entries: map })
    }

    /// Look up an entry by its canonical keyword (exact key, no
    /// normalization).
    pub fn get(&self, keyword: &str) -> Option<&KeywordEntry> {
        self.entries.get(keyword)
    }

    /// Iterate entries in load order.
    pub fn iter(&self) -> impl Iterator<Item = &KeywordEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
