//! Test Fixtures
//!
//! Shared helpers for building catalog indexes and entries.

use crate::core::catalog::index::{DuplicatePolicy, KeywordIndex};
use crate::core::catalog::types::{Category, KeywordEntry};

// =============================================================================
// Catalog Fixtures
// =============================================================================

/// Create an entry with aliases in one call.
pub fn entry(keyword: &str, category: Category, aliases: &[&str]) -> KeywordEntry {
    KeywordEntry::new(keyword, category).with_aliases(aliases.iter().copied())
}

/// Build an index from entries, panicking on duplicates.
pub fn index_of(entries: Vec<KeywordEntry>) -> KeywordIndex {
    KeywordIndex::from_entries(entries, DuplicatePolicy::Reject)
        .expect("fixture entries must be unique")
}

/// A small mixed-category index covering all three categories.
pub fn sample_index() -> KeywordIndex {
    index_of(vec![
        entry("mosquito", Category::Bugs, &["skeeter"]),
        entry("bed bug", Category::Bugs, &["wall louse"]),
        entry("black widow spider", Category::Bugs, &["widow"]),
        entry("adder", Category::Animals, &["viper", "common viper"]),
        entry("gila monster", Category::Animals, &[]),
        entry("poison ivy", Category::Plants, &["eastern poison ivy"]),
        entry("stinging nettle", Category::Plants, &["nettle"]),
    ])
}
