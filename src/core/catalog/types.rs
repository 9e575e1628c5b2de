//! Core data models for the keyword catalog.
//!
//! This module defines the fundamental types used throughout the guide:
//!
//! - [`Category`]: Classification of a catalog entry (bugs, animals, plants)
//! - [`Scope`]: Category filter applied to a search invocation
//! - [`KeywordEntry`]: One catalog entry: canonical keyword plus aliases
//! - [`MatchResult`]: A scored hit produced by the matcher
//!
//! # Design Notes
//!
//! - Categories serialize to their lowercase wire names (`"bugs"`), which are
//!   also the image directory names on disk
//! - Entries are immutable once loaded; the index rebuilds fully on reload
//! - Scores are only comparable within a single query

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Category - Classification enum
// ============================================================================

/// Category of a catalog entry.
///
/// The lowercase form doubles as the per-category image directory name
/// (`images/bugs/`, `images/animals/`, `images/plants/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Biting and stinging insects, arachnids, and other arthropods.
    Bugs,
    /// Vertebrate wildlife.
    Animals,
    /// Toxic or irritant plants.
    Plants,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 3] = [Category::Bugs, Category::Animals, Category::Plants];

    /// The on-disk directory name for this category.
    #[inline]
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Bugs => "bugs",
            Self::Animals => "animals",
            Self::Plants => "plants",
        }
    }

    /// Parse a category from its wire name, case-insensitively.
    ///
    /// Returns `None` for anything that is not `bugs`, `animals`, or
    /// `plants`; callers decide whether that is an error or a skip.
    pub fn from_name(name: &str) -> Option<Category> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bugs" => Some(Self::Bugs),
            "animals" => Some(Self::Animals),
            "plants" => Some(Self::Plants),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

// ============================================================================
// Scope - Search filter
// ============================================================================

/// Category filter narrowing which candidates a search considers.
///
/// `All` disables filtering; the other variants restrict candidates to one
/// [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// No category restriction.
    #[default]
    All,
    Bugs,
    Animals,
    Plants,
}

impl Scope {
    /// Whether an entry in `category` passes this scope filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Bugs => category == Category::Bugs,
            Self::Animals => category == Category::Animals,
            Self::Plants => category == Category::Plants,
        }
    }

    /// Parse a scope from user input, case-insensitively.
    pub fn from_name(name: &str) -> Option<Scope> {
        match name.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "bugs" => Some(Self::Bugs),
            "animals" => Some(Self::Animals),
            "plants" => Some(Self::Plants),
            _ => None,
        }
    }
}

impl From<Category> for Scope {
    fn from(category: Category) -> Self {
        match category {
            Category::Bugs => Self::Bugs,
            Category::Animals => Self::Animals,
            Category::Plants => Self::Plants,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Bugs => "bugs",
            Self::Animals => "animals",
            Self::Plants => "plants",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// KeywordEntry - Catalog entry
// ============================================================================

/// One catalog entry: a canonical keyword, its category, and the ordered
/// alternate search terms associated with it.
///
/// Entries are immutable after loading. Alias order is preserved as loaded;
/// it has no ranking significance of its own but keeps runs reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// Canonical keyword; the unique index key.
    pub keyword: String,
    /// Category the entry belongs to.
    pub category: Category,
    /// Alternate search terms, matched with lower priority than the keyword.
    pub aliases: Vec<String>,
}

impl KeywordEntry {
    /// Create an entry without aliases.
    pub fn new(keyword: impl Into<String>, category: Category) -> Self {
        Self {
            keyword: keyword.into(),
            category,
            aliases: Vec::new(),
        }
    }

    /// Attach aliases, replacing any existing ones.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }
}

// ============================================================================
// MatchResult - Scored search hit
// ============================================================================

/// A scored hit produced by the matcher for one query.
///
/// Scores are only meaningfully ordered relative to the query that produced
/// them; they are never cached or compared across queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub keyword: String,
    pub category: Category,
    pub score: i64,
}

// ============================================================================
// Tests
// ============================================================================
