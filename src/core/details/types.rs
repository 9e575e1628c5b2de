//! Detail dataset data models.
//!
//! The dataset is a JSON object keyed by descriptive name:
//!
//! ```json
//! {
//!   "bed bug": {
//!     "sections": [
//!       { "name": "Overview", "items": [ { "title": "Bites", "description": "..." } ] }
//!     ]
//!   }
//! }
//! ```
//!
//! Every field is optional on the wire; missing pieces decode to empty so a
//! sparse entry still renders.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The whole detail dataset, in document order.
pub type DetailData = IndexMap<String, DetailEntry>;

/// Descriptive data for one named subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailEntry {
    #[serde(default)]
    pub sections: Vec<DetailSection>,
}

/// One titled section of an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailSection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<DetailItem>,
}

/// One item within a section: a title and free-form description text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl DetailItem {
    /// The description split into trimmed, non-empty paragraphs.
    ///
    /// Splits on line breaks (`\n` or `\r\n`); blank lines disappear.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.description
            .lines()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}
