//! Query matching and ranking over the keyword index.
//!
//! A search runs three tiers in a single pass over the index:
//!
//! 1. **Exact tier**: the normalized query equals the normalized keyword
//!    (fixed top score) or one of its normalized aliases (fixed lower
//!    score). Exact keyword hits always outrank exact alias hits.
//! 2. **Fuzzy tier**: for entries the exact tier did not score, each query
//!    token is matched against the words of the keyword and its aliases by
//!    equality, substring containment (either direction), or Levenshtein
//!    distance. Only distances within the configured threshold count.
//! 3. **Ranking**: `token_matches * token_match_weight` minus a rounded
//!    average-distance penalty; sort by score descending with ties broken
//!    by index load order; de-duplicate by keyword; cap the list length.
//!
//! The matcher itself never fails: an empty candidate set, an unmatched
//! query, or a blank query all produce an empty result list. Rejecting
//! blank queries with a user-facing message is the caller's job.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::distance::levenshtein;
use super::normalize::{normalize, tokenize};
use crate::core::catalog::index::KeywordIndex;
use crate::core::catalog::types::{KeywordEntry, MatchResult, Scope};

// ============================================================================
// MatchConfig
// ============================================================================

/// Tunable scoring parameters for the matcher.
///
/// Defaults reproduce the historical constants. The exact-tier scores must
/// stay above any reachable fuzzy score for the exact-over-fuzzy ordering
/// guarantee to hold; with the defaults that is true for queries up to 90
/// tokens, far beyond realistic input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Score assigned when the query equals an entry's keyword exactly.
    #[serde(default = "default_exact_keyword_score")]
    pub exact_keyword_score: i64,

    /// Score assigned when the query equals one of an entry's aliases.
    #[serde(default = "default_exact_alias_score")]
    pub exact_alias_score: i64,

    /// Points per query token with a qualifying fuzzy match.
    #[serde(default = "default_token_match_weight")]
    pub token_match_weight: i64,

    /// Multiplier on the average edit distance subtracted from the score.
    #[serde(default = "default_distance_penalty_weight")]
    pub distance_penalty_weight: i64,

    /// Largest edit distance that still counts as a token match.
    #[serde(default = "default_max_token_distance")]
    pub max_token_distance: usize,

    /// Hard cap on the number of returned results.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_exact_keyword_score() -> i64 {
    10_000
}

fn default_exact_alias_score() -> i64 {
    9_000
}

fn default_token_match_weight() -> i64 {
    100
}

fn default_distance_penalty_weight() -> i64 {
    10
}

fn default_max_token_distance() -> usize {
    1
}

fn default_max_results() -> usize {
    40
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            exact_keyword_score: default_exact_keyword_score(),
            exact_alias_score: default_exact_alias_score(),
            token_match_weight: default_token_match_weight(),
            distance_penalty_weight: default_distance_penalty_weight(),
            max_token_distance: default_max_token_distance(),
            max_results: default_max_results(),
        }
    }
}

impl MatchConfig {
    /// Override the fuzzy-tier distance threshold.
    pub fn with_max_token_distance(mut self, distance: usize) -> Self {
        self.max_token_distance = distance;
        self
    }

    /// Override the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Override the per-token score weight and distance penalty weight.
    pub fn with_weights(mut self, token_match_weight: i64, distance_penalty_weight: i64) -> Self {
        self.token_match_weight = token_match_weight;
        self.distance_penalty_weight = distance_penalty_weight;
        self
    }
}

// ============================================================================
// Matcher
// ============================================================================

/// The query matcher. Holds only configuration; all entry data comes from
/// the [`KeywordIndex`] passed to [`search`](Self::search).
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Match `query` against the index, restricted by `scope`, and return
    /// ranked results.
    ///
    /// Results are ordered by score descending; equal scores keep the index
    /// load order (the sort is stable and the index iterates in insertion
    /// order), so identical inputs always produce identical output.
    pub fn search(&self, query: &str, scope: Scope, index: &KeywordIndex) -> Vec<MatchResult> {
        let normalized_query = normalize(query);
        let tokens = tokenize(&normalized_query);

        let mut scored: Vec<MatchResult> = Vec::new();
        for entry in index.iter() {
            if !scope.matches(entry.category) {
                continue;
            }

            if !normalized_query.is_empty() && normalize(&entry.keyword) == normalized_query {
                scored.push(MatchResult {
                    keyword: entry.keyword.clone(),
                    category: entry.category,
                    score: self.config.exact_keyword_score,
                });
                continue;
            }

            if !normalized_query.is_empty()
                && entry.aliases.iter().any(|a| normalize(a) == normalized_query)
            {
                scored.push(MatchResult {
                    keyword: entry.keyword.clone(),
                    category: entry.category,
                    score: self.config.exact_alias_score,
                });
                continue;
            }

            if let Some(score) = self.fuzzy_score(&tokens, entry) {
                scored.push(MatchResult {
                    keyword: entry.keyword.clone(),
                    category: entry.category,
                    score,
                });
            }
        }

        // Stable sort: ties keep index load order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        let mut seen = HashSet::new();
        scored.retain(|r| seen.insert(r.keyword.clone()));
        scored.truncate(self.config.max_results);
        scored
    }

    /// Score one entry in the fuzzy tier, or `None` if no token matches.
    fn fuzzy_score(&self, tokens: &[String], entry: &KeywordEntry) -> Option<i64> {
        if tokens.is_empty() {
            return None;
        }

        let words = candidate_words(entry);
        if words.is_empty() {
            return None;
        }

        let mut token_matches: usize = 0;
        let mut dist_sum: usize = 0;
        for token in tokens {
            if let Some(distance) =
                best_token_distance(token, &words, self.config.max_token_distance)
            {
                token_matches += 1;
                dist_sum += distance;
            }
        }

        if token_matches == 0 {
            return None;
        }

        let penalty = (self.config.distance_penalty_weight as f64 * dist_sum as f64
            / tokens.len() as f64)
            .round() as i64;
        Some(token_matches as i64 * self.config.token_match_weight - penalty)
    }
}

/// All distinct words from an entry's keyword and aliases, normalized.
fn candidate_words(entry: &KeywordEntry) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for source in std::iter::once(entry.keyword.as_str())
        .chain(entry.aliases.iter().map(String::as_str))
    {
        for word in tokenize(&normalize(source)) {
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
    }
    words
}

/// Best qualifying distance between one query token and the candidate
/// words: equality and substring containment count as 0, anything else is
/// the Levenshtein distance. Distances above `max_distance` do not qualify.
fn best_token_distance(token: &str, words: &[String], max_distance: usize) -> Option<usize> {
    let mut best: Option<usize> = None;
    for word in words {
        let distance = if token == word || word.contains(token) || token.contains(word.as_str()) {
            0
        } else {
            levenshtein(token, word)
        };
        if best.map_or(true, |b| distance < b) {
            best = Some(distance);
        }
        if best == Some(0) {
            break;
        }
    }
    best.filter(|d| *d <= max_distance)
}

// ============================================================================
// Tests
// ============================================================================
