//! Property-based tests for search matching and ranking
//!
//! Tests invariants:
//! - Same query and index always produce the same results in the same order
//! - Scores are sorted descending and never fall below the floor the
//!   default weights guarantee
//! - A result list never repeats a keyword and never exceeds the cap
//! - Every result refers to an index entry and respects the scope filter
//! - Searching a keyword's exact text puts that keyword first at the
//!   exact-match score
//! - Blank queries match nothing

use proptest::prelude::*;

use crate::core::catalog::index::{DuplicatePolicy, KeywordIndex};
use crate::core::catalog::types::{Category, KeywordEntry, Scope};
use crate::core::search::matcher::{MatchConfig, Matcher};
use crate::tests::common::fixtures::sample_index;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Generate an index of 1-7 entries with distinct keywords, mixed
/// categories, and 0-2 aliases each.
fn arb_index() -> impl Strategy<Value = KeywordIndex> {
    proptest::collection::hash_set("[a-z]{3,8}", 1..8)
        .prop_flat_map(|keywords| {
            let keywords: Vec<String> = keywords.into_iter().collect();
            let alias_lists = proptest::collection::vec(
                proptest::collection::vec("[a-z]{3,8}", 0..3),
                keywords.len(),
            );
            (Just(keywords), alias_lists)
        })
        .prop_map(|(keywords, alias_lists)| {
            let entries: Vec<KeywordEntry> = keywords
                .iter()
                .zip(alias_lists)
                .enumerate()
                .map(|(i, (keyword, aliases))| {
                    KeywordEntry::new(keyword.clone(), Category::ALL[i % 3]).with_aliases(aliases)
                })
                .collect();
            KeywordIndex::from_entries(entries, DuplicatePolicy::Reject)
                .expect("generated keywords are distinct")
        })
}

/// Generate 1-3 word queries over the same alphabet the indexes use.
fn arb_query() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z]{1,8}", 1..4).prop_map(|words| words.join(" "))
}

fn arb_scope() -> impl Strategy<Value = Scope> {
    prop_oneof![
        Just(Scope::All),
        Just(Scope::Bugs),
        Just(Scope::Animals),
        Just(Scope::Plants),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Same query returns same results in the same order
    #[test]
    fn prop_deterministic(index in arb_index(), query in arb_query(), scope in arb_scope()) {
        let matcher = Matcher::default();

        let first = matcher.search(&query, scope, &index);
        let second = matcher.search(&query, scope, &index);
        prop_assert_eq!(first, second);
    }

    /// Property: Scores are descending and floored
    ///
    /// With default weights a qualifying fuzzy hit scores at least
    /// `token_match_weight - distance_penalty_weight`, and the exact tiers
    /// score far above that, so no result ever scores below 90.
    #[test]
    fn prop_scores_descending_and_floored(index in arb_index(), query in arb_query()) {
        let matcher = Matcher::default();
        let results = matcher.search(&query, Scope::All, &index);

        for pair in results.windows(2) {
            prop_assert!(
                pair[0].score >= pair[1].score,
                "scores out of order: {} before {}",
                pair[0].score, pair[1].score
            );
        }
        for result in &results {
            prop_assert!(result.score >= 90, "score {} below floor", result.score);
        }
    }

    /// Property: No duplicate keywords, never more than the cap
    #[test]
    fn prop_unique_and_capped(
        index in arb_index(),
        query in arb_query(),
        cap in 1usize..6,
    ) {
        let matcher = Matcher::new(MatchConfig::default().with_max_results(cap));
        let results = matcher.search(&query, Scope::All, &index);

        prop_assert!(results.len() <= cap, "{} results with cap {}", results.len(), cap);

        let mut keywords: Vec<&str> = results.iter().map(|r| r.keyword.as_str()).collect();
        keywords.sort_unstable();
        keywords.dedup();
        prop_assert_eq!(keywords.len(), results.len(), "duplicate keyword in results");
    }

    /// Property: Results refer to real entries and respect the scope
    #[test]
    fn prop_results_come_from_index(
        index in arb_index(),
        query in arb_query(),
        scope in arb_scope(),
    ) {
        let matcher = Matcher::default();

        for result in matcher.search(&query, scope, &index) {
            let entry = index.get(&result.keyword);
            prop_assert!(entry.is_some(), "result {:?} not in index", result.keyword);
            if let Some(entry) = entry {
                prop_assert_eq!(entry.category, result.category);
            }
            prop_assert!(scope.matches(result.category), "scope {:?} leaked", scope);
        }
    }

    /// Property: Searching a keyword's own text ranks it first at the
    /// exact-match score
    #[test]
    fn prop_exact_keyword_ranks_first(
        index in arb_index(),
        pick in any::<prop::sample::Index>(),
    ) {
        let position = pick.index(index.len());
        let target = index
            .iter()
            .nth(position)
            .expect("position is in range")
            .keyword
            .clone();

        let matcher = Matcher::default();
        let results = matcher.search(&target, Scope::All, &index);

        prop_assert!(!results.is_empty());
        prop_assert_eq!(&results[0].keyword, &target);
        prop_assert_eq!(results[0].score, MatchConfig::default().exact_keyword_score);
    }

    /// Property: Blank and whitespace queries match nothing
    ///
    /// Uses the fixed sample catalog; the outcome must not depend on the
    /// whitespace flavor.
    #[test]
    fn prop_blank_queries_match_nothing(blank in "[ \\t]{0,10}") {
        let matcher = Matcher::default();
        let results = matcher.search(&blank, Scope::All, &sample_index());
        prop_assert!(results.is_empty(), "blank query produced {:?}", results);
    }
}
