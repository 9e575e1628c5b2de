//! Property-based tests for the Levenshtein edit distance
//!
//! Tests invariants:
//! - Distance is zero exactly when the inputs are equal
//! - Distance is symmetric in its arguments
//! - Distance is bounded below by the length difference and above by the
//!   longer length (in chars)
//! - Distance satisfies the triangle inequality
//! - Appending one char moves the distance by exactly one

use proptest::prelude::*;

use crate::core::search::distance::levenshtein;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Generate short words over a small alphabet, so collisions and near
/// misses actually occur between generated pairs.
fn arb_word() -> impl Strategy<Value = String> {
    "[abcde]{0,10}"
}

/// Generate strings with various Unicode content
fn arb_unicode_word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,20}",
        "[a-zà-ÿ]{0,20}",
        "\\PC{0,20}",
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Distance is zero exactly on equal inputs
    #[test]
    fn prop_zero_iff_equal(a in arb_unicode_word(), b in arb_unicode_word()) {
        let d = levenshtein(&a, &b);
        prop_assert_eq!(
            d == 0,
            a == b,
            "distance {} disagrees with equality for {:?}/{:?}",
            d, a, b
        );
    }

    /// Property: Distance is symmetric
    #[test]
    fn prop_symmetric(a in arb_unicode_word(), b in arb_unicode_word()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    /// Property: Distance is bounded by the char lengths
    ///
    /// `|len(a) - len(b)| <= d <= max(len(a), len(b))`, counting chars.
    #[test]
    fn prop_bounded_by_lengths(a in arb_unicode_word(), b in arb_unicode_word()) {
        let d = levenshtein(&a, &b);
        let la = a.chars().count();
        let lb = b.chars().count();

        prop_assert!(
            d >= la.abs_diff(lb),
            "distance {} below length difference {} for {:?}/{:?}",
            d, la.abs_diff(lb), a, b
        );
        prop_assert!(
            d <= la.max(lb),
            "distance {} above longer length {} for {:?}/{:?}",
            d, la.max(lb), a, b
        );
    }

    /// Property: Triangle inequality
    ///
    /// Editing a into c is never cheaper via b: `d(a, c) <= d(a, b) + d(b, c)`.
    #[test]
    fn prop_triangle_inequality(a in arb_word(), b in arb_word(), c in arb_word()) {
        let ab = levenshtein(&a, &b);
        let bc = levenshtein(&b, &c);
        let ac = levenshtein(&a, &c);

        prop_assert!(
            ac <= ab + bc,
            "d({:?},{:?})={} exceeds d({:?},{:?})+d({:?},{:?})={}",
            a, c, ac, a, b, b, c, ab + bc
        );
    }

    /// Property: Appending one char changes the distance by at most one,
    /// and a single append to one side of an equal pair costs exactly one
    #[test]
    fn prop_single_append(a in arb_word(), ch in proptest::char::range('a', 'e')) {
        let mut extended = a.clone();
        extended.push(ch);

        prop_assert_eq!(levenshtein(&a, &extended), 1);
        prop_assert_eq!(levenshtein(&extended, &a), 1);
    }
}
