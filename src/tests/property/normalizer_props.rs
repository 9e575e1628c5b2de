//! Property-based tests for text normalization
//!
//! Tests invariants:
//! - Normalization is idempotent and deterministic
//! - Output never carries uppercase ASCII, underscores, hyphens, edge
//!   whitespace, or a trailing image extension
//! - Separator choice between words never affects the result
//! - Tokens are non-empty and free of non-word characters
//! - Extension stripping removes a suffix and nothing else

use proptest::prelude::*;

use crate::core::search::normalize::{normalize, strip_image_extension, tokenize};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Generate strings with various Unicode content
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        // Filename-ish ASCII with separators and extensions
        "[a-zA-Z0-9_\\- .]{0,40}(\\.(png|PNG|jpg|JPG|jpeg))?",
        // With accented characters
        "[a-zA-ZÀ-ÿ0-9 _\\-]{0,40}",
        // Any printable
        "\\PC{0,40}",
    ]
}

/// Generate (word, separator-run) pairs for rebuilding phrases with
/// arbitrary separator choices.
fn arb_separated_words() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec(("[a-z]{1,6}", "[-_ \\t]{1,3}"), 1..5)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Normalization is idempotent
    ///
    /// Applying `normalize` to its own output changes nothing, so keys,
    /// basenames, and queries can be normalized any number of times.
    #[test]
    fn prop_idempotent(text in arb_text()) {
        let once = normalize(&text);
        let twice = normalize(&once);
        prop_assert_eq!(&twice, &once, "not idempotent for {:?}", text);
    }

    /// Property: Deterministic for the same input
    #[test]
    fn prop_deterministic(text in arb_text()) {
        prop_assert_eq!(normalize(&text), normalize(&text));
    }

    /// Property: Output shape invariants
    ///
    /// No uppercase ASCII, no underscores or hyphens, no edge whitespace,
    /// no run of two spaces, and no surviving image extension.
    #[test]
    fn prop_output_shape(text in arb_text()) {
        let out = normalize(&text);

        prop_assert!(
            !out.chars().any(|c| c.is_ascii_uppercase()),
            "uppercase survived in {:?}",
            out
        );
        prop_assert!(!out.contains('_') && !out.contains('-'), "separator survived in {:?}", out);
        prop_assert_eq!(out.trim(), &out, "edge whitespace in {:?}", &out);
        prop_assert!(!out.contains("  "), "double space in {:?}", out);
        for ext in [".png", ".jpg", ".jpeg"] {
            prop_assert!(!out.ends_with(ext), "extension survived in {:?}", out);
        }
    }

    /// Property: Separator choice never affects the result
    ///
    /// `bed_bug`, `bed-bug`, and `bed   bug` all normalize to `bed bug`,
    /// whatever mix of separators joined the words.
    #[test]
    fn prop_separator_invariant(pairs in arb_separated_words()) {
        let mut joined = String::new();
        let mut words = Vec::new();
        for (word, sep) in &pairs {
            joined.push_str(word);
            joined.push_str(sep);
            words.push(word.clone());
        }

        prop_assert_eq!(normalize(&joined), words.join(" "));
    }

    /// Property: Tokens are non-empty and word-character only
    #[test]
    fn prop_tokens_are_clean(text in arb_text()) {
        for token in tokenize(&normalize(&text)) {
            prop_assert!(!token.is_empty(), "empty token from {:?}", text);
            prop_assert!(
                !token.chars().any(char::is_whitespace),
                "whitespace inside token {:?}",
                token
            );
        }
    }

    /// Property: Extension stripping removes a suffix and nothing else
    ///
    /// The output is always a prefix of the input, and inputs without a
    /// trailing image extension pass through untouched.
    #[test]
    fn prop_strip_extension_is_a_prefix(text in arb_text()) {
        let stripped = strip_image_extension(&text);
        prop_assert!(
            text.starts_with(&stripped),
            "{:?} is not a prefix of {:?}",
            stripped, text
        );

        let lower = text.to_lowercase();
        if !lower.ends_with(".png") && !lower.ends_with(".jpg") && !lower.ends_with(".jpeg") {
            prop_assert_eq!(stripped, text);
        }
    }
}
