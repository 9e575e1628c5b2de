//! Levenshtein edit distance.
//!
//! Classic unit-cost distance (insert, delete, substitute) over Unicode
//! scalar values. The DP table is rolled into two rows kept over the shorter
//! string, so space is `O(min(|a|,|b|))` and time `O(|a|*|b|)`.

/// Unit-cost Levenshtein distance between `a` and `b`, counted in chars.
///
/// `levenshtein(x, x) == 0`, `levenshtein("", s) == s.chars().count()`, and
/// the result is symmetric in its arguments.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Rows span the shorter string plus the empty prefix.
    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let mut prev: Vec<usize> = (0..=shorter.len()).collect();
    let mut curr: Vec<usize> = vec![0; shorter.len() + 1];

    for (i, lc) in longer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in shorter.iter().enumerate() {
            let substitution = prev[j] + usize::from(lc != sc);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[shorter.len()]
}

// ============================================================================
// Tests
// ============================================================================
