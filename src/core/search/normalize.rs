//! Filename and query text normalization.
//!
//! [`normalize`] converts a raw filename, path segment, or query string into
//! the canonical lookup form shared by the whole guide: separator-unified,
//! diacritic-stripped, lower-cased, with any known image extension removed.
//! The same function serves index keys, manifest basenames, and user queries,
//! so a filename like `Bed_Bug.PNG` and a query like `bed bug` land on the
//! same key.
//!
//! `normalize` is deterministic and idempotent: applying it twice yields the
//! same string as applying it once, for every input.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Runs of underscores, hyphens, or whitespace collapse to one space.
static SEPARATOR_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_\-]+").unwrap());

/// A known image extension at the end of the string.
static IMAGE_EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.(?:jpe?g|png)$").unwrap());

/// Runs of non-word characters, used to split normalized text into tokens.
static NON_WORD_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

/// Normalize a raw filename or query into its canonical lookup form.
///
/// Steps, in order: unify separator runs (`_`, `-`, whitespace) into single
/// spaces and trim; decompose to NFD and drop combining marks; lower-case;
/// strip trailing known image extensions (`jpg`, `jpeg`, `png`).
///
/// Extension stripping repeats until none remains, so a double extension
/// cannot survive one call and reappear as strippable in the next; that is
/// what keeps the function idempotent.
pub fn normalize(s: &str) -> String {
    let mut out = normalize_name(s);

    loop {
        let candidate = out.trim_end();
        let stripped = IMAGE_EXTENSION.replace(candidate, "");
        if stripped.len() == out.len() {
            break;
        }
        out = stripped.into_owned();
    }

    out.trim().to_string()
}

/// Normalize without extension stripping.
///
/// For strings that are names rather than filenames, such as detail dataset
/// keys: separator runs unify to single spaces, combining marks drop after
/// NFD decomposition, and the result is trimmed and lower-cased, but a
/// trailing `.png` stays part of the name.
pub fn normalize_name(s: &str) -> String {
    let unified = SEPARATOR_RUNS.replace_all(s, " ");
    let decomposed: String = unified
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    decomposed.to_lowercase()
}

/// Normalize the final path segment of `path`.
///
/// Manifest paths use forward slashes; everything after the last `/` is the
/// basename.
pub fn normalize_basename(path: &str) -> String {
    let base = path.rsplit('/').next().unwrap_or(path);
    normalize(base)
}

/// Remove one trailing image extension, case-insensitively, leaving the
/// rest of the string untouched.
pub fn strip_image_extension(name: &str) -> String {
    IMAGE_EXTENSION.replace(name, "").into_owned()
}

/// Split already-normalized text into non-empty tokens on non-word runs.
///
/// Callers pass the output of [`normalize`]; this function only splits, it
/// does not normalize again.
pub fn tokenize(text: &str) -> Vec<String> {
    NON_WORD_RUNS
        .split(text)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
