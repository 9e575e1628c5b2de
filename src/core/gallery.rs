//! Per-category gallery listings.
//!
//! A gallery takes the raw manifest list and keeps only top-level image
//! paths directly under `images/<category>/` (no subfolders), de-duplicated
//! in order, each with a display label derived from the filename. Label
//! derivation replaces underscores only — hyphens are part of the name —
//! and wraps long labels to lines of at most 30 characters, preferring
//! space breaks and hard-wrapping with a trailing `-` when a single word
//! runs too long.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::catalog::types::Category;
use super::search::normalize::strip_image_extension;

/// Maximum characters per label line.
const MAX_LABEL_WIDTH: usize = 30;

/// A top-level image path under `images/<category>/`.
static TOP_LEVEL_IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^images/(bugs|animals|plants)/[^/]+\.(?:jpe?g|png)$").unwrap()
});

/// One gallery tile: the image path and its wrapped display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    pub path: String,
    pub label: String,
}

/// Whether `path` is a top-level image of `category`.
fn is_top_level_image(path: &str, category: Category) -> bool {
    TOP_LEVEL_IMAGE
        .captures(path)
        .map_or(false, |caps| caps[1].eq_ignore_ascii_case(category.dir_name()))
}

/// Build the gallery listing for `category` from a raw manifest list.
///
/// Filters to top-level category images, de-duplicates preserving first
/// occurrence, and labels each entry.
pub fn build_gallery(files: &[String], category: Category) -> Vec<GalleryItem> {
    let mut seen = HashSet::new();
    files
        .iter()
        .filter(|path| is_top_level_image(path, category))
        .filter(|path| seen.insert(path.as_str()))
        .map(|path| GalleryItem {
            path: path.clone(),
            label: wrap_display_name(path),
        })
        .collect()
}

/// Derive the wrapped display label for an image path.
///
/// Basename minus extension, underscores to spaces, trimmed; then wrapped
/// to [`MAX_LABEL_WIDTH`] characters per line. A line breaks at the last
/// space that fits; a word with no break point is cut at 29 characters
/// with a trailing `-`.
pub fn wrap_display_name(path: &str) -> String {
    let base = path.rsplit('/').next().unwrap_or(path);
    let name = strip_image_extension(base);
    let spaced = name.replace('_', " ");
    let trimmed = spaced.trim();

    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() <= MAX_LABEL_WIDTH {
        return trimmed.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut rest = &chars[..];
    while !rest.is_empty() {
        if rest.len() <= MAX_LABEL_WIDTH {
            lines.push(rest.iter().collect());
            break;
        }
        let segment = &rest[..MAX_LABEL_WIDTH];
        match segment.iter().rposition(|c| *c == ' ') {
            Some(last_space) if last_space > 0 => {
                lines.push(rest[..last_space].iter().collect());
                rest = &rest[last_space + 1..];
            }
            _ => {
                let mut line: String = rest[..MAX_LABEL_WIDTH - 1].iter().collect();
                line.push('-');
                lines.push(line);
                rest = &rest[MAX_LABEL_WIDTH - 1..];
            }
        }
    }
    lines.join("\n")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[GalleryItem]) -> Vec<&str> {
        items.iter().map(|i| i.path.as_str()).collect()
    }

    // ------------------------------------------------------------------
    // Filtering
    // ------------------------------------------------------------------

    #[test]
    fn test_gallery_keeps_only_top_level_category_images() {
        let files = vec![
            "images/bugs/wasp.png".to_string(),
            "images/bugs/sub/hidden.png".to_string(),
            "images/animals/fox.png".to_string(),
            "images/bugs/manifest.json".to_string(),
            "other/bugs/wasp.png".to_string(),
        ];
        let items = build_gallery(&files, Category::Bugs);
        assert_eq!(paths(&items), vec!["images/bugs/wasp.png"]);
    }

    #[test]
    fn test_gallery_filter_is_case_insensitive() {
        let files = vec!["Images/BUGS/Wasp.PNG".to_string()];
        let items = build_gallery(&files, Category::Bugs);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_gallery_deduplicates_preserving_order() {
        let files = vec![
            "images/bugs/wasp.png".to_string(),
            "images/bugs/flea.png".to_string(),
            "images/bugs/wasp.png".to_string(),
        ];
        let items = build_gallery(&files, Category::Bugs);
        assert_eq!(paths(&items), vec!["images/bugs/wasp.png", "images/bugs/flea.png"]);
    }

    // ------------------------------------------------------------------
    // Labels
    // ------------------------------------------------------------------

    #[test]
    fn test_label_replaces_underscores_not_hyphens() {
        assert_eq!(wrap_display_name("images/bugs/bed_bug.png"), "bed bug");
        assert_eq!(wrap_display_name("images/bugs/wheel-bug.png"), "wheel-bug");
    }

    #[test]
    fn test_label_short_names_pass_through() {
        assert_eq!(
            wrap_display_name("images/bugs/Chigger_Trombiculidae.png"),
            "Chigger Trombiculidae"
        );
        // Exactly at the width limit.
        assert_eq!(
            wrap_display_name("123456789012345678901234567890.png"),
            "123456789012345678901234567890"
        );
    }

    #[test]
    fn test_label_wraps_at_last_space_that_fits() {
        assert_eq!(
            wrap_display_name("images/bugs/incredibly_dangerous_venomous_spider.png"),
            "incredibly dangerous venomous\nspider"
        );
    }

    #[test]
    fn test_label_hard_wraps_unbroken_words() {
        assert_eq!(
            wrap_display_name("images/plants/supercalifragilisticexpialidocious.png"),
            "supercalifragilisticexpialido-\ncious"
        );
    }

    #[test]
    fn test_gallery_items_carry_labels() {
        let files = vec!["images/bugs/bumble_bee.jpg".to_string()];
        let items = build_gallery(&files, Category::Bugs);
        assert_eq!(items[0].label, "bumble bee");
    }
}
