//! URL slug derivation

use regex::Regex;
use std::sync::OnceLock;

static NON_SLUG: OnceLock<Regex> = OnceLock::new();

/// Derives a URL slug from a title.
///
/// Every run of characters outside `[A-Za-z0-9-]` collapses to a single
/// hyphen, then the whole string is lowercased. Trailing punctuation in the
/// title therefore leaves a trailing hyphen in the slug.
pub fn slugify(title: &str) -> String {
    let pattern = NON_SLUG.get_or_init(|| {
        Regex::new(r"[^A-Za-z0-9-]+").expect("slug pattern is valid")
    });
    pattern.replace_all(title, "-").to_lowercase()
}
