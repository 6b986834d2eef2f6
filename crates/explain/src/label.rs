//! Human-readable labels for knowledge-graph URIs.
//!
//! These are heuristics and the order of the steps matters: e.g. the first
//! letter is lower-cased only when a parenthetical was removed from a
//! non-category resource (`Heist_(film)` -> `heist`).

use properties::local_name;
use regex::Regex;
use std::sync::LazyLock;

static PARENTHETICAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

const CATEGORY_PREFIX: &str = "Category:";

/// Label of an object URI, e.g.
/// `http://dbpedia.org/resource/Category:Action_films` -> `Action films`.
pub fn uri_label(uri: &str) -> String {
    let segment = uri.rsplit('/').next().unwrap_or(uri);

    let keep_parenthetical = segment.to_lowercase().contains("franchise");
    let (segment, stripped) = if !keep_parenthetical && PARENTHETICAL.is_match(segment) {
        (PARENTHETICAL.replace_all(segment, "").into_owned(), true)
    } else {
        (segment.to_string(), false)
    };

    let spaced = segment.replace('_', " ");
    let (label, had_category) = match spaced.strip_prefix(CATEGORY_PREFIX) {
        Some(rest) => (rest.to_string(), true),
        None => (spaced, false),
    };

    let label = if stripped && !had_category {
        lowercase_first(&label)
    } else {
        label
    };
    label.trim_end().to_string()
}

/// Predicate local name split on camel case and lower-cased:
/// `musicComposer` -> `music composer`
pub fn property_phrase(predicate: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(local_name(predicate), "$1 $2")
        .to_lowercase()
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
