//! Canonical article references derived from user-entered topics.

/// Base URL every article reference is rooted at.
pub const WIKI_BASE: &str = "https://en.wikipedia.org/wiki/";

/// Marker separating the site prefix from the article segment of a reference.
const WIKI_MARKER: &str = "/wiki/";

/// Derives the canonical article reference for a raw topic string.
///
/// Runs of whitespace collapse to a single underscore, the first letter of
/// every whitespace-delimited word is uppercased, and the result is prefixed
/// with [`WIKI_BASE`]. Deterministic: the same input always yields the same
/// reference.
pub fn article_reference(topic: &str) -> String {
    let segment = topic
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join("_");
    format!("{WIKI_BASE}{segment}")
}

/// Recovers a human-readable title from an article reference.
///
/// Takes the segment after the last `/wiki/` marker and decodes underscores
/// back to spaces. A reference without the marker is used as-is rather than
/// rejected.
pub fn display_title(reference: &str) -> String {
    let segment = reference
        .rfind(WIKI_MARKER)
        .map(|idx| &reference[idx + WIKI_MARKER.len()..])
        .unwrap_or(reference);
    segment.replace('_', " ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
