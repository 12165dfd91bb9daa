use wikipath_core::{article_reference, display_title, WIKI_BASE};

#[test]
fn reference_collapses_whitespace_and_title_cases() {
    assert_eq!(
        article_reference("south   korea"),
        "https://en.wikipedia.org/wiki/South_Korea"
    );
    assert_eq!(article_reference("south   korea"), article_reference("South Korea"));
}

#[test]
fn reference_is_deterministic() {
    let topic = "breadth first search";
    assert_eq!(article_reference(topic), article_reference(topic));
    assert_eq!(
        article_reference(topic),
        format!("{WIKI_BASE}Breadth_First_Search")
    );
}

#[test]
fn reference_keeps_single_word_unchanged_but_capitalized() {
    assert_eq!(article_reference("hangul"), format!("{WIKI_BASE}Hangul"));
    assert_eq!(article_reference("Hangul"), format!("{WIKI_BASE}Hangul"));
}

#[test]
fn reference_preserves_interior_casing() {
    // Only the first letter of each word is touched.
    assert_eq!(article_reference("McDonald's"), format!("{WIKI_BASE}McDonald's"));
    assert_eq!(article_reference("pH meter"), format!("{WIKI_BASE}PH_Meter"));
}

#[test]
fn title_decodes_trailing_segment() {
    assert_eq!(display_title("https://en.wikipedia.org/wiki/South_Korea"), "South Korea");
    assert_eq!(display_title("https://en.wikipedia.org/wiki/Hangul"), "Hangul");
}

#[test]
fn title_uses_last_marker_occurrence() {
    assert_eq!(display_title("https://a/wiki/b/wiki/Some_Page"), "Some Page");
}

#[test]
fn title_falls_back_to_raw_string_without_marker() {
    assert_eq!(display_title("not a reference"), "not a reference");
    assert_eq!(display_title("Plain_Segment"), "Plain Segment");
    assert_eq!(display_title(""), "");
}
