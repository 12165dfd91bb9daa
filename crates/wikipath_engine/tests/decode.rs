use pretty_assertions::assert_eq;
use wikipath_engine::{decode_search_body, SearchOutcome};

#[test]
fn wrapped_shape_yields_path_and_count() {
    let body = br#"{"path":["a","b","c"],"nodesExplored":7}"#;
    assert_eq!(
        decode_search_body(body).unwrap(),
        SearchOutcome {
            path: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            nodes_explored: Some(7),
        }
    );
}

#[test]
fn wrapped_shape_without_count_reports_none() {
    let body = br#"{"path":["a"]}"#;
    let outcome = decode_search_body(body).unwrap();
    assert_eq!(outcome.path, vec!["a".to_string()]);
    assert_eq!(outcome.nodes_explored, None);
}

#[test]
fn reported_zero_count_survives_as_present() {
    let body = br#"{"path":["a"],"nodesExplored":0}"#;
    assert_eq!(decode_search_body(body).unwrap().nodes_explored, Some(0));
}

#[test]
fn message_forces_empty_path_even_with_stray_data() {
    let body = br#"{"message":"No path found or query took too long","path":["a","b"],"nodesExplored":12}"#;
    let outcome = decode_search_body(body).unwrap();
    assert!(outcome.path.is_empty());
    assert_eq!(outcome.nodes_explored, Some(12));
}

#[test]
fn bare_array_shape_is_the_path() {
    let body = br#"["url1","url2"]"#;
    let outcome = decode_search_body(body).unwrap();
    assert_eq!(outcome.path, vec!["url1".to_string(), "url2".to_string()]);
    assert_eq!(outcome.nodes_explored, None);
}

#[test]
fn empty_array_is_an_empty_path_not_an_error() {
    let outcome = decode_search_body(b"[]").unwrap();
    assert!(outcome.path.is_empty());
}

#[test]
fn object_without_path_or_message_is_rejected() {
    assert!(decode_search_body(br#"{"error":"bad request"}"#).is_err());
}

#[test]
fn non_json_body_is_rejected() {
    assert!(decode_search_body(b"<html>oops</html>").is_err());
    assert!(decode_search_body(b"").is_err());
}

#[test]
fn array_of_non_strings_is_rejected() {
    assert!(decode_search_body(b"[1,2,3]").is_err());
}
