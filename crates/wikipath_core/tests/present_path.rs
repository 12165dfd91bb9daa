use wikipath_core::{present_path, PathStepView};

#[test]
fn single_reference_yields_one_record() {
    let path = vec!["https://site/wiki/South_Korea".to_string()];
    let steps = present_path(&path);
    assert_eq!(
        steps,
        vec![PathStepView {
            ordinal: 1,
            title: "South Korea".to_string(),
            target: "https://site/wiki/South_Korea".to_string(),
        }]
    );
}

#[test]
fn ordinals_are_one_based_and_ordered() {
    let path = vec![
        "https://en.wikipedia.org/wiki/South_Korea".to_string(),
        "https://en.wikipedia.org/wiki/Korean_Language".to_string(),
        "https://en.wikipedia.org/wiki/Hangul".to_string(),
    ];
    let steps = present_path(&path);
    assert_eq!(steps.len(), 3);
    assert_eq!(
        steps.iter().map(|s| s.ordinal).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(steps[1].title, "Korean Language");
    assert_eq!(steps[2].target, path[2]);
}

#[test]
fn empty_path_yields_no_records() {
    assert!(present_path(&[]).is_empty());
}

#[test]
fn marker_less_reference_degrades_to_raw_string() {
    let path = vec!["garbage-without-marker".to_string()];
    let steps = present_path(&path);
    assert_eq!(steps[0].title, "garbage-without-marker");
    assert_eq!(steps[0].target, "garbage-without-marker");
}
