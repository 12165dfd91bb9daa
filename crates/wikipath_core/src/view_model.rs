use crate::article;
use crate::LoadingState;

/// Explored-node cap enforced by the remote search service, shown in the
/// explanatory note. The client never enforces it.
pub const SERVER_NODE_CAP: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub start_topic: String,
    pub end_topic: String,
    pub can_submit: bool,
    pub loading: LoadingState,
    pub nodes_explored: u64,
    pub steps: Vec<PathStepView>,
    /// Present only when every endpoint failed; diagnostic, the default
    /// rendering is still the empty results list.
    pub failure: Option<String>,
}

/// One renderable step of the found path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStepView {
    /// 1-based position within the path.
    pub ordinal: usize,
    /// Human-readable article title decoded from the reference.
    pub title: String,
    /// The raw article reference, used verbatim as the link target.
    pub target: String,
}

/// Maps a path onto display records. Built fresh on every call; an empty
/// path yields an empty sequence, and a reference without the article
/// marker falls back to the raw string rather than failing.
pub fn present_path(path: &[String]) -> Vec<PathStepView> {
    path.iter()
        .enumerate()
        .map(|(index, reference)| PathStepView {
            ordinal: index + 1,
            title: article::display_title(reference),
            target: reference.clone(),
        })
        .collect()
}
