#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the starting topic input.
    StartTopicChanged(String),
    /// User edited the target topic input.
    EndTopicChanged(String),
    /// User activated the Find Path control.
    SubmitClicked,
    /// Engine settled the in-flight search with a decoded outcome.
    SearchCompleted {
        path: Vec<String>,
        nodes_explored: Option<u64>,
    },
    /// Engine settled the in-flight search after every endpoint failed.
    SearchFailed { message: String },
}
