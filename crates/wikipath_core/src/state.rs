use crate::article;
use crate::view_model::{present_path, AppViewModel};

/// Lifecycle of the single in-flight search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    InFlight,
    Settled,
}

/// The whole client state. Written only by [`crate::update`]; the
/// presentation layer reads it through [`AppState::view`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    start_topic: String,
    end_topic: String,
    path: Vec<String>,
    nodes_explored: u64,
    loading: LoadingState,
    last_failure: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff both topics are non-empty and no search is in flight.
    /// Submit is a no-op, not merely disabled, when this is false.
    pub fn can_submit(&self) -> bool {
        !self.start_topic.is_empty()
            && !self.end_topic.is_empty()
            && self.loading != LoadingState::InFlight
    }

    pub fn loading(&self) -> LoadingState {
        self.loading
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            start_topic: self.start_topic.clone(),
            end_topic: self.end_topic.clone(),
            can_submit: self.can_submit(),
            loading: self.loading,
            nodes_explored: self.nodes_explored,
            steps: present_path(&self.path),
            failure: self.last_failure.clone(),
        }
    }

    pub(crate) fn set_start_topic(&mut self, topic: String) {
        self.start_topic = topic;
    }

    pub(crate) fn set_end_topic(&mut self, topic: String) {
        self.end_topic = topic;
    }

    /// Moves to `InFlight`, resets the explored count, and returns the
    /// normalized (start, end) references for the request.
    pub(crate) fn begin_search(&mut self) -> (String, String) {
        self.loading = LoadingState::InFlight;
        self.nodes_explored = 0;
        self.last_failure = None;
        (
            article::article_reference(&self.start_topic),
            article::article_reference(&self.end_topic),
        )
    }

    /// Settles the in-flight search with a decoded outcome. An absent
    /// explored count leaves the reset value of 0 in place.
    pub(crate) fn settle_with_path(&mut self, path: Vec<String>, nodes_explored: Option<u64>) {
        self.path = path;
        if let Some(count) = nodes_explored {
            self.nodes_explored = count;
        }
        self.loading = LoadingState::Settled;
    }

    /// Settles after every endpoint failed. Renders like an empty result,
    /// but the failure stays visible to the presentation layer.
    pub(crate) fn settle_with_failure(&mut self, message: String) {
        self.path = Vec::new();
        self.nodes_explored = 0;
        self.last_failure = Some(message);
        self.loading = LoadingState::Settled;
    }
}
