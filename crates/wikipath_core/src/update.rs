use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::StartTopicChanged(topic) => {
            state.set_start_topic(topic);
            Vec::new()
        }
        Msg::EndTopicChanged(topic) => {
            state.set_end_topic(topic);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Refuses re-entrant submits while a search is in flight and
            // submits with either topic empty.
            if !state.can_submit() {
                return (state, Vec::new());
            }
            let (starting, ending) = state.begin_search();
            vec![Effect::StartSearch { starting, ending }]
        }
        Msg::SearchCompleted {
            path,
            nodes_explored,
        } => {
            state.settle_with_path(path, nodes_explored);
            Vec::new()
        }
        Msg::SearchFailed { message } => {
            state.settle_with_failure(message);
            Vec::new()
        }
    };

    (state, effects)
}
