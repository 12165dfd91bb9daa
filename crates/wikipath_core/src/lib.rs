//! Wikipath core: pure state machine and view-model helpers.
mod article;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use article::{article_reference, display_title, WIKI_BASE};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, LoadingState};
pub use update::update;
pub use view_model::{present_path, AppViewModel, PathStepView, SERVER_NODE_CAP};
