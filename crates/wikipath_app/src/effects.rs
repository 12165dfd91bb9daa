use wikipath_core::{Effect, Msg};
use wikipath_engine::{
    EndpointHealth, EngineEvent, EngineHandle, SearchConfig, SearchError, SearchOutcome,
    SearchRequest,
};
use wikipath_logging::{finder_info, finder_warn};

/// Runs core effects against the engine and maps engine events back onto
/// core messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let engine = EngineHandle::new(config)?;
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartSearch { starting, ending } => {
                    finder_info!("StartSearch starting={} ending={}", starting, ending);
                    self.engine.search(SearchRequest { starting, ending });
                }
            }
        }
    }

    /// Blocks until the in-flight search settles and maps the result onto
    /// a core message.
    pub fn wait_for_settlement(&self) -> Msg {
        loop {
            match self.engine.recv() {
                Some(EngineEvent::SearchCompleted { result }) => return settlement_msg(result),
                Some(EngineEvent::ProbeCompleted { .. }) => continue,
                None => {
                    return Msg::SearchFailed {
                        message: "engine stopped".to_string(),
                    }
                }
            }
        }
    }

    /// Probes every configured endpoint and blocks for the verdicts.
    pub fn probe(&self) -> Vec<EndpointHealth> {
        self.engine.probe();
        loop {
            match self.engine.recv() {
                Some(EngineEvent::ProbeCompleted { statuses }) => return statuses,
                Some(EngineEvent::SearchCompleted { .. }) => continue,
                None => return Vec::new(),
            }
        }
    }
}

fn settlement_msg(result: Result<SearchOutcome, SearchError>) -> Msg {
    match result {
        Ok(outcome) => Msg::SearchCompleted {
            path: outcome.path,
            nodes_explored: outcome.nodes_explored,
        },
        Err(err) => {
            finder_warn!("search failed: {}", err);
            Msg::SearchFailed {
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikipath_engine::FailureKind;

    #[test]
    fn successful_outcome_maps_to_completion() {
        let msg = settlement_msg(Ok(SearchOutcome {
            path: vec!["a".to_string()],
            nodes_explored: Some(3),
        }));
        assert_eq!(
            msg,
            Msg::SearchCompleted {
                path: vec!["a".to_string()],
                nodes_explored: Some(3),
            }
        );
    }

    #[test]
    fn error_maps_to_failure_with_diagnostic_text() {
        let msg = settlement_msg(Err(SearchError {
            kind: FailureKind::Timeout,
            message: "deadline elapsed".to_string(),
        }));
        match msg {
            Msg::SearchFailed { message } => assert!(message.contains("timeout")),
            other => panic!("unexpected message {other:?}"),
        }
    }
}
