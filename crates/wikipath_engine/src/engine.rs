use std::sync::{mpsc, Arc};
use std::thread;

use wikipath_logging::finder_error;

use crate::client::{ClientSettings, HttpSearchBackend, SearchBackend};
use crate::failover::{probe_endpoints, run_failover};
use crate::{EngineEvent, SearchError, SearchRequest};

/// Endpoint priority order plus transport settings for the engine.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub endpoints: Vec<String>,
    pub client: ClientSettings,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoints: vec![
                "https://wikipediafinder.onrender.com/api/getResults".to_string(),
                "http://localhost:8080/api/getResults".to_string(),
            ],
            client: ClientSettings::default(),
        }
    }
}

enum EngineCommand {
    Search { request: SearchRequest },
    Probe,
}

/// Handle to the engine's background thread. Commands go in over a channel,
/// events come back the same way; the caller polls or blocks on `recv`.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let backend = Arc::new(HttpSearchBackend::new(config.client.clone())?);
        let endpoints = config.endpoints;

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    finder_error!("failed to start engine runtime: {}", err);
                    return;
                }
            };
            // One command at a time: the core refuses re-entrant submits,
            // and endpoint attempts within a search are sequential awaits.
            while let Ok(command) = cmd_rx.recv() {
                runtime.block_on(handle_command(
                    backend.as_ref(),
                    &endpoints,
                    command,
                    &event_tx,
                ));
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn search(&self, request: SearchRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Search { request });
    }

    pub fn probe(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Probe);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event. Returns `None` if the engine thread
    /// has gone away.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(
    backend: &dyn SearchBackend,
    endpoints: &[String],
    command: EngineCommand,
    event_tx: &mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { request } => {
            let result = run_failover(backend, endpoints, &request).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted { result });
        }
        EngineCommand::Probe => {
            let statuses = probe_endpoints(backend, endpoints).await;
            let _ = event_tx.send(EngineEvent::ProbeCompleted { statuses });
        }
    }
}
