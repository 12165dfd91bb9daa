//! Wikipath engine: HTTP search backend, endpoint failover, and response
//! decoding.
mod client;
mod decode;
mod engine;
mod failover;
mod types;

pub use client::{ClientSettings, HttpSearchBackend, SearchBackend};
pub use decode::{decode_search_body, DecodeError};
pub use engine::{EngineHandle, SearchConfig};
pub use failover::{probe_endpoints, run_failover};
pub use types::{
    EndpointHealth, EngineEvent, FailureKind, SearchError, SearchOutcome, SearchRequest,
};
