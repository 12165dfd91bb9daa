use std::fmt;

/// The pair of canonical article references a search runs between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub starting: String,
    pub ending: String,
}

/// Decoded result of one accepted endpoint response.
///
/// An empty `path` means the server reported no path. `nodes_explored` is
/// `None` when the response carried no explored-count field; a reported
/// count of 0 stays `Some(0)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Vec<String>,
    pub nodes_explored: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The full failover sequence settled, successfully or not.
    SearchCompleted {
        result: Result<SearchOutcome, SearchError>,
    },
    /// Health probe of every configured endpoint finished.
    ProbeCompleted { statuses: Vec<EndpointHealth> },
}

/// Health-check verdict for one configured endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointHealth {
    pub endpoint: String,
    pub healthy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchError {
    pub kind: FailureKind,
    pub message: String,
}

impl SearchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    MalformedBody,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::MalformedBody => write!(f, "malformed response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
