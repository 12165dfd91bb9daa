use serde::Deserialize;

use crate::SearchOutcome;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("body matched neither the wrapped nor the bare path shape: {message}")]
    UnrecognizedShape { message: String },
}

/// Wrapped response shape: `{ path, nodesExplored, message? }`.
#[derive(Debug, Deserialize)]
struct WrappedBody {
    path: Option<Vec<String>>,
    #[serde(rename = "nodesExplored")]
    nodes_explored: Option<u64>,
    message: Option<String>,
}

/// Decodes a response body into a search outcome.
///
/// Two shapes are accepted, matching what the service has produced over
/// time: a wrapped object with an explicit `path` field, and a bare JSON
/// array of reference strings. A `message` field in the wrapped shape means
/// "no path found" and forces an empty path regardless of any stray `path`
/// data. `nodesExplored` is carried by presence, so a reported 0 survives
/// as `Some(0)`.
pub fn decode_search_body(body: &[u8]) -> Result<SearchOutcome, DecodeError> {
    // Wrapped shape first. An object carrying neither `message` nor `path`
    // is not a usable wrapper and falls through to the bare shape.
    if let Ok(wrapped) = serde_json::from_slice::<WrappedBody>(body) {
        if wrapped.message.is_some() {
            return Ok(SearchOutcome {
                path: Vec::new(),
                nodes_explored: wrapped.nodes_explored,
            });
        }
        if let Some(path) = wrapped.path {
            return Ok(SearchOutcome {
                path,
                nodes_explored: wrapped.nodes_explored,
            });
        }
    }

    // Bare shape: the body itself is the list of references.
    match serde_json::from_slice::<Vec<String>>(body) {
        Ok(path) => Ok(SearchOutcome {
            path,
            nodes_explored: None,
        }),
        Err(err) => Err(DecodeError::UnrecognizedShape {
            message: err.to_string(),
        }),
    }
}
