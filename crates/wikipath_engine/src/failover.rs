use wikipath_logging::{finder_error, finder_info, finder_warn};

use crate::client::SearchBackend;
use crate::{EndpointHealth, FailureKind, SearchError, SearchOutcome, SearchRequest};

/// Tries each endpoint in priority order, stopping at the first response
/// that arrives without a transport-level error, even a semantically empty
/// one. A failed endpoint is never retried; when every endpoint fails the
/// last error is returned.
pub async fn run_failover(
    backend: &dyn SearchBackend,
    endpoints: &[String],
    request: &SearchRequest,
) -> Result<SearchOutcome, SearchError> {
    let mut last_error = SearchError::new(FailureKind::Network, "no endpoints configured");
    for endpoint in endpoints {
        finder_info!("search attempt endpoint={}", endpoint);
        match backend.search(endpoint, request).await {
            Ok(outcome) => {
                finder_info!(
                    "search settled endpoint={} path_len={} nodes_explored={:?}",
                    endpoint,
                    outcome.path.len(),
                    outcome.nodes_explored
                );
                return Ok(outcome);
            }
            Err(err) => {
                finder_warn!("endpoint failed endpoint={} error={}", endpoint, err);
                last_error = err;
            }
        }
    }
    finder_error!("all {} endpoints failed: {}", endpoints.len(), last_error);
    Err(last_error)
}

/// Probes the health route of every configured endpoint, in order.
pub async fn probe_endpoints(
    backend: &dyn SearchBackend,
    endpoints: &[String],
) -> Vec<EndpointHealth> {
    let mut statuses = Vec::with_capacity(endpoints.len());
    for endpoint in endpoints {
        let healthy = match backend.probe(endpoint).await {
            Ok(()) => true,
            Err(err) => {
                finder_warn!("health probe failed endpoint={} error={}", endpoint, err);
                false
            }
        };
        statuses.push(EndpointHealth {
            endpoint: endpoint.clone(),
            healthy,
        });
    }
    statuses
}
