//! Plain-text rendering of the view model.

use wikipath_core::{AppViewModel, SERVER_NODE_CAP};
use wikipath_engine::EndpointHealth;
use wikipath_logging::finder_error;

pub fn banner() {
    println!("Wikipedia Path Finder");
    println!("Discover the shortest path between Wikipedia articles.");
    println!(
        "The server explores the link graph breadth-first, capped at {SERVER_NODE_CAP} nodes."
    );
    println!();
}

pub fn in_flight() {
    println!("Exploring Wikipedia using BFS...");
}

/// Renders a settled search. A total endpoint failure renders like an empty
/// result; the distinction stays in the log.
pub fn results(view: &AppViewModel) {
    if let Some(failure) = &view.failure {
        finder_error!("search settled with failure: {}", failure);
    }
    if view.nodes_explored > 0 {
        println!(
            "BFS explored {} nodes to find this path",
            view.nodes_explored
        );
    }
    if view.steps.is_empty() {
        println!("No path found.");
        return;
    }
    println!("Path results:");
    for step in &view.steps {
        println!("  {}. {} <{}>", step.ordinal, step.title, step.target);
    }
}

pub fn endpoint_health(statuses: &[EndpointHealth]) {
    for status in statuses {
        let verdict = if status.healthy { "ok" } else { "unreachable" };
        println!("{:12} {}", verdict, status.endpoint);
    }
}
