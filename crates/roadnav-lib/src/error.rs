use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the road navigation library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The query API (`Router::find_route`, `PrefixIndex::search`,
/// `PrefixIndex::node_id`) never surfaces these; it reports misses through empty
/// results. The fallible twins (`Router::plan_route`, `PrefixIndex::resolve`)
/// return them so callers can tell the failure modes apart.
#[derive(Debug, Error)]
pub enum Error {
    /// A start or goal id has no entry in the adjacency mapping.
    #[error("unknown node id: {id}")]
    UnknownNode { id: NodeId },

    /// Both ids are known but no sequence of edges connects them.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: NodeId, goal: NodeId },

    /// Raised when a place name could not be resolved to a node.
    #[error("unknown place name: {name}{}", format_suggestions(.suggestions))]
    UnknownPlace {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a search or lookup was attempted with empty text.
    #[error("search text was empty")]
    EmptyQuery,

    /// Raised when a summary is requested for a route without any steps.
    #[error("route was empty")]
    EmptyRoutePlan,

    /// Wrapper for JSON encoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
