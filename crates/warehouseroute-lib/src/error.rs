use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the warehouse routing library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a node id is not present in the graph.
    #[error("unknown node id: {id}")]
    UnknownNode { id: NodeId },

    /// Raised when no node in the graph carries the requested location.
    #[error("no node found for location {location}")]
    NoNodeForLocation { location: String },

    /// Raised when more than one node carries the requested location.
    #[error("location {location} matches {count} nodes")]
    AmbiguousLocation { location: String, count: usize },

    /// Raised when a location label could not be found in the graph.
    #[error("unknown location: {label}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        label: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two locations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route lacks any nodes.
    #[error("route was empty")]
    EmptyRoute,

    /// Raised when a graph file record carries an unrecognized location type tag.
    #[error("unknown location type: {value}")]
    InvalidLocationType { value: i64 },

    /// Raised when a graph file record omits a field its location type requires.
    #[error("missing field {field} for location type {location_type}")]
    MissingLocationField {
        field: &'static str,
        location_type: &'static str,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
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
