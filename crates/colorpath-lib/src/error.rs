use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the colorpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which end of a route a station name was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    Root,
    Goal,
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            EndpointRole::Root => "root",
            EndpointRole::Goal => "goal",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Network description could not be located at the resolved path.
    #[error("network graph not found at {path}")]
    NetworkNotFound { path: PathBuf },

    /// An edge references a station that is not part of the network.
    #[error("station {node} has an edge to unknown station {target}")]
    GraphFormat { node: String, target: String },

    /// Raised when a root or goal name could not be found in the network.
    #[error("{role} node {name} not found in graph{}", format_suggestions(.suggestions))]
    NodeNotFound {
        role: EndpointRole,
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when the goal cannot be reached from the root.
    #[error("no path found between {root} and {goal}")]
    NoPath { root: String, goal: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding errors.
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
