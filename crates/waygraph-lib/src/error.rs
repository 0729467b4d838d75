use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the waygraph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Unreachable destinations are not errors; they come back as an empty
/// [`crate::PathResult`].
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a node name could not be found in the current graph.
    #[error("unknown node name: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a node index is outside `[0, node_count)`.
    #[error("node index {index} is out of range for a graph with {count} nodes")]
    NodeIndexOutOfRange { index: usize, count: usize },

    /// Raised when a depth or hop bound of zero is supplied.
    #[error("depth bound must be positive, got {depth}")]
    InvalidDepth { depth: usize },

    /// Raised when a query is issued before any graph has been built.
    #[error("no graph has been built yet")]
    EmptyGraph,

    /// Raised when a result is resolved against a graph rebuilt after it was computed.
    #[error("result was computed on graph generation {computed}, but the current generation is {current}")]
    StaleResult { computed: u64, current: u64 },

    /// Raised when an edge passed to the graph builder is unusable.
    #[error("malformed edge #{index}: {reason}")]
    MalformedEdge { index: usize, reason: String },

    /// Raised when a distance matrix cell cannot be turned into an edge.
    #[error("malformed distance matrix at row {row}, column {column}: {reason}")]
    MalformedMatrix {
        row: usize,
        column: usize,
        reason: String,
    },

    /// Network file could not be located at the resolved path.
    #[error("network data not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for network data")]
    ProjectDirsUnavailable,

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_node_without_suggestions() {
        let err = Error::UnknownNode {
            name: "Nowhere".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown node name: Nowhere");
    }

    #[test]
    fn unknown_node_lists_suggestions() {
        let err = Error::UnknownNode {
            name: "Wuhn".to_string(),
            suggestions: vec!["Wuhan".to_string(), "Wuhu".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown node name: Wuhn. Did you mean one of: 'Wuhan', 'Wuhu'?"
        );
    }
}
