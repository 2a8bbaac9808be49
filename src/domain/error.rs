//! Error types for graph construction and algorithm selection.

use thiserror::Error;

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised by the domain layer.
///
/// Every variant is fatal to the single call that produced it; nothing is
/// clamped or dropped to keep going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// An adjacency entry points outside `0..node_count`
    #[error("node {node} has successor {successor}, but the graph only has {node_count} nodes")]
    SuccessorOutOfRange {
        node: usize,
        successor: usize,
        node_count: usize,
    },

    /// An edge source lies outside `0..node_count`
    #[error("edge source {node} is out of range for a graph of {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },

    /// Declared node count disagrees with the adjacency list
    #[error("graph declares {declared} nodes but has {actual} adjacency rows")]
    NodeCountMismatch { declared: usize, actual: usize },

    /// Selector string names neither algorithm
    #[error("unknown algorithm '{name}' (expected 'tarjan' or 'kosaraju')")]
    UnknownAlgorithm { name: String },

    /// Demo graph index past the end of the catalog
    #[error("demo graph {index} does not exist ({available} available)")]
    UnknownDemoGraph { index: usize, available: usize },
}

impl GraphError {
    pub fn successor_out_of_range(node: usize, successor: usize, node_count: usize) -> Self {
        Self::SuccessorOutOfRange {
            node,
            successor,
            node_count,
        }
    }

    pub fn node_out_of_range(node: usize, node_count: usize) -> Self {
        Self::NodeOutOfRange { node, node_count }
    }

    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_out_of_range_message_names_all_parts() {
        let msg = GraphError::successor_out_of_range(2, 7, 3).to_string();
        assert!(msg.contains("node 2"));
        assert!(msg.contains("successor 7"));
        assert!(msg.contains("3 nodes"));
    }

    #[test]
    fn unknown_algorithm_message_lists_choices() {
        let msg = GraphError::unknown_algorithm("dijkstra").to_string();
        assert!(msg.contains("dijkstra"));
        assert!(msg.contains("tarjan"));
        assert!(msg.contains("kosaraju"));
    }
}
