//! Graph-specific error types.

use qf_core::{NodeId, QfError};

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction, validation and lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge refers to a node that doesn't exist.
    UnknownNode { node: NodeId },

    /// An edge joins a node to itself.
    SelfLoop { node: NodeId },

    /// The same undirected edge was added more than once.
    DuplicateEdge { a: NodeId, b: NodeId },

    /// Two nodes share a label.
    DuplicateName { name: String },

    /// No node carries this label.
    UnknownName { name: String },

    /// Adjacency is inconsistent with the edge list.
    InconsistentAdjacency { node: NodeId },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::UnknownNode { node } => {
                write!(f, "Edge refers to non-existent node {}", node)
            }
            GraphError::SelfLoop { node } => {
                write!(f, "Node {} has a self-loop", node)
            }
            GraphError::DuplicateEdge { a, b } => {
                write!(f, "Edge {}-{} appears more than once", a, b)
            }
            GraphError::DuplicateName { name } => {
                write!(f, "Node label '{}' is used more than once", name)
            }
            GraphError::UnknownName { name } => {
                write!(f, "No node is labelled '{}'", name)
            }
            GraphError::InconsistentAdjacency { node } => {
                write!(f, "Adjacency of node {} disagrees with the edge list", node)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for QfError {
    fn from(err: GraphError) -> Self {
        QfError::InvalidGraph {
            what: err.to_string(),
        }
    }
}
