//! Error types for flow discovery.

use qf_core::QfError;
use qf_graph::GraphError;
use thiserror::Error;

use crate::criteria::FlowViolation;

/// Errors that can occur while building an open graph or finding its flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Invalid open graph: {what}")]
    InvalidOpenGraph { what: String },

    /// The graph admits no causal flow. Terminal: supply another graph.
    #[error("No causal flow exists ({covered} of {total} nodes covered)")]
    NotFound { covered: usize, total: usize },

    /// A flow was produced but fails its own conditions. This is a solver bug.
    #[error("Flow found but not valid: {0}")]
    Invariant(FlowViolation),
}

pub type FlowResult<T> = Result<T, FlowError>;

impl From<FlowError> for QfError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::Graph(g) => g.into(),
            FlowError::InvalidOpenGraph { what } => QfError::InvalidGraph { what },
            FlowError::NotFound { covered, total } => QfError::FlowNotFound { covered, total },
            FlowError::Invariant(v) => QfError::Invariant {
                what: v.to_string(),
            },
        }
    }
}
