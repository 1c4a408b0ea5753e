use thiserror::Error;

pub type QfResult<T> = Result<T, QfError>;

/// Every failure a qflow layer can report, by kind.
///
/// Layer-specific errors (`GraphError`, `FlowError`, `ScheduleError`) convert
/// into this so callers that don't care which layer failed can match on kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QfError {
    #[error("Invalid graph: {what}")]
    InvalidGraph { what: String },

    #[error("No causal flow exists ({covered} of {total} nodes covered)")]
    FlowNotFound { covered: usize, total: usize },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },

    #[error("Total order inconsistent with flow: {what}")]
    OrderingInconsistent { what: String },

    #[error("No total order has been set")]
    MissingTotalOrder,

    #[error("Invalid configuration: {what}")]
    InvalidConfiguration { what: String },

    #[error("Invalid argument: {what}")]
    InvalidArgument { what: String },
}

impl QfError {
    /// True for errors that point at a bug in qflow rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, QfError::Invariant { .. })
    }
}
