//! Error types for scheduling.

use qf_core::QfError;
use qf_flow::FlowError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    /// The order breaks the partial order. The previous order is kept.
    #[error("Total order inconsistent with flow: {what}")]
    OrderingInconsistent { what: String },

    #[error("No total order has been set")]
    MissingTotalOrder,

    #[error("Invalid configuration: {what}")]
    InvalidConfiguration { what: String },

    #[error("Invalid argument: {what}")]
    InvalidArgument { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

impl From<ScheduleError> for QfError {
    fn from(e: ScheduleError) -> Self {
        match e {
            ScheduleError::Flow(f) => f.into(),
            ScheduleError::OrderingInconsistent { what } => QfError::OrderingInconsistent { what },
            ScheduleError::MissingTotalOrder => QfError::MissingTotalOrder,
            ScheduleError::InvalidConfiguration { what } => QfError::InvalidConfiguration { what },
            ScheduleError::InvalidArgument { what } => QfError::InvalidArgument { what },
            ScheduleError::Invariant { what } => QfError::Invariant { what },
        }
    }
}
