//! Causal-flow discovery for open graphs.
//!
//! An open graph is a resource graph with designated input and output nodes.
//! This crate finds its causal flow (a correction map from every non-output
//! node to a later neighbor, plus the partial order it induces) using the
//! layer-by-layer search of Mhalla and Perdrix, and checks the result against
//! the flow conditions before handing it out.

pub mod criteria;
pub mod error;
pub mod flow;
pub mod open_graph;
pub mod solver;

pub use criteria::{FlowCondition, FlowViolation, check_flow};
pub use error::{FlowError, FlowResult};
pub use flow::CausalFlow;
pub use open_graph::{FlowArcs, NodeKinds, NodeRecord, OpenGraph};
pub use solver::find_flow;
