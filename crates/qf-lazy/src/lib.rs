//! Lazy scheduling of one-way computations.
//!
//! Given an open graph with causal flow, a [`LazyScheduler`] fixes a total
//! order of measurements that respects the flow's partial order, and
//! simulates which qubits must be allocated at each step. Qubits are
//! prepared as late as possible ("lazily"): only when a measured node's
//! neighborhood first touches them. The peak number of simultaneously live
//! qubits bounds the physical qubits the computation needs.
//!
//! [`Verifier`] checks the allocation against three structural lemmas.

pub mod error;
pub mod liveness;
pub mod order;
pub mod report;
pub mod scheduler;
pub mod seed;
pub mod verifier;

pub use error::{ScheduleError, ScheduleResult};
pub use liveness::{QubitBound, SamplingConfig};
pub use order::TotalOrder;
pub use report::ScheduleReport;
pub use scheduler::LazyScheduler;
pub use verifier::{LemmaOutcome, LemmaReport, Verifier};
