//! qf-core: stable foundation for qflow.
//!
//! Contains:
//! - ids (stable compact IDs for graph nodes, ordered node sets)
//! - io (quantum/classical input and output channels)
//! - error (shared error taxonomy)

pub mod error;
pub mod ids;
pub mod io;

// Re-exports: nice ergonomics for downstream crates
pub use error::{QfError, QfResult};
pub use ids::*;
pub use io::IoType;
