//! qf-graph: resource graph layer for qflow.
//!
//! Provides:
//! - A simple undirected graph with stable, contiguous node ids
//! - Incremental graph builder with validation
//! - Neighborhood and induced-subgraph queries
//!
//! # Example
//!
//! ```
//! use qf_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_node("a");
//! let b = builder.add_node("b");
//! builder.add_edge(a, b);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.nodes().len(), 2);
//! assert!(graph.has_edge(b, a));
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Node, ResourceGraph};
