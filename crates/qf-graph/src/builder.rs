//! Incremental graph builder.

use std::collections::HashMap;
use std::fmt::Display;

use qf_core::NodeId;

use crate::error::GraphResult;
use crate::graph::{Edge, Node, ResourceGraph};
use crate::validate;

/// Builder for constructing a resource graph incrementally.
///
/// Use `add_node` and `add_edge` to build up the graph, then call `build()`
/// to validate and freeze it into an immutable `ResourceGraph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<(NodeId, NodeId)>,
    by_name: HashMap<String, NodeId>,
    next_node_id: u32,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph and return its ID.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId::from_index(self.next_node_id);
        self.next_node_id += 1;
        let name = name.into();
        self.by_name.entry(name.clone()).or_insert(id);
        self.nodes.push(Node { id, name });
        id
    }

    /// Add one node per label, returning their IDs in the same order.
    pub fn add_nodes<I, S>(&mut self, names: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(|name| self.add_node(name)).collect()
    }

    /// Return the node with this label, adding it first if needed.
    pub fn node_or_insert(&mut self, name: impl Into<String>) -> NodeId {
        let name = name.into();
        match self.by_name.get(&name) {
            Some(&id) => id,
            None => self.add_node(name),
        }
    }

    /// Connect two nodes. Self-loops and repeats are rejected by `build()`.
    pub fn add_edge(&mut self, x: NodeId, y: NodeId) -> &mut Self {
        self.edges.push((x, y));
        self
    }

    /// Connect two nodes by label, creating either endpoint on first mention.
    pub fn add_labeled_edge(&mut self, x: impl Display, y: impl Display) -> &mut Self {
        let x = self.node_or_insert(x.to_string());
        let y = self.node_or_insert(y.to_string());
        self.add_edge(x, y)
    }

    /// Build a graph from labeled edges; nodes appear in order of first mention.
    pub fn from_labeled_edges<L, I>(edges: I) -> GraphResult<ResourceGraph>
    where
        L: Display,
        I: IntoIterator<Item = (L, L)>,
    {
        let mut builder = Self::new();
        for (x, y) in edges {
            builder.add_labeled_edge(x, y);
        }
        builder.build()
    }

    /// Build and validate the graph, returning an immutable `ResourceGraph`.
    ///
    /// This performs validation and constructs compact adjacency lists.
    pub fn build(self) -> GraphResult<ResourceGraph> {
        validate::validate_nodes(&self.nodes)?;
        let edges = validate::validate_edges(&self.nodes, &self.edges)?;

        let (adjacency_offsets, adjacency) = Self::build_adjacency(&self.nodes, &edges);

        validate::validate_adjacency(&self.nodes, &edges, &adjacency_offsets, &adjacency)?;

        Ok(ResourceGraph {
            nodes: self.nodes,
            edges,
            adjacency_offsets,
            adjacency,
        })
    }

    /// Build compact adjacency lists: for each node, its sorted neighbors.
    fn build_adjacency(nodes: &[Node], edges: &[Edge]) -> (Vec<usize>, Vec<NodeId>) {
        let mut per_node: Vec<Vec<NodeId>> = vec![Vec::new(); nodes.len()];
        for edge in edges {
            per_node[edge.a.slot()].push(edge.b);
            per_node[edge.b.slot()].push(edge.a);
        }

        let mut offsets = Vec::with_capacity(nodes.len() + 1);
        let mut flat = Vec::with_capacity(edges.len() * 2);
        offsets.push(0);

        for mut neighbors in per_node {
            neighbors.sort();
            flat.extend_from_slice(&neighbors);
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}
