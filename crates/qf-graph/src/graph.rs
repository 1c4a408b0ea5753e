//! Core graph data structures.

use qf_core::{NodeId, NodeSet};

use crate::error::{GraphError, GraphResult};

/// A node of the resource graph.
///
/// Nodes are minimal: an ID and a label for human reference. Everything
/// else (input/output tags, flow target, order) is derived by higher layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
}

/// An undirected edge, stored with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    /// Create a normalized edge; endpoint order does not matter.
    pub fn new(x: NodeId, y: NodeId) -> Self {
        if x <= y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// The endpoint opposite `node`, if `node` is an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.a == node {
            Some(self.b)
        } else if self.b == node {
            Some(self.a)
        } else {
            None
        }
    }
}

/// The graph: a validated, immutable simple undirected graph.
///
/// The graph stores:
/// - All nodes in a vector (indexed by their IDs).
/// - Every edge once, normalized and sorted.
/// - Compact adjacency: for each node, its neighbors in ascending order.
#[derive(Debug, Clone)]
pub struct ResourceGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,

    /// Offsets for node->neighbor adjacency: node i's neighbors are in
    /// adjacency[adjacency_offsets[i]..adjacency_offsets[i+1]].
    pub(crate) adjacency_offsets: Vec<usize>,

    /// Flat neighbor list, sorted per node.
    pub(crate) adjacency: Vec<NodeId>,
}

impl ResourceGraph {
    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all edges, each undirected edge once.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.slot() < self.nodes.len()
    }

    /// Iterate over all node IDs in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|n| n.id)
    }

    /// Every node of the graph as a set.
    pub fn node_set(&self) -> NodeSet {
        self.node_ids().collect()
    }

    /// Look up a node by its label.
    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.name == name).map(|n| n.id)
    }

    /// Resolve a list of labels into a node set.
    pub fn node_set_by_names<I, S>(&self, names: I) -> GraphResult<NodeSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                self.node_by_name(name)
                    .ok_or_else(|| GraphError::UnknownName {
                        name: name.to_string(),
                    })
            })
            .collect()
    }

    /// Neighbors of a node, ascending. Empty for unknown IDs.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        let idx = id.slot();
        if idx >= self.nodes.len() {
            return &[];
        }
        let start = self.adjacency_offsets[idx];
        let end = self.adjacency_offsets[idx + 1];
        &self.adjacency[start..end]
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    pub fn has_edge(&self, x: NodeId, y: NodeId) -> bool {
        self.neighbors(x).binary_search(&y).is_ok()
    }

    /// N(v): the neighbors of `v`, without `v` itself.
    pub fn open_neighborhood(&self, id: NodeId) -> NodeSet {
        self.neighbors(id).iter().copied().collect()
    }

    /// N[v]: the neighbors of `v` together with `v`.
    pub fn closed_neighborhood(&self, id: NodeId) -> NodeSet {
        let mut set = self.open_neighborhood(id);
        if self.contains(id) {
            set.insert(id);
        }
        set
    }

    /// Edges of the subgraph induced on `subset`, sorted.
    pub fn induced_edges(&self, subset: &NodeSet) -> Vec<Edge> {
        let mut edges = Vec::new();
        for &node in subset {
            for &nb in self.neighbors(node) {
                if node < nb && subset.contains(&nb) {
                    edges.push(Edge::new(node, nb));
                }
            }
        }
        edges.sort();
        edges
    }
}
