//! Graph validation logic.

use std::collections::HashSet;

use qf_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, Node};

/// Node IDs must be contiguous and labels unique.
pub(crate) fn validate_nodes(nodes: &[Node]) -> GraphResult<()> {
    let mut names: HashSet<&str> = HashSet::new();
    for (i, node) in nodes.iter().enumerate() {
        if node.id.slot() != i {
            return Err(GraphError::InconsistentAdjacency { node: node.id });
        }
        if !names.insert(node.name.as_str()) {
            return Err(GraphError::DuplicateName {
                name: node.name.clone(),
            });
        }
    }
    Ok(())
}

/// Check raw edges and return them normalized and sorted.
///
/// A simple graph: endpoints must exist, no self-loops, no repeated edges.
pub(crate) fn validate_edges(nodes: &[Node], raw: &[(NodeId, NodeId)]) -> GraphResult<Vec<Edge>> {
    let mut seen: HashSet<Edge> = HashSet::with_capacity(raw.len());
    let mut edges = Vec::with_capacity(raw.len());

    for &(x, y) in raw {
        for endpoint in [x, y] {
            if endpoint.slot() >= nodes.len() {
                return Err(GraphError::UnknownNode { node: endpoint });
            }
        }
        if x == y {
            return Err(GraphError::SelfLoop { node: x });
        }
        let edge = Edge::new(x, y);
        if !seen.insert(edge) {
            return Err(GraphError::DuplicateEdge {
                a: edge.a,
                b: edge.b,
            });
        }
        edges.push(edge);
    }

    edges.sort();
    Ok(edges)
}

/// Validate adjacency lists against the edge list.
pub(crate) fn validate_adjacency(
    nodes: &[Node],
    edges: &[Edge],
    offsets: &[usize],
    adjacency: &[NodeId],
) -> GraphResult<()> {
    if offsets.len() != nodes.len() + 1 || adjacency.len() != edges.len() * 2 {
        return Err(GraphError::InconsistentAdjacency {
            node: nodes.first().map_or(NodeId::from_index(0), |n| n.id),
        });
    }

    for node in nodes {
        let idx = node.id.slot();
        let neighbors = &adjacency[offsets[idx]..offsets[idx + 1]];
        for &nb in neighbors {
            if edges.binary_search(&Edge::new(node.id, nb)).is_err() {
                return Err(GraphError::InconsistentAdjacency { node: node.id });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qf_core::Id;

    fn nodes(n: u32) -> Vec<Node> {
        (0..n)
            .map(|i| Node {
                id: Id::from_index(i),
                name: format!("N{i}"),
            })
            .collect()
    }

    #[test]
    fn validate_empty_graph() {
        assert!(validate_nodes(&[]).is_ok());
        assert!(validate_edges(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn validate_unknown_endpoint() {
        let result = validate_edges(&nodes(2), &[(Id::from_index(0), Id::from_index(99))]);
        assert_eq!(
            result.unwrap_err(),
            GraphError::UnknownNode {
                node: Id::from_index(99)
            }
        );
    }

    #[test]
    fn validate_self_loop() {
        let result = validate_edges(&nodes(2), &[(Id::from_index(1), Id::from_index(1))]);
        assert!(matches!(result, Err(GraphError::SelfLoop { .. })));
    }

    #[test]
    fn validate_duplicate_edge_either_orientation() {
        let raw = [
            (Id::from_index(0), Id::from_index(1)),
            (Id::from_index(1), Id::from_index(0)),
        ];
        let result = validate_edges(&nodes(2), &raw);
        assert!(matches!(result, Err(GraphError::DuplicateEdge { .. })));
    }

    #[test]
    fn validate_adjacency_detects_stray_neighbor() {
        let ns = nodes(3);
        let edges = vec![Edge::new(Id::from_index(0), Id::from_index(1))];
        let offsets = vec![0, 1, 2, 2];
        let adjacency = vec![Id::from_index(2), Id::from_index(0)];
        let result = validate_adjacency(&ns, &edges, &offsets, &adjacency);
        assert_eq!(
            result.unwrap_err(),
            GraphError::InconsistentAdjacency {
                node: Id::from_index(0)
            }
        );
    }
}
