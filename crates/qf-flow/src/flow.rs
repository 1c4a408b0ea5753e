//! The causal flow of an open graph.

use std::collections::BTreeMap;

use qf_core::{NodeId, NodeSet};

/// A flow map together with the partial-order classes it induces.
///
/// Classes are listed earliest first. When produced by the solver, the
/// outputs form the last class and every node belongs to exactly one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CausalFlow {
    map: BTreeMap<NodeId, NodeId>,
    classes: Vec<NodeSet>,
    class_of: BTreeMap<NodeId, usize>,
}

impl CausalFlow {
    /// Assemble a flow from a map and its classes.
    ///
    /// No validation happens here; see [`crate::check_flow`].
    pub fn from_parts(map: BTreeMap<NodeId, NodeId>, classes: Vec<NodeSet>) -> Self {
        let mut class_of = BTreeMap::new();
        for (k, class) in classes.iter().enumerate() {
            for &node in class {
                class_of.entry(node).or_insert(k);
            }
        }
        Self {
            map,
            classes,
            class_of,
        }
    }

    /// The correction map f: non-outputs -> non-inputs.
    pub fn map(&self) -> &BTreeMap<NodeId, NodeId> {
        &self.map
    }

    /// f(node), if `node` is in the domain.
    pub fn target(&self, node: NodeId) -> Option<NodeId> {
        self.map.get(&node).copied()
    }

    /// The node whose correction is `node`, if any.
    pub fn source(&self, node: NodeId) -> Option<NodeId> {
        self.map
            .iter()
            .find_map(|(&from, &to)| (to == node).then_some(from))
    }

    pub fn classes(&self) -> &[NodeSet] {
        &self.classes
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Index of the class holding `node`.
    pub fn class_of(&self, node: NodeId) -> Option<usize> {
        self.class_of.get(&node).copied()
    }

    /// Flow map is empty: every node is an output.
    pub fn is_trivial(&self) -> bool {
        self.map.is_empty()
    }
}
