//! The conditions a causal flow must satisfy.
//!
//! With `class(v)` the partial-order class of `v`, for every non-output `i`:
//! - F0: `i` is adjacent to `f(i)`
//! - F1: `class(i) < class(f(i))`
//! - F2: every neighbor `j != i` of `f(i)` has `class(j) >= class(i)`
//! - F3: `f(i)` is not an input
//!
//! On top of those, the map must be defined on exactly the non-outputs, no
//! node may be the target of two others, and the classes must partition the
//! nodes with the outputs last.

use std::fmt;

use qf_core::{NodeId, NodeSet};
use qf_graph::ResourceGraph;

use crate::flow::CausalFlow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowCondition {
    /// Classes partition the nodes and end with the outputs.
    Partition,
    /// The map is defined on exactly the non-output nodes.
    Totality,
    /// No two nodes share a flow target.
    Injectivity,
    F0,
    F1,
    F2,
    F3,
}

impl fmt::Display for FlowCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlowCondition::Partition => "partition",
            FlowCondition::Totality => "totality",
            FlowCondition::Injectivity => "injectivity",
            FlowCondition::F0 => "F0 (adjacency)",
            FlowCondition::F1 => "F1 (monotonicity)",
            FlowCondition::F2 => "F2 (no interference)",
            FlowCondition::F3 => "F3 (inputs never corrected)",
        };
        f.write_str(s)
    }
}

/// First condition found violated, and the node it was found at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowViolation {
    pub condition: FlowCondition,
    pub node: NodeId,
}

impl fmt::Display for FlowViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fails at node {}", self.condition, self.node)
    }
}

/// Check `flow` against every flow condition on the open graph (G, I, O).
pub fn check_flow(
    graph: &ResourceGraph,
    inputs: &NodeSet,
    outputs: &NodeSet,
    flow: &CausalFlow,
) -> Result<(), FlowViolation> {
    check_partition(graph, outputs, flow)?;
    check_totality(graph, outputs, flow)?;

    let mut targets = NodeSet::new();
    for (&i, &fi) in flow.map() {
        let violation = |condition| FlowViolation { condition, node: i };

        if !targets.insert(fi) {
            return Err(violation(FlowCondition::Injectivity));
        }

        if !graph.has_edge(i, fi) {
            return Err(violation(FlowCondition::F0));
        }

        let class_i = class(flow, i)?;
        if class_i >= class(flow, fi)? {
            return Err(violation(FlowCondition::F1));
        }

        for &j in graph.neighbors(fi) {
            if j != i && class(flow, j)? < class_i {
                return Err(violation(FlowCondition::F2));
            }
        }

        if inputs.contains(&fi) {
            return Err(violation(FlowCondition::F3));
        }
    }

    Ok(())
}

fn class(flow: &CausalFlow, node: NodeId) -> Result<usize, FlowViolation> {
    flow.class_of(node).ok_or(FlowViolation {
        condition: FlowCondition::Partition,
        node,
    })
}

fn check_partition(
    graph: &ResourceGraph,
    outputs: &NodeSet,
    flow: &CausalFlow,
) -> Result<(), FlowViolation> {
    let mut seen = NodeSet::new();
    for class in flow.classes() {
        for &node in class {
            if !graph.contains(node) || !seen.insert(node) {
                return Err(FlowViolation {
                    condition: FlowCondition::Partition,
                    node,
                });
            }
        }
    }
    if let Some(node) = graph.node_ids().find(|n| !seen.contains(n)) {
        return Err(FlowViolation {
            condition: FlowCondition::Partition,
            node,
        });
    }

    let empty = NodeSet::new();
    let last = flow.classes().last().unwrap_or(&empty);
    if let Some(&node) = outputs.symmetric_difference(last).next() {
        return Err(FlowViolation {
            condition: FlowCondition::Partition,
            node,
        });
    }
    Ok(())
}

fn check_totality(
    graph: &ResourceGraph,
    outputs: &NodeSet,
    flow: &CausalFlow,
) -> Result<(), FlowViolation> {
    for node in graph.node_ids() {
        let in_domain = flow.target(node).is_some();
        if in_domain == outputs.contains(&node) {
            return Err(FlowViolation {
                condition: FlowCondition::Totality,
                node,
            });
        }
    }
    for &node in flow.map().keys() {
        if !graph.contains(node) {
            return Err(FlowViolation {
                condition: FlowCondition::Totality,
                node,
            });
        }
    }
    Ok(())
}
