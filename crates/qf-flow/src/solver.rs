//! Causal-flow discovery (Mhalla & Perdrix, arXiv:0709.2670).
//!
//! Works backwards from the outputs. Each pass looks at the correction
//! frontier: a frontier node with exactly one uncovered neighbor `u` becomes
//! `f(u)`, and `u` is covered. Newly covered non-inputs join the frontier.
//! The search stops when a pass covers nothing; a flow exists iff by then
//! every node is covered.

use std::collections::BTreeMap;

use qf_core::{NodeId, NodeSet};
use qf_graph::ResourceGraph;
use tracing::{debug, warn};

use crate::criteria::check_flow;
use crate::error::{FlowError, FlowResult};
use crate::flow::CausalFlow;

/// Find the causal flow of the open graph (G, I, O).
///
/// Returns `FlowError::NotFound` when the graph has no flow, and
/// `FlowError::Invariant` if the flow found fails [`check_flow`].
///
/// The result is deterministic: the frontier is scanned in ascending id, and
/// when two frontier nodes claim the same neighbor in one pass the first
/// keeps it.
pub fn find_flow(
    graph: &ResourceGraph,
    inputs: &NodeSet,
    outputs: &NodeSet,
) -> FlowResult<CausalFlow> {
    for (what, set) in [("input", inputs), ("output", outputs)] {
        if let Some(node) = set.iter().find(|n| !graph.contains(**n)) {
            return Err(FlowError::InvalidOpenGraph {
                what: format!("{what} node {node} is not in the graph"),
            });
        }
    }

    let mut map: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    let mut covered: NodeSet = outputs.clone();
    let mut frontier: NodeSet = outputs.difference(inputs).copied().collect();
    // Discovery order: passes[0] is closest to the outputs.
    let mut passes: Vec<NodeSet> = Vec::new();

    loop {
        let mut newly = NodeSet::new();
        let mut resolved = NodeSet::new();

        for &v in &frontier {
            let mut uncovered = graph
                .neighbors(v)
                .iter()
                .filter(|&u| !covered.contains(u));
            if let (Some(&u), None) = (uncovered.next(), uncovered.next()) {
                if newly.insert(u) {
                    map.insert(u, v);
                }
                resolved.insert(v);
            }
        }

        debug!(
            pass = passes.len() + 1,
            frontier = frontier.len(),
            covered = newly.len(),
            "flow search pass"
        );

        if newly.is_empty() {
            break;
        }

        covered.extend(newly.iter().copied());
        frontier = frontier
            .difference(&resolved)
            .copied()
            .chain(newly.difference(inputs).copied())
            .collect();
        passes.push(newly);
    }

    if covered.len() != graph.node_count() {
        debug!(
            covered = covered.len(),
            total = graph.node_count(),
            "no causal flow"
        );
        return Err(FlowError::NotFound {
            covered: covered.len(),
            total: graph.node_count(),
        });
    }

    // Logical order runs away from the outputs: flip discovery, outputs last.
    let mut classes: Vec<NodeSet> = passes.into_iter().rev().collect();
    classes.push(outputs.clone());

    let flow = CausalFlow::from_parts(map, classes);
    if let Err(violation) = check_flow(graph, inputs, outputs, &flow) {
        warn!(%violation, "flow search produced an invalid flow");
        return Err(FlowError::Invariant(violation));
    }

    debug!(
        classes = flow.class_count(),
        corrected = flow.map().len(),
        "causal flow found"
    );
    Ok(flow)
}
