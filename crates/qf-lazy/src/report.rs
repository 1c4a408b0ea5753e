//! Serializable summary of a schedule for plotting and reporting tools.
//!
//! Nodes appear by label, not by id, so the report stands on its own.

use qf_core::{IoType, NodeId};
use qf_graph::ResourceGraph;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleResult;
use crate::scheduler::LazyScheduler;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    /// `(i, f(i))` for every non-output i.
    pub flow: Vec<(String, String)>,
    /// Partial-order classes, earliest first.
    pub classes: Vec<Vec<String>>,
    pub input_type: IoType,
    pub output_type: IoType,
    /// Nodes in measurement order, if an order is set.
    pub total_order: Option<Vec<String>>,
    /// Peak live qubits under `total_order`.
    pub qubit_bound: Option<usize>,
}

impl ScheduleReport {
    pub fn from_scheduler(scheduler: &LazyScheduler) -> ScheduleResult<Self> {
        let open = scheduler.open_graph();
        let graph = open.graph();
        let label = |n: NodeId| label_of(graph, n);

        let (total_order, qubit_bound) = match scheduler.total_order() {
            Some(order) => (
                Some(labels_of(graph, order.sequence().iter().copied())),
                Some(scheduler.physical_qubit_bound()?),
            ),
            None => (None, None),
        };

        Ok(Self {
            nodes: labels_of(graph, graph.node_ids()),
            edges: graph
                .edges()
                .iter()
                .map(|e| (label(e.a), label(e.b)))
                .collect(),
            inputs: labels_of(graph, open.inputs().iter().copied()),
            outputs: labels_of(graph, open.outputs().iter().copied()),
            flow: open
                .flow()
                .map()
                .iter()
                .map(|(&i, &fi)| (label(i), label(fi)))
                .collect(),
            classes: open
                .classes()
                .iter()
                .map(|class| labels_of(graph, class.iter().copied()))
                .collect(),
            input_type: scheduler.input_type(),
            output_type: scheduler.output_type(),
            total_order,
            qubit_bound,
        })
    }
}

fn label_of(graph: &ResourceGraph, node: NodeId) -> String {
    graph
        .node(node)
        .map(|n| n.name.clone())
        .unwrap_or_else(|| node.to_string())
}

fn labels_of(graph: &ResourceGraph, nodes: impl Iterator<Item = NodeId>) -> Vec<String> {
    nodes.map(|n| label_of(graph, n)).collect()
}
