//! Open graphs: resource graphs with inputs, outputs and a causal flow.

use std::fmt;

use qf_core::{NodeId, NodeSet};
use qf_graph::{Edge, ResourceGraph};
use tracing::debug;

use crate::error::{FlowError, FlowResult};
use crate::flow::CausalFlow;
use crate::solver::find_flow;

/// Role tags of a node. A node may be both input and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeKinds {
    pub input: bool,
    pub output: bool,
}

impl NodeKinds {
    /// Neither input nor output.
    pub fn is_auxiliary(self) -> bool {
        !self.input && !self.output
    }
}

impl fmt::Display for NodeKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.input, self.output) {
            (true, true) => f.write_str("input+output"),
            (true, false) => f.write_str("input"),
            (false, true) => f.write_str("output"),
            (false, false) => f.write_str("auxiliary"),
        }
    }
}

/// Everything derived about a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRecord {
    pub kinds: NodeKinds,
    /// f(node); `None` exactly for outputs.
    pub flow: Option<NodeId>,
    /// Partial-order class index.
    pub class: usize,
}

/// Edges split for drawing: flow arcs `(i, f(i))` and the remaining edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowArcs {
    pub arcs: Vec<(NodeId, NodeId)>,
    pub plain: Vec<Edge>,
}

/// An open graph (G, I, O) that has a causal flow.
///
/// Construction runs the flow search once; a graph without flow cannot be
/// represented. The graph, the I/O sets and the flow never change afterwards.
#[derive(Debug, Clone)]
pub struct OpenGraph {
    graph: ResourceGraph,
    inputs: NodeSet,
    outputs: NodeSet,
    records: Vec<NodeRecord>,
    flow: CausalFlow,
}

impl OpenGraph {
    /// Build the open graph and find its flow.
    ///
    /// Fails with `InvalidOpenGraph` for an empty graph or I/O nodes outside
    /// it, `NotFound` when no flow exists, `Invariant` if the search is wrong.
    pub fn new(graph: ResourceGraph, inputs: NodeSet, outputs: NodeSet) -> FlowResult<Self> {
        if graph.is_empty() {
            return Err(FlowError::InvalidOpenGraph {
                what: "graph has no nodes".into(),
            });
        }

        let flow = find_flow(&graph, &inputs, &outputs)?;

        let records = graph
            .node_ids()
            .map(|node| {
                // check_flow guarantees every node has a class
                let class = flow.class_of(node).unwrap_or_default();
                NodeRecord {
                    kinds: NodeKinds {
                        input: inputs.contains(&node),
                        output: outputs.contains(&node),
                    },
                    flow: flow.target(node),
                    class,
                }
            })
            .collect();

        debug!(
            nodes = graph.node_count(),
            inputs = inputs.len(),
            outputs = outputs.len(),
            "open graph ready"
        );

        Ok(Self {
            graph,
            inputs,
            outputs,
            records,
            flow,
        })
    }

    /// Build the open graph with inputs and outputs given by node label.
    pub fn with_labels<I, O, S, T>(graph: ResourceGraph, inputs: I, outputs: O) -> FlowResult<Self>
    where
        I: IntoIterator<Item = S>,
        O: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let inputs = graph.node_set_by_names(inputs)?;
        let outputs = graph.node_set_by_names(outputs)?;
        Self::new(graph, inputs, outputs)
    }

    pub fn graph(&self) -> &ResourceGraph {
        &self.graph
    }

    pub fn inputs(&self) -> &NodeSet {
        &self.inputs
    }

    pub fn outputs(&self) -> &NodeSet {
        &self.outputs
    }

    /// Nodes that are neither input nor output.
    pub fn auxiliary(&self) -> NodeSet {
        self.records
            .iter()
            .zip(self.graph.node_ids())
            .filter(|(r, _)| r.kinds.is_auxiliary())
            .map(|(_, n)| n)
            .collect()
    }

    /// Nodes outside the output set, i.e. the domain of the flow.
    pub fn non_outputs(&self) -> NodeSet {
        self.graph
            .node_ids()
            .filter(|n| !self.outputs.contains(n))
            .collect()
    }

    pub fn flow(&self) -> &CausalFlow {
        &self.flow
    }

    pub fn flow_target(&self, node: NodeId) -> Option<NodeId> {
        self.record(node).and_then(|r| r.flow)
    }

    /// Partial-order classes, earliest first; the outputs are last.
    pub fn classes(&self) -> &[NodeSet] {
        self.flow.classes()
    }

    pub fn class_of(&self, node: NodeId) -> Option<usize> {
        self.record(node).map(|r| r.class)
    }

    pub fn node_kinds(&self, node: NodeId) -> Option<NodeKinds> {
        self.record(node).map(|r| r.kinds)
    }

    pub fn record(&self, node: NodeId) -> Option<&NodeRecord> {
        self.records.get(node.slot())
    }

    pub fn flow_arcs(&self) -> FlowArcs {
        let arcs: Vec<(NodeId, NodeId)> = self.flow.map().iter().map(|(&i, &f)| (i, f)).collect();
        let plain = self
            .graph
            .edges()
            .iter()
            .filter(|e| !arcs.iter().any(|&(i, f)| **e == Edge::new(i, f)))
            .copied()
            .collect();
        FlowArcs { arcs, plain }
    }
}
