//! The lazy scheduler: a total order plus qubit allocation on an open graph.

use qf_core::{IoType, NodeId, NodeSet};
use qf_flow::OpenGraph;
use qf_graph::{Edge, ResourceGraph};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::error::{ScheduleError, ScheduleResult};
use crate::liveness::{self, QubitBound, SamplingConfig};
use crate::order::{TotalOrder, random_assignment};
use crate::seed;

/// An open graph with I/O types and, once set, a total measurement order.
///
/// Cloning gives an independent scheduler; concurrent samplers each work on
/// their own clone so no two share a total order.
#[derive(Debug, Clone)]
pub struct LazyScheduler {
    open: OpenGraph,
    input_type: IoType,
    output_type: IoType,
    order: Option<TotalOrder>,
}

impl LazyScheduler {
    /// Wrap an open graph. Both I/O types start out quantum; no order is set.
    pub fn new(open: OpenGraph) -> Self {
        Self {
            open,
            input_type: IoType::Quantum,
            output_type: IoType::Quantum,
            order: None,
        }
    }

    pub fn open_graph(&self) -> &OpenGraph {
        &self.open
    }

    pub fn graph(&self) -> &ResourceGraph {
        self.open.graph()
    }

    pub fn input_type(&self) -> IoType {
        self.input_type
    }

    pub fn output_type(&self) -> IoType {
        self.output_type
    }

    pub fn set_io_type(&mut self, input_type: IoType, output_type: IoType) {
        self.input_type = input_type;
        self.output_type = output_type;
    }

    /// Set the I/O types from their names, `"quantum"` or `"classical"`.
    ///
    /// On error neither type changes.
    pub fn set_io_type_str(&mut self, input_type: &str, output_type: &str) -> ScheduleResult<()> {
        let parse = |s: &str| {
            s.parse::<IoType>()
                .map_err(|e| ScheduleError::InvalidConfiguration { what: e.to_string() })
        };
        let (input_type, output_type) = (parse(input_type)?, parse(output_type)?);
        self.set_io_type(input_type, output_type);
        Ok(())
    }

    /// Apply a node -> index assignment as the total order.
    ///
    /// All or nothing: if the assignment is rejected the previous order, if
    /// any, stays in place.
    pub fn set_total_order<I>(&mut self, assignment: I) -> ScheduleResult<()>
    where
        I: IntoIterator<Item = (NodeId, usize)>,
    {
        let order =
            TotalOrder::from_assignment(self.graph().node_count(), self.open.classes(), assignment)
                .inspect_err(|e| warn!(error = %e, "total order rejected"))?;
        debug!(nodes = order.len(), "total order set");
        self.order = Some(order);
        Ok(())
    }

    /// Draw a total order from `rng`, shuffling only within classes.
    pub fn set_total_order_with_rng<R>(&mut self, rng: &mut R) -> ScheduleResult<()>
    where
        R: Rng + ?Sized,
    {
        let assignment = random_assignment(self.open.classes(), rng);
        self.set_total_order(assignment)
    }

    /// Draw a total order from `seed`, or from [`LazyScheduler::default_seed`].
    ///
    /// Returns the seed used; the same seed always gives the same order.
    pub fn set_total_order_random(&mut self, seed: Option<u64>) -> ScheduleResult<u64> {
        let seed = seed.unwrap_or_else(|| self.default_seed());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.set_total_order_with_rng(&mut rng)?;
        Ok(seed)
    }

    /// Seed from time, this instance's address and the process id.
    pub fn default_seed(&self) -> u64 {
        seed::default_seed(self)
    }

    pub fn total_order(&self) -> Option<&TotalOrder> {
        self.order.as_ref()
    }

    pub(crate) fn require_order(&self) -> ScheduleResult<&TotalOrder> {
        self.order.as_ref().ok_or(ScheduleError::MissingTotalOrder)
    }

    pub fn nodes_sorted_by_total_order(&self) -> ScheduleResult<&[NodeId]> {
        Ok(self.require_order()?.sequence())
    }

    /// Index assigned to `node` by the current total order.
    pub fn position(&self, node: NodeId) -> ScheduleResult<usize> {
        self.require_node(node)?;
        self.require_order()?
            .index(node)
            .ok_or(ScheduleError::MissingTotalOrder)
    }

    fn require_node(&self, node: NodeId) -> ScheduleResult<()> {
        if self.graph().contains(node) {
            Ok(())
        } else {
            Err(ScheduleError::InvalidArgument {
                what: format!("node {node} is not in the graph"),
            })
        }
    }

    /// N(i)
    pub fn open_neighborhood(&self, node: NodeId) -> ScheduleResult<NodeSet> {
        self.require_node(node)?;
        Ok(self.graph().open_neighborhood(node))
    }

    /// N[i]
    pub fn closed_neighborhood(&self, node: NodeId) -> ScheduleResult<NodeSet> {
        self.require_node(node)?;
        Ok(self.graph().closed_neighborhood(node))
    }

    /// A(i): qubits first needed when `node` is measured.
    ///
    /// N[i] minus every N[j] for j before i, minus the inputs when the input
    /// is quantum (those are allocated up front).
    pub fn newly_required(&self, node: NodeId) -> ScheduleResult<NodeSet> {
        self.require_node(node)?;
        let order = self.require_order()?;

        let mut fresh = self.graph().closed_neighborhood(node);
        if self.input_type.is_quantum() {
            fresh.retain(|n| !self.open.inputs().contains(n));
        }
        for &earlier in order.sequence() {
            if earlier == node {
                break;
            }
            for n in self.graph().closed_neighborhood(earlier) {
                fresh.remove(&n);
            }
        }
        Ok(fresh)
    }

    /// A(i) for every node, in total order.
    pub fn allocations(&self) -> ScheduleResult<Vec<(NodeId, NodeSet)>> {
        let order = self.require_order()?;
        let mut touched = if self.input_type.is_quantum() {
            self.open.inputs().clone()
        } else {
            NodeSet::new()
        };

        let mut out = Vec::with_capacity(order.len());
        for &node in order.sequence() {
            let closed = self.graph().closed_neighborhood(node);
            let fresh: NodeSet = closed.difference(&touched).copied().collect();
            touched.extend(closed);
            out.push((node, fresh));
        }
        Ok(out)
    }

    /// E>(i, K): edges of the subgraph induced on `node` and the members of
    /// `subset` measured strictly before it.
    pub fn edges_before(&self, node: NodeId, subset: &NodeSet) -> ScheduleResult<Vec<Edge>> {
        self.require_node(node)?;
        if let Some(stray) = subset.iter().find(|n| !self.graph().contains(**n)) {
            return Err(ScheduleError::InvalidArgument {
                what: format!("node {stray} of the subset is not in the graph"),
            });
        }
        let order = self.require_order()?;

        let mut kept: NodeSet = subset
            .iter()
            .copied()
            .filter(|&k| order.is_before(k, node))
            .collect();
        kept.insert(node);
        Ok(self.graph().induced_edges(&kept))
    }

    /// Live-qubit count recorded at each step of the current order.
    pub fn liveness_trace(&self) -> ScheduleResult<Vec<usize>> {
        liveness::trace(self)
    }

    /// Peak live-qubit count under the current order.
    pub fn physical_qubit_bound(&self) -> ScheduleResult<usize> {
        Ok(self.liveness_trace()?.into_iter().max().unwrap_or_default())
    }

    /// Draw a random order from `seed` and return its peak live-qubit count.
    pub fn physical_qubits(&mut self, seed: Option<u64>) -> ScheduleResult<usize> {
        self.set_total_order_random(seed)?;
        self.physical_qubit_bound()
    }

    /// Min and max peak over sampled random orders; see [`SamplingConfig`].
    ///
    /// The scheduler's own order is left untouched.
    pub fn bound_physical_qubits(&self, config: &SamplingConfig) -> ScheduleResult<QubitBound> {
        liveness::sample(self, config)
    }

    /// Min and max peak over the orders drawn from `seeds`.
    pub fn bound_with_seeds(&self, seeds: &[u64]) -> ScheduleResult<QubitBound> {
        liveness::sample_seeds(self, seeds)
    }
}
