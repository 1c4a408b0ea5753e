//! Structural checks on a lazy schedule.
//!
//! - Lemma A: for every non-output i, f(i) is in A(i).
//! - Lemma B: the A(i) over non-outputs partition the complement of the
//!   inputs (quantum input) or all nodes (classical input).
//! - Lemma C: the union of E>(i, N(i)) over all nodes rebuilds the graph.
//!
//! The checks read only the scheduler; they need a total order to be set.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use petgraph::algo::is_isomorphic;
use petgraph::graph::UnGraph;
use qf_core::{NodeId, NodeSet};
use qf_graph::Edge;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScheduleResult;
use crate::scheduler::LazyScheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LemmaOutcome {
    Pass,
    Fail,
}

impl LemmaOutcome {
    fn from_bool(ok: bool) -> Self {
        if ok { LemmaOutcome::Pass } else { LemmaOutcome::Fail }
    }

    pub fn passed(self) -> bool {
        self == LemmaOutcome::Pass
    }
}

impl fmt::Display for LemmaOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LemmaOutcome::Pass => f.write_str("PASS"),
            LemmaOutcome::Fail => f.write_str("FAIL"),
        }
    }
}

/// Outcome of every lemma for one schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaReport {
    pub a: LemmaOutcome,
    pub b: LemmaOutcome,
    pub c: LemmaOutcome,
}

impl LemmaReport {
    pub fn all_passed(&self) -> bool {
        self.a.passed() && self.b.passed() && self.c.passed()
    }
}

pub struct Verifier<'a> {
    scheduler: &'a LazyScheduler,
}

impl<'a> Verifier<'a> {
    pub fn new(scheduler: &'a LazyScheduler) -> Self {
        Self { scheduler }
    }

    fn allocations_of_non_outputs(&self) -> ScheduleResult<BTreeMap<NodeId, NodeSet>> {
        let outputs = self.scheduler.open_graph().outputs();
        Ok(self
            .scheduler
            .allocations()?
            .into_iter()
            .filter(|(node, _)| !outputs.contains(node))
            .collect())
    }

    pub fn lemma_a(&self) -> ScheduleResult<LemmaOutcome> {
        let open = self.scheduler.open_graph();
        let ok = self
            .allocations_of_non_outputs()?
            .iter()
            .all(|(&i, fresh)| open.flow_target(i).is_some_and(|fi| fresh.contains(&fi)));
        Ok(LemmaOutcome::from_bool(ok))
    }

    pub fn lemma_b(&self) -> ScheduleResult<LemmaOutcome> {
        let open = self.scheduler.open_graph();
        let target: NodeSet = if self.scheduler.input_type().is_quantum() {
            open.graph()
                .node_ids()
                .filter(|n| !open.inputs().contains(n))
                .collect()
        } else {
            open.graph().node_set()
        };

        let collected: Vec<NodeId> = self
            .allocations_of_non_outputs()?
            .into_values()
            .flatten()
            .collect();
        let distinct: NodeSet = collected.iter().copied().collect();

        Ok(LemmaOutcome::from_bool(
            distinct.len() == collected.len() && distinct == target,
        ))
    }

    pub fn lemma_c(&self) -> ScheduleResult<LemmaOutcome> {
        let graph = self.scheduler.graph();
        let mut rebuilt: BTreeSet<Edge> = BTreeSet::new();
        for node in graph.node_ids() {
            let nbrs = graph.open_neighborhood(node);
            rebuilt.extend(self.scheduler.edges_before(node, &nbrs)?);
        }

        let original = to_petgraph(graph.node_count(), graph.edges().iter());
        let candidate = to_petgraph(graph.node_count(), rebuilt.iter());
        Ok(LemmaOutcome::from_bool(is_isomorphic(&original, &candidate)))
    }

    pub fn run_all(&self) -> ScheduleResult<LemmaReport> {
        let report = LemmaReport {
            a: self.lemma_a()?,
            b: self.lemma_b()?,
            c: self.lemma_c()?,
        };
        debug!(a = %report.a, b = %report.b, c = %report.c, "lemmas checked");
        Ok(report)
    }
}

/// Every node is added, so isolated nodes take part in the comparison.
fn to_petgraph<'e>(node_count: usize, edges: impl Iterator<Item = &'e Edge>) -> UnGraph<(), ()> {
    let mut g = UnGraph::with_capacity(node_count, 0);
    let idx: Vec<_> = (0..node_count).map(|_| g.add_node(())).collect();
    for edge in edges {
        g.add_edge(idx[edge.a.slot()], idx[edge.b.slot()], ());
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_display() {
        assert_eq!(LemmaOutcome::Pass.to_string(), "PASS");
        assert_eq!(LemmaOutcome::Fail.to_string(), "FAIL");
        assert!(!LemmaOutcome::Fail.passed());
    }

    #[test]
    fn isolated_nodes_count_for_isomorphism() {
        let a = Edge::new(NodeId::from_index(0), NodeId::from_index(1));
        let two = to_petgraph(2, [a].iter());
        let three = to_petgraph(3, [a].iter());
        assert!(!is_isomorphic(&two, &three));
        assert!(is_isomorphic(&three, &to_petgraph(3, [a].iter())));
    }
}
