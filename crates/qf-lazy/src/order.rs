//! Total orders consistent with a flow's partial order.
//!
//! A total order is accepted only if, sorted by index, the nodes fall into
//! contiguous blocks that match the partial-order classes one by one, in
//! class order. Within a block any arrangement is allowed.

use std::collections::BTreeMap;

use qf_core::{NodeId, NodeSet};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{ScheduleError, ScheduleResult};

/// A validated measurement order over every node of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalOrder {
    /// Nodes, earliest first.
    sequence: Vec<NodeId>,
    /// Position in `sequence`, by node slot.
    rank: Vec<usize>,
    /// Index the caller assigned, by node slot.
    assigned: Vec<usize>,
}

impl TotalOrder {
    /// Validate `assignment` (node -> index) against `classes`.
    ///
    /// Indices need not be contiguous but must be distinct, and every one of
    /// the `node_count` nodes must appear exactly once.
    pub fn from_assignment<I>(
        node_count: usize,
        classes: &[NodeSet],
        assignment: I,
    ) -> ScheduleResult<Self>
    where
        I: IntoIterator<Item = (NodeId, usize)>,
    {
        let mut slots: Vec<Option<usize>> = vec![None; node_count];
        for (node, index) in assignment {
            let slot = slots
                .get_mut(node.slot())
                .ok_or_else(|| ScheduleError::InvalidArgument {
                    what: format!("node {node} is not in the graph"),
                })?;
            if slot.replace(index).is_some() {
                return Err(ScheduleError::InvalidArgument {
                    what: format!("node {node} is assigned more than once"),
                });
            }
        }

        let mut assigned = Vec::with_capacity(node_count);
        for (i, slot) in slots.iter().enumerate() {
            match slot {
                Some(index) => assigned.push(*index),
                None => {
                    return Err(ScheduleError::InvalidArgument {
                        what: format!("node {} has no position", NodeId::from_index(i as u32)),
                    });
                }
            }
        }

        let mut by_index: Vec<(usize, NodeId)> = assigned
            .iter()
            .enumerate()
            .map(|(i, &index)| (index, NodeId::from_index(i as u32)))
            .collect();
        by_index.sort();
        if let Some(pair) = by_index.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(ScheduleError::OrderingInconsistent {
                what: format!("nodes {} and {} share index {}", pair[0].1, pair[1].1, pair[0].0),
            });
        }
        let sequence: Vec<NodeId> = by_index.into_iter().map(|(_, node)| node).collect();

        let mut start = 0;
        for (k, class) in classes.iter().enumerate() {
            let end = start + class.len();
            let block: NodeSet = sequence
                .get(start..end)
                .unwrap_or_default()
                .iter()
                .copied()
                .collect();
            if &block != class {
                return Err(ScheduleError::OrderingInconsistent {
                    what: format!("positions {start}..{end} do not hold exactly class {k}"),
                });
            }
            start = end;
        }
        if start != node_count {
            return Err(ScheduleError::OrderingInconsistent {
                what: format!("classes cover {start} of {node_count} nodes"),
            });
        }

        let mut rank = vec![0; node_count];
        for (pos, node) in sequence.iter().enumerate() {
            rank[node.slot()] = pos;
        }

        Ok(Self {
            sequence,
            rank,
            assigned,
        })
    }

    /// Nodes in measurement order.
    pub fn sequence(&self) -> &[NodeId] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// 0-based position of `node` in the order.
    pub fn rank(&self, node: NodeId) -> Option<usize> {
        self.rank.get(node.slot()).copied()
    }

    /// The index originally assigned to `node`.
    pub fn index(&self, node: NodeId) -> Option<usize> {
        self.assigned.get(node.slot()).copied()
    }

    /// `a` is measured strictly before `b`.
    pub fn is_before(&self, a: NodeId, b: NodeId) -> bool {
        matches!((self.rank(a), self.rank(b)), (Some(x), Some(y)) if x < y)
    }

    /// The accepted node -> index assignment.
    pub fn assignment(&self) -> BTreeMap<NodeId, usize> {
        self.assigned
            .iter()
            .enumerate()
            .map(|(i, &index)| (NodeId::from_index(i as u32), index))
            .collect()
    }
}

/// Random assignment respecting `classes`.
///
/// Each class owns the block of indices its size and position dictate; only
/// the arrangement inside a block is drawn from `rng`.
pub fn random_assignment<R>(classes: &[NodeSet], rng: &mut R) -> BTreeMap<NodeId, usize>
where
    R: Rng + ?Sized,
{
    let mut assignment = BTreeMap::new();
    let mut start = 0;
    for class in classes {
        let mut block: Vec<usize> = (start..start + class.len()).collect();
        block.shuffle(rng);
        assignment.extend(class.iter().copied().zip(block));
        start += class.len();
    }
    assignment
}
