//! Qubit-liveness simulation.
//!
//! Walking the total order, each step allocates A(i) and records the live
//! count, then measures node i, which frees its qubit unless i is an output
//! kept as quantum output. A quantum input starts the walk with every input
//! qubit already live.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace as trace_event};

use crate::error::{ScheduleError, ScheduleResult};
use crate::scheduler::LazyScheduler;
use crate::seed;

/// Monte-Carlo sampling configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Number of random total orders to draw
    pub samples: usize,
    /// Seed the per-sample seeds derive from; `None` picks a fresh one
    pub base_seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            samples: 32,
            base_seed: None,
        }
    }
}

/// Smallest and largest peak live-qubit count seen over the samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QubitBound {
    pub min: usize,
    pub max: usize,
    pub samples: usize,
}

/// Live-qubit count recorded at each step of the scheduler's order.
pub(crate) fn trace(scheduler: &LazyScheduler) -> ScheduleResult<Vec<usize>> {
    let open = scheduler.open_graph();
    let keep_outputs = scheduler.output_type().is_quantum();

    let mut alive = if scheduler.input_type().is_quantum() {
        open.inputs().len()
    } else {
        0
    };

    let allocations = scheduler.allocations()?;
    let mut recorded = Vec::with_capacity(allocations.len());
    for (node, fresh) in allocations {
        alive += fresh.len();
        recorded.push(alive);
        trace_event!(node = %node, fresh = fresh.len(), alive, "measurement round");

        if !(keep_outputs && open.outputs().contains(&node)) {
            alive = alive
                .checked_sub(1)
                .ok_or_else(|| ScheduleError::Invariant {
                    what: format!("node {node} measured with no live qubit"),
                })?;
        }
    }
    Ok(recorded)
}

pub(crate) fn sample(
    scheduler: &LazyScheduler,
    config: &SamplingConfig,
) -> ScheduleResult<QubitBound> {
    if config.samples == 0 {
        return Err(ScheduleError::InvalidConfiguration {
            what: "sampling needs at least one sample".into(),
        });
    }
    let base = config
        .base_seed
        .unwrap_or_else(|| scheduler.default_seed());
    let seeds = seed::derive_seeds(base, config.samples);
    sample_seeds(scheduler, &seeds)
}

/// One sample per seed, in parallel, each on its own copy of the scheduler.
pub(crate) fn sample_seeds(scheduler: &LazyScheduler, seeds: &[u64]) -> ScheduleResult<QubitBound> {
    if seeds.is_empty() {
        return Err(ScheduleError::InvalidConfiguration {
            what: "no seeds to sample".into(),
        });
    }

    let peaks: Vec<usize> = seeds
        .par_iter()
        .map(|&seed| {
            let mut copy = scheduler.clone();
            copy.physical_qubits(Some(seed))
        })
        .collect::<ScheduleResult<_>>()?;

    let bound = QubitBound {
        min: peaks.iter().copied().min().unwrap_or_default(),
        max: peaks.iter().copied().max().unwrap_or_default(),
        samples: peaks.len(),
    };
    debug!(min = bound.min, max = bound.max, samples = bound.samples, "qubit bound sampled");
    Ok(bound)
}
