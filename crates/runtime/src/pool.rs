//! Worker slots and thread pool plumbing.
//!
//! Each worker owns one battle state for the whole run. The states live in a
//! single allocation with every slot starting on its own page, so no two
//! workers ever write to the same cache line.

use battle_core::{BattleState, CapacityError, MwcRng};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::error::{Result, RuntimeError};
use crate::runner::{WorkerReport, run_worker};

pub(crate) const PAGE_SIZE: usize = 4096;

/// One worker's exclusively owned state and output.
#[repr(align(4096))]
pub(crate) struct WorkerSlot<'c> {
    state: BattleState<'c>,
    iterations: u32,
    report: core::result::Result<WorkerReport, CapacityError>,
}

impl<'c> WorkerSlot<'c> {
    pub(crate) fn new(template: &BattleState<'c>, rng: MwcRng, iterations: u32) -> Self {
        let mut state = template.clone();
        state.rng = rng;
        Self {
            state,
            iterations,
            report: Ok(WorkerReport::default()),
        }
    }

    pub(crate) fn run(&mut self, index: usize, template: &BattleState<'c>, record_damage: bool) {
        self.report = run_worker(&mut self.state, template, self.iterations, record_damage);
        match &self.report {
            Ok(report) => debug!(
                worker = index,
                battles = report.summary.battles(),
                "worker finished"
            ),
            Err(e) => debug!(worker = index, error = %e, "worker aborted"),
        }
    }

    pub(crate) fn into_report(self) -> core::result::Result<WorkerReport, CapacityError> {
        self.report
    }
}

/// Seeds one independent stream per worker from a single `StdRng`.
pub(crate) fn worker_streams(seed: Option<u64>, workers: usize) -> Vec<MwcRng> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..workers)
        .map(|_| MwcRng::new(rng.next_u32(), rng.next_u32()))
        .collect()
}

pub(crate) fn build_pool(workers: usize) -> Result<ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("sim-worker-{index}"))
        .build()
        .map_err(RuntimeError::ThreadPool)
}
