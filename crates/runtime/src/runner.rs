//! Per-worker simulation loop.

use battle_core::{BattleEngine, BattleState, CapacityError};
use tracing::trace;

use crate::stats::Summary;

/// Result of one worker's share of battles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkerReport {
    pub summary: Summary,
    /// Damage of each battle in play order; empty unless requested.
    pub damages: Vec<i32>,
}

impl WorkerReport {
    pub fn merge(&mut self, other: WorkerReport) {
        self.summary.merge(&other.summary);
        self.damages.extend(other.damages);
    }
}

/// Plays `iterations` battles on `state`, resetting it from `template`
/// before each one. Only the random stream survives a reset, so every
/// battle draws fresh numbers without touching the catalogue.
///
/// The first capacity overflow aborts the loop; no partial report is
/// returned.
pub fn run_worker<'c>(
    state: &mut BattleState<'c>,
    template: &BattleState<'c>,
    iterations: u32,
    record_damage: bool,
) -> Result<WorkerReport, CapacityError> {
    let mut report = WorkerReport {
        damages: if record_damage {
            Vec::with_capacity(iterations as usize)
        } else {
            Vec::new()
        },
        ..WorkerReport::default()
    };

    for iteration in 0..iterations {
        state.reset_from(template);
        state.shuffle_deck();
        let outcome = BattleEngine::new(state).run()?;
        trace!(
            iteration,
            damage = outcome.damage,
            rounds = outcome.rounds,
            "battle finished"
        );

        report.summary.record(&outcome);
        if record_damage {
            report.damages.push(outcome.damage);
        }
    }
    Ok(report)
}
