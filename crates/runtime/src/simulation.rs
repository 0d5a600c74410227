//! Simulation orchestrator.
//!
//! Builds the read-only battle template once, hands every worker a disjoint
//! share of iterations and its own random stream, and reduces the worker
//! results only after all of them have finished.

use battle_core::{BattleState, Loadout, MwcRng};
use tracing::info;

use crate::config::SimConfig;
use crate::error::{Result, RuntimeError};
use crate::pool::{self, WorkerSlot};
use crate::runner::WorkerReport;
use crate::stats::Summary;

/// Reduced result of a full run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub summary: Summary,
    /// Per-battle damage, worker by worker; empty unless requested.
    pub damages: Vec<i32>,
}

/// Runs many independent battles for one loadout.
#[derive(Clone, Debug, Default)]
pub struct Simulation {
    config: SimConfig,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Plays `config.iterations` battles of `loadout` with a hero starting
    /// at `player_hp`.
    ///
    /// Any worker's capacity overflow fails the whole run.
    pub fn run(&self, loadout: &Loadout<'_>, player_hp: i32) -> Result<RunReport> {
        let config = &self.config;
        if config.iterations == 0 {
            return Err(RuntimeError::NoIterations);
        }
        let workers = config.workers.clamp(1, SimConfig::MAX_WORKERS);

        let template = BattleState::new(loadout, player_hp, config.rules, MwcRng::default())
            .map_err(RuntimeError::Setup)?;

        let mut slots: Vec<WorkerSlot<'_>> = pool::worker_streams(config.seed, workers)
            .into_iter()
            .enumerate()
            .map(|(index, rng)| WorkerSlot::new(&template, rng, config.share_of(index)))
            .collect();

        info!(
            iterations = config.iterations,
            workers,
            boss = loadout.boss.name(),
            "starting simulation"
        );

        let thread_pool = pool::build_pool(workers)?;
        let record_damage = config.record_damage;
        let template = &template;
        thread_pool.scope(|scope| {
            for (index, slot) in slots.iter_mut().enumerate() {
                scope.spawn(move |_| slot.run(index, template, record_damage));
            }
        });

        let mut total = WorkerReport::default();
        for (worker, slot) in slots.into_iter().enumerate() {
            let report = slot
                .into_report()
                .map_err(|source| RuntimeError::Battle { worker, source })?;
            total.merge(report);
        }

        info!(
            battles = total.summary.battles(),
            average_damage = total.summary.damage.average().unwrap_or_default(),
            "simulation complete"
        );
        Ok(RunReport {
            summary: total.summary,
            damages: total.damages,
        })
    }
}
