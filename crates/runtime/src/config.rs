//! Simulation run configuration.

use battle_core::BattleConfig;

/// Configuration for one simulation run. Built once by the caller and passed
/// by reference to every worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Total number of battles across all workers.
    pub iterations: u32,

    /// Number of worker threads.
    pub workers: usize,

    /// Seed for deriving worker streams (None = OS entropy).
    pub seed: Option<u64>,

    /// Keep every battle's damage for per-fight listings.
    pub record_damage: bool,

    /// Rules every battle is played with.
    pub rules: BattleConfig,
}

impl SimConfig {
    pub const MAX_WORKERS: usize = 64;
    pub const DEFAULT_ITERATIONS: u32 = 50_000;
    pub const DEFAULT_WORKERS: usize = 8;

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the worker count, clamped to `1..=MAX_WORKERS`.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.clamp(1, Self::MAX_WORKERS);
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_record_damage(mut self, record_damage: bool) -> Self {
        self.record_damage = record_damage;
        self
    }

    pub fn with_rules(mut self, rules: BattleConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Iterations assigned to `worker`. Worker 0 also takes the remainder so
    /// the shares add up to `iterations` exactly.
    pub fn share_of(&self, worker: usize) -> u32 {
        let workers = self.workers.max(1) as u32;
        let share = self.iterations / workers;
        if worker == 0 {
            share + self.iterations % workers
        } else {
            share
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
            workers: Self::DEFAULT_WORKERS,
            seed: None,
            record_damage: false,
            rules: BattleConfig::default(),
        }
    }
}
