//! Outcome accumulators.
//!
//! Every reduction here is associative and commutative, so worker results can
//! be merged in any order and any partition of iterations yields the same
//! totals.

use battle_core::Outcome;

/// Running `{min, max, sum, count}` over integer samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatRange {
    min: i32,
    max: i32,
    sum: i64,
    count: u64,
}

impl StatRange {
    pub const fn new() -> Self {
        Self {
            min: i32::MAX,
            max: i32::MIN,
            sum: 0,
            count: 0,
        }
    }

    pub fn record(&mut self, value: i32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += i64::from(value);
        self.count += 1;
    }

    pub fn merge(&mut self, other: &Self) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
    }

    /// Lowest sample, or `None` before the first sample.
    pub fn min(&self) -> Option<i32> {
        (self.count > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<i32> {
        (self.count > 0).then_some(self.max)
    }

    pub fn sum(&self) -> i64 {
        self.sum
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum as f64 / self.count as f64)
    }
}

impl Default for StatRange {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate of many battle outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub damage: StatRange,
    pub rounds: StatRange,
    /// Battles that reached the milestone round.
    pub milestone_hits: u64,
}

impl Summary {
    pub fn record(&mut self, outcome: &Outcome) {
        self.damage.record(outcome.damage);
        self.rounds.record(outcome.rounds);
        if outcome.hit_milestone {
            self.milestone_hits += 1;
        }
    }

    pub fn merge(&mut self, other: &Self) {
        self.damage.merge(&other.damage);
        self.rounds.merge(&other.rounds);
        self.milestone_hits += other.milestone_hits;
    }

    /// Number of battles recorded.
    pub fn battles(&self) -> u64 {
        self.damage.count()
    }

    /// Share of battles that reached the milestone round, in percent.
    pub fn milestone_percent(&self) -> Option<f64> {
        let battles = self.battles();
        (battles > 0).then(|| self.milestone_hits as f64 * 100.0 / battles as f64)
    }
}

impl FromIterator<Outcome> for Summary {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut summary = Self::default();
        for outcome in iter {
            summary.record(&outcome);
        }
        summary
    }
}
