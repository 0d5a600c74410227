/// Battle rules configuration and compile-time capacities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Rounds above this ceiling end the fight.
    pub max_rounds: i32,
    /// Round whose reachability is tracked as a separate statistic.
    pub milestone_round: i32,
    /// Resolve concentrate-style bonuses at their expected value instead of
    /// rolling a coin for the full bonus.
    pub average_concentrate: bool,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_ATTRIBUTES: usize = 40;
    pub const MAX_RUNES: usize = 4;
    pub const MAX_CARDS_IN_SET: usize = 20;
    pub const MAX_CARDS_IN_DECK: usize = 10;
    pub const MAX_CARDS_IN_HAND: usize = 5;

    // ===== fixed rules =====
    pub const FIRST_BOSS_ROUND: i32 = 5;
    pub const FIRST_PLAYER_ROUND: i32 = 6;
    /// From this round on the player loses hp every boss phase.
    pub const UNAVOIDABLE_DAMAGE_ROUND: i32 = 51;
    pub const UNAVOIDABLE_DAMAGE_BASE: i32 = 80;
    /// Added every two rounds after [`Self::UNAVOIDABLE_DAMAGE_ROUND`].
    pub const UNAVOIDABLE_DAMAGE_STEP: i32 = 60;
    /// Percent chance that a trap sticks to a card that does not resist it.
    pub const TRAP_CHANCE: u32 = 65;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ROUNDS: i32 = 500;
    pub const DEFAULT_MILESTONE_ROUND: i32 = 50;

    pub fn new() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            milestone_round: Self::DEFAULT_MILESTONE_ROUND,
            average_concentrate: false,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: i32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_milestone_round(mut self, milestone_round: i32) -> Self {
        self.milestone_round = milestone_round;
        self
    }

    pub fn with_average_concentrate(mut self, average_concentrate: bool) -> Self {
        self.average_concentrate = average_concentrate;
        self
    }

    /// Unavoidable damage dealt at the start of a boss phase, before capping
    /// at the player's remaining hp. Zero before the threshold round.
    pub fn unavoidable_damage(round: i32) -> i32 {
        if round < Self::UNAVOIDABLE_DAMAGE_ROUND {
            return 0;
        }
        ((round - Self::UNAVOIDABLE_DAMAGE_ROUND) / 2) * Self::UNAVOIDABLE_DAMAGE_STEP
            + Self::UNAVOIDABLE_DAMAGE_BASE
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
