//! Battle state machine and ability resolution.
//!
//! The [`BattleEngine`] is the only writer of a [`BattleState`] during a
//! fight. It alternates boss phases (odd rounds) and player phases (even
//! rounds) until the player falls, every card is gone, or the round ceiling
//! is passed. Ability handlers live in the submodules and are `impl` blocks
//! on the engine; every handler receives the state by mutable reference
//! through `self` and addresses field cards by index.
//!
//! Field indices stay stable for the whole phase: removed cards become dead
//! placeholders and are compacted only at phase boundaries.

mod abilities;
mod boss;
mod damage;
mod field;
mod player;
mod runes;

use tracing::{debug, trace};

use crate::config::BattleConfig;
use crate::state::{BattleState, CapacityError};

/// Result of one battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// Total damage dealt to the boss.
    pub damage: i32,
    /// Last fully completed round.
    pub rounds: i32,
    /// Whether the battle reached the milestone round.
    pub hit_milestone: bool,
}

/// Drives one battle over a borrowed state.
pub struct BattleEngine<'s, 'c> {
    state: &'s mut BattleState<'c>,
}

impl<'s, 'c> BattleEngine<'s, 'c> {
    pub fn new(state: &'s mut BattleState<'c>) -> Self {
        Self { state }
    }

    /// Plays the battle to its end.
    ///
    /// Fails only when a fixed capacity overflows; the state is then left
    /// mid-battle and must not be reported.
    pub fn run(&mut self) -> Result<Outcome, CapacityError> {
        let rules = self.state.rules;
        let mut hit_milestone = false;

        while self.state.hp > 0
            && self.state.has_cards_in_play()
            && self.state.round <= rules.max_rounds
        {
            if self.state.round == rules.milestone_round {
                hit_milestone = true;
            }
            self.trace_state();
            self.decrease_timers();

            if self.state.round % 2 == 0 {
                debug!("Round {} (player)", self.state.round);
                self.draw_from_deck()?;
                self.deploy_from_hand()?;
                // Obstinacy may have finished the player off.
                if self.state.hp <= 0 {
                    break;
                }
                self.player_phase()?;
            } else {
                debug!("Round {} (demon)", self.state.round);
                self.boss_phase()?;
            }
            self.state.round += 1;
        }
        self.state.round -= 1;

        Ok(Outcome {
            damage: self.state.damage_done,
            rounds: self.state.round,
            hit_milestone,
        })
    }

    fn decrease_timers(&mut self) {
        for card in self.state.hand.iter_mut() {
            if card.timing > 0 {
                card.timing -= 1;
            }
        }
    }

    fn trace_state(&self) {
        let state = &*self.state;
        trace!(
            round = state.round,
            hp = state.hp,
            damage = state.damage_done,
            deck = state.deck.len(),
            hand = state.hand.len(),
            field = state.field.len(),
            grave = state.grave.len(),
            "state"
        );
    }

    /// Deals damage straight to the boss, bypassing its defences.
    fn hit_boss(&mut self, amount: i32) {
        self.state.damage_done += amount;
        self.state.boss.hp -= amount;
    }

    fn past_first_player_round(&self) -> bool {
        self.state.round >= BattleConfig::FIRST_PLAYER_ROUND
    }
}

#[cfg(test)]
mod tests;
