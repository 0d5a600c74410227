//! Authoritative battle state representation.
//!
//! This module owns combatants, rosters, runes and the aggregate
//! [`BattleState`]. The engine mutates a state in place; runners keep one
//! long-lived state per worker and reset it from a shared template between
//! iterations.
mod attribute;
mod card;
mod error;
mod roster;
mod rune;

use arrayvec::ArrayVec;

pub use attribute::{AttrKind, Attribute, Attributes, AttributesFull, BuffStat, LevelMatch};
pub use card::{Card, CardClass, CardTemplate, DEAD_CARD};
pub use error::{CapacityError, RosterKind};
pub use roster::{Roster, Selection, Weakest};
pub use rune::{BUILTIN_RUNES, Rune, RuneTemplate};

use crate::catalogue::Loadout;
use crate::config::BattleConfig;
use crate::rng::MwcRng;

/// Everything needed to play one battle from round 1 to the end.
#[derive(Clone, Debug)]
pub struct BattleState<'c> {
    pub boss: Card<'c>,
    /// Player hero hit points. May go negative; that is the loss condition.
    pub hp: i32,
    pub max_hp: i32,
    /// Cumulative damage dealt to the boss.
    pub damage_done: i32,
    pub round: i32,

    pub deck: Roster<'c>,
    pub hand: Roster<'c>,
    pub field: Roster<'c>,
    pub grave: Roster<'c>,
    pub runes: ArrayVec<Rune<'c>, { BattleConfig::MAX_RUNES }>,

    pub rng: MwcRng,
    pub rules: BattleConfig,
}

impl<'c> BattleState<'c> {
    /// Builds the round-1 state for a loadout. The deck is in loadout order;
    /// callers shuffle it per iteration.
    pub fn new(
        loadout: &Loadout<'c>,
        player_hp: i32,
        rules: BattleConfig,
        rng: MwcRng,
    ) -> Result<Self, CapacityError> {
        let mut deck = Roster::new(RosterKind::Deck);
        for &template in &loadout.deck {
            deck.push(Card::from_template(template))?;
        }

        Ok(Self {
            boss: Card::from_template(loadout.boss),
            hp: player_hp,
            max_hp: player_hp,
            damage_done: 0,
            round: 1,
            deck,
            hand: Roster::new(RosterKind::Hand),
            field: Roster::new(RosterKind::Field),
            grave: Roster::new(RosterKind::Grave),
            runes: loadout.runes.iter().map(|&template| Rune::new(template)).collect(),
            rng,
            rules,
        })
    }

    /// Copies `template` over this state while keeping the evolving random
    /// stream, so consecutive iterations draw fresh numbers.
    pub fn reset_from(&mut self, template: &Self) {
        let rng = self.rng;
        self.clone_from(template);
        self.rng = rng;
    }

    pub fn roster(&self, kind: RosterKind) -> &Roster<'c> {
        match kind {
            RosterKind::Deck => &self.deck,
            RosterKind::Hand => &self.hand,
            RosterKind::Field => &self.field,
            RosterKind::Grave => &self.grave,
        }
    }

    pub fn shuffle_deck(&mut self) {
        self.deck.shuffle(&mut self.rng);
    }

    /// True while at least one card remains to be played or is in play.
    pub fn has_cards_in_play(&self) -> bool {
        !self.field.is_empty() || !self.deck.is_empty() || !self.hand.is_empty()
    }
}
