//! Healing, recycling and cooldown abilities shared by cards, quick strikes
//! and desperation triggers.

use tracing::debug;

use super::BattleEngine;
use crate::state::{AttrKind, Attribute, BattleState, CapacityError, Card, Weakest};

/// Heals one field card unless it is lacerated or immune. Dead and
/// undamaged cards are left alone.
fn heal_one(card: &mut Card<'_>, source: &str, amount: i32) {
    if card.has(AttrKind::LacerateBuff) || card.has(AttrKind::Immunity) {
        return;
    }
    if card.is_alive() {
        let healed = card.heal(amount);
        if healed > 0 {
            debug!("{} healed {} for {}.", source, card.name(), healed);
        }
    }
}

impl BattleEngine<'_, '_> {
    /// Heals the hero, never above maximum and never from zero.
    pub(super) fn prayer(&mut self, amount: i32) {
        let state = &mut *self.state;
        if state.hp > 0 && state.hp < state.max_hp {
            let healed = amount.min(state.max_hp - state.hp);
            state.hp += healed;
            debug!("Prayer healed {}.", healed);
        }
    }

    /// Heals every field card.
    pub(super) fn regenerate(&mut self, source: &str, amount: i32) {
        for card in self.state.field.iter_mut() {
            heal_one(card, source, amount);
        }
    }

    /// Heals the most damaged living field card.
    pub(super) fn healing(&mut self, source: &str, amount: i32) {
        let BattleState { field, rng, .. } = &mut *self.state;
        if let Some(target) = field.find_weakest(rng, Weakest::MostDamaged) {
            heal_one(&mut field[target], source, amount);
        }
    }

    /// Moves up to `count` cards from the front of the graveyard to the deck.
    pub(super) fn reincarnate(&mut self, label: &str, count: i32) -> Result<(), CapacityError> {
        for _ in 0..count {
            if self.state.grave.is_empty() {
                break;
            }
            let card = self.state.grave.remove(0);
            debug!("{} {}.", label, card.name());
            self.state.deck.push(card)?;
        }
        Ok(())
    }

    /// Brings a random graveyard card straight onto the field. Reanimators
    /// and immune cards cannot be picked. The card sits out its first turn.
    pub(super) fn reanimate(&mut self, label: &str) -> Result<(), CapacityError> {
        let BattleState {
            field, grave, rng, ..
        } = &mut *self.state;
        let Some(pick) = grave.pick_where(rng, |_, card| {
            !card.has(AttrKind::Reanimate)
                && !card.has(AttrKind::DReanimate)
                && !card.has(AttrKind::Immunity)
        }) else {
            return Ok(());
        };

        let mut card = grave.remove(pick);
        card.timing = 0;
        card.add_attr(Attribute::flag(AttrKind::ReanimSickness))?;
        debug!("{} {}.", label, card.name());
        field.push(card)?;

        let index = field.len() - 1;
        self.card_played_to_field(index)
    }

    /// Lowers the cooldown of the hand card furthest from being played.
    pub(super) fn advanced_strike(&mut self) {
        let mut slowest: Option<(usize, i32)> = None;
        for (i, card) in self.state.hand.iter().enumerate() {
            if slowest.is_none_or(|(_, timing)| card.timing > timing) {
                slowest = Some((i, card.timing));
            }
        }
        let Some((index, _)) = slowest else {
            return;
        };
        let card = &mut self.state.hand[index];
        if card.timing > 0 {
            card.timing -= 1;
            debug!("Advanced strike: {} timing lowered to {}.", card.name(), card.timing);
        }
    }
}
