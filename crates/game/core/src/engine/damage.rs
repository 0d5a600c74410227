//! Damage to field cards and to the player hero.

use tracing::debug;

use super::BattleEngine;
use crate::combat::{absorb, percent_of, reduce_physical};
use crate::rng::RandomStream;
use crate::state::{AttrKind, Attribute, BattleState, CapacityError};

impl BattleEngine<'_, '_> {
    /// Physical hit on the field card at `index`.
    ///
    /// Returns the damage actually dealt after avoidance and reduction. A
    /// zero result means the hit had no effect at all, not even on-hit
    /// triggers.
    pub(super) fn damage_card(&mut self, index: usize, amount: i32) -> Result<i32, CapacityError> {
        let BattleState {
            field, rng, boss, ..
        } = &mut *self.state;
        let card = &mut field[index];

        if let Some(chance) = card.level_of(AttrKind::NimbleSoul) {
            if rng.chance(chance) {
                debug!("{} dodged (nimble soul).", card.name());
                return Ok(0);
            }
        }
        if let Some(chance) = card.level_of(AttrKind::Dodge) {
            if rng.chance(chance) {
                debug!("{} dodged.", card.name());
                return Ok(0);
            }
        }

        let amount = reduce_physical(&card.attrs, amount);
        if amount <= 0 {
            return Ok(0);
        }
        card.hp = (card.hp - amount).max(0);
        debug!("{} takes {} dmg ({} left).", card.name(), amount, card.hp);

        let mut reflected = 0;
        let mut i = 0;
        while let Some(attr) = card.attrs.get(i) {
            i += 1;
            match attr.kind {
                AttrKind::Craze | AttrKind::Tsunami => {
                    debug!("{}: {} +{} dmg", attr.kind, card.name(), attr.level);
                    card.atk += attr.level;
                    card.base_atk += attr.level;
                }
                AttrKind::Counterattack
                | AttrKind::Retaliation
                | AttrKind::ThunderShield
                | AttrKind::FireForge => {
                    debug!("{}: {} dmg", attr.kind, attr.level);
                    reflected += attr.level;
                    boss.hp -= attr.level;
                }
                AttrKind::WickedLeech => {
                    let stolen = percent_of(boss.base_atk, attr.level);
                    boss.base_atk -= stolen;
                    boss.atk -= stolen;
                    card.atk += stolen;
                    card.base_atk += stolen;
                    debug!(
                        "Wicked Leech: Steal {} atk (now {}) (demon now {})",
                        stolen, card.atk, boss.atk
                    );
                }
                _ => {}
            }
        }
        self.state.damage_done += reflected;

        if self.state.field[index].hp == 0 {
            self.remove_card(index, true)?;
        }

        let card = &mut self.state.field[index];
        if card.hp > 0 && self.state.boss.has(AttrKind::Lacerate) && !card.has(AttrKind::LacerateBuff)
        {
            card.add_attr(Attribute::flag(AttrKind::LacerateBuff))?;
            debug!("{} lacerated.", card.name());
        }

        Ok(amount)
    }

    /// Damage aimed at the hero. Guards on the field absorb it left to right
    /// before the remainder lands; player hp is not clamped.
    pub(super) fn damage_player(&mut self, mut amount: i32) -> Result<(), CapacityError> {
        let mut index = 0;
        while index < self.state.field.len() {
            let card = &mut self.state.field[index];
            if card.has(AttrKind::Guard) {
                let (absorbed, rest) = absorb(card.hp, amount);
                if absorbed > 0 {
                    card.hp -= absorbed;
                    debug!("{} absorbs {} ({} left).", card.name(), absorbed, card.hp);
                    if card.hp <= 0 {
                        self.remove_card(index, true)?;
                    }
                    amount = rest;
                }
            }
            index += 1;
        }

        self.state.hp -= amount;
        if amount > 0 {
            debug!("Player takes {} dmg ({} left).", amount, self.state.hp);
        }
        Ok(())
    }
}
