//! The player turn: drawing, deployment, per-card resolution and the front
//! card's attack on the boss.

use tracing::{debug, trace};

use super::BattleEngine;
use crate::combat::{percent_of, reduce_physical};
use crate::config::BattleConfig;
use crate::rng::RandomStream;
use crate::state::{AttrKind, BattleState, CapacityError, LevelMatch};

impl BattleEngine<'_, '_> {
    // ========================================================================
    // Draw & deploy
    // ========================================================================

    /// Moves the card at the tail of the deck into the hand.
    pub(super) fn draw_from_deck(&mut self) -> Result<(), CapacityError> {
        let BattleState { deck, hand, .. } = &mut *self.state;
        if deck.is_empty() {
            return Ok(());
        }
        if hand.len() >= BattleConfig::MAX_CARDS_IN_HAND {
            debug!("Hand is full.  No card played to hand this turn");
            return Ok(());
        }
        if let Some(card) = deck.pop() {
            trace!("{} dealt to hand.", card.name());
            hand.push(card)?;
        }
        Ok(())
    }

    /// Plays every hand card whose cooldown has run out, in hand order.
    pub(super) fn deploy_from_hand(&mut self) -> Result<(), CapacityError> {
        let mut i = 0;
        while i < self.state.hand.len() {
            if self.state.hand[i].timing > 0 {
                i += 1;
                continue;
            }
            let card = self.state.hand.remove(i);
            self.state.field.push(card)?;
            let index = self.state.field.len() - 1;
            self.card_played_to_field(index)?;
        }
        // Sacrifice leaves placeholders behind.
        self.state.field.compact_dead();
        Ok(())
    }

    // ========================================================================
    // Player phase
    // ========================================================================

    pub(super) fn player_phase(&mut self) -> Result<(), CapacityError> {
        self.handle_runes()?;

        let mut index = 0;
        while index < self.state.field.len() {
            self.resolve_card(index)?;
            index += 1;
        }

        for card in self.state.field.iter_mut() {
            if let Some(level) = card.level_of(AttrKind::BackstabBuff) {
                card.attrs.remove(AttrKind::BackstabBuff, LevelMatch::Any);
                card.atk -= level;
            }
        }

        self.state.field.compact_dead();
        Ok(())
    }

    /// One field card's turn.
    fn resolve_card(&mut self, index: usize) -> Result<(), CapacityError> {
        let card = &mut self.state.field[index];
        if !card.is_alive() {
            return Ok(());
        }
        trace!("{}'s turn:", card.name());

        if card.has(AttrKind::ReanimSickness) {
            card.attrs.remove(AttrKind::ReanimSickness, LevelMatch::Any);
            return Ok(());
        }

        let trapped = card.has(AttrKind::TrapBuff);
        if trapped {
            debug!("Trap removed from {}.", card.name());
            card.attrs.remove(AttrKind::TrapBuff, LevelMatch::Any);
        } else {
            self.card_abilities(index)?;
            if index == 0 && self.state.field[0].is_alive() {
                self.player_attack()?;
            }
            if !self.state.field[index].is_alive() {
                return Ok(());
            }
        }

        self.status_damage(index)?;
        if !self.state.field[index].is_alive() {
            return Ok(());
        }
        if !trapped {
            self.end_of_turn_heal(index);
        }
        Ok(())
    }

    /// Active abilities, in the card's attribute order.
    fn card_abilities(&mut self, index: usize) -> Result<(), CapacityError> {
        let name = self.state.field[index].name();
        let mut i = 0;
        while let Some(attr) = self.state.field[index].attrs.get(i) {
            i += 1;
            let level = attr.level;
            match attr.kind {
                AttrKind::AdvancedStrike => self.advanced_strike(),
                AttrKind::Reincarnate => self.reincarnate("Reincarnated", level)?,
                AttrKind::Reanimate => self.reanimate("Reanimated")?,
                AttrKind::Regenerate => self.regenerate(name, level),
                AttrKind::Healing => self.healing(name, level),
                AttrKind::Prayer => self.prayer(level),
                AttrKind::Snipe | AttrKind::ManaCorrupt | AttrKind::FlyingStone => {
                    if self.past_first_player_round() {
                        let dmg = if attr.kind == AttrKind::ManaCorrupt {
                            level * 3
                        } else {
                            level
                        };
                        debug!("{}: {} dmg", attr.kind, dmg);
                        self.hit_boss(dmg);
                    }
                }
                AttrKind::Bite => debug!("Bite: Demon is immune."),
                AttrKind::Mania => {
                    let card = &mut self.state.field[index];
                    card.hp = (card.hp - level).max(0);
                    card.atk += level;
                    card.base_atk += level;
                    debug!(
                        "Mania: -{} hp (to {}), +{} atk (to {}).",
                        level, card.hp, level, card.atk
                    );
                    if card.hp == 0 {
                        self.remove_card(index, true)?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Burns and poison inflicted by the boss. Poison wears off after one
    /// tick; burns stay. Removing the poison shifts the next entry into its
    /// slot, and that entry is passed over this turn.
    fn status_damage(&mut self, index: usize) -> Result<(), CapacityError> {
        let mut i = 0;
        while let Some(attr) = self.state.field[index].attrs.get(i) {
            if !matches!(attr.kind, AttrKind::FireGod | AttrKind::ToxicClouds) {
                i += 1;
                continue;
            }
            let card = &mut self.state.field[index];
            let dmg = attr.level.min(card.hp);
            card.hp -= dmg;
            debug!(
                "{} does {} dmg to {} ({} hp left).",
                attr.kind,
                dmg,
                card.name(),
                card.hp
            );
            if attr.kind == AttrKind::ToxicClouds {
                card.attrs.remove(AttrKind::ToxicClouds, LevelMatch::Any);
            }
            i += 1;
            if card.hp <= 0 {
                self.remove_card(index, true)?;
                return Ok(());
            }
        }
        Ok(())
    }

    /// Rejuvenate and Blood Stone. Lacerated cards cannot heal.
    fn end_of_turn_heal(&mut self, index: usize) {
        let card = &mut self.state.field[index];
        if card.has(AttrKind::LacerateBuff) {
            return;
        }
        let mut i = 0;
        while let Some(attr) = card.attrs.get(i) {
            i += 1;
            if !matches!(attr.kind, AttrKind::Rejuvenate | AttrKind::BloodStone) {
                continue;
            }
            let healed = card.heal(attr.level);
            if healed > 0 {
                let suffix = if attr.kind == AttrKind::BloodStone {
                    " (Blood Stone)"
                } else {
                    ""
                };
                debug!(
                    "{} rejuvenates {} to {} hp{}.",
                    card.name(),
                    healed,
                    card.hp,
                    suffix
                );
            }
        }
    }

    // ========================================================================
    // Attack
    // ========================================================================

    /// The front card strikes the boss.
    fn player_attack(&mut self) -> Result<(), CapacityError> {
        if self.state.field.is_empty() || !self.past_first_player_round() {
            return Ok(());
        }

        let BattleState {
            field,
            grave,
            boss,
            rng,
            rules,
            ..
        } = &mut *self.state;
        let card = &field[0];
        let mut dmg = card.atk;
        let mut base = card.base_atk;

        for attr in card.attrs.iter().filter(|a| a.kind == AttrKind::Revival) {
            dmg += attr.level;
            base += attr.level;
            debug!("Revival: Dmg increased by {} to {}.", attr.level, dmg);
        }

        for attr in card.attrs.iter() {
            let bonus = match attr.kind {
                AttrKind::Vendetta => grave.len() as i32 * attr.level,
                AttrKind::Warpath | AttrKind::Lore => percent_of(base, attr.level),
                AttrKind::Concentrate | AttrKind::FrostBite => {
                    if rules.average_concentrate {
                        base * attr.level / 200
                    } else if rng.chance(50) {
                        percent_of(base, attr.level)
                    } else {
                        0
                    }
                }
                _ => continue,
            };
            if attr.kind == AttrKind::Vendetta && bonus <= 0 {
                continue;
            }
            dmg += bonus;
            debug!("{}: dmg increased by {} to {}.", attr.kind, bonus, dmg);
        }

        let dmg = reduce_physical(&boss.attrs, dmg);
        debug!("{} attacks for {} dmg.", card.name(), dmg);
        self.hit_boss(dmg);
        if dmg <= 0 {
            return Ok(());
        }

        let card = &mut self.state.field[0];
        let mut i = 0;
        while let Some(attr) = card.attrs.get(i) {
            i += 1;
            match attr.kind {
                AttrKind::Bloodsucker | AttrKind::RedValley => {
                    let gain = percent_of(dmg, attr.level).min(card.missing_hp());
                    if card.is_alive() && gain > 0 {
                        card.hp += gain;
                        debug!("{}: {} heals {} ({} hp).", attr.kind, card.name(), gain, card.hp);
                    }
                }
                AttrKind::Bloodthirsty => {
                    card.atk += attr.level;
                    card.base_atk += attr.level;
                    debug!(
                        "Bloodthirsty: {} attack increases by {} (now {}).",
                        card.name(),
                        attr.level,
                        card.atk
                    );
                }
                _ => {}
            }
        }

        self.boss_counter()?;
        if !self.state.field[0].is_alive() {
            return Ok(());
        }

        if let Some(level) = self.state.boss.level_of(AttrKind::WickedLeech) {
            let BattleState { field, boss, .. } = &mut *self.state;
            let card = &mut field[0];
            let loss = percent_of(card.base_atk, level);
            card.atk = (card.atk - loss).max(0);
            card.base_atk -= loss;
            boss.base_atk += loss;
            boss.atk += loss;
            debug!(
                "Wicked leech: {} loses {} atk (now {}), demon gains {} atk (now {}).",
                card.name(),
                loss,
                card.atk,
                loss,
                boss.atk
            );
        }
        Ok(())
    }

    /// Retaliation strikes the two front slots, Counterattack the first.
    fn boss_counter(&mut self) -> Result<(), CapacityError> {
        let boss = &self.state.boss;
        let (slots, level) = if let Some(level) = boss.level_of(AttrKind::Retaliation) {
            (2, level)
        } else if let Some(level) = boss.level_of(AttrKind::Counterattack) {
            (1, level)
        } else {
            return Ok(());
        };

        for index in 0..slots {
            let BattleState { field, rng, .. } = &mut *self.state;
            let Some(card) = field.get_mut(index) else {
                break;
            };
            if !card.is_alive() {
                continue;
            }
            if let Some(chance) = card.level_of(AttrKind::Dexterity) {
                if rng.chance(chance) {
                    debug!("Dexterity: {} dodges the counter.", card.name());
                    continue;
                }
            }
            let dmg = level.min(card.hp);
            card.hp -= dmg;
            debug!("Demon counterattack hits {} for {} dmg.", card.name(), dmg);
            if card.hp <= 0 {
                self.remove_card(index, true)?;
            }
        }
        Ok(())
    }
}
