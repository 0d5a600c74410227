//! The boss turn: chip damage, scripted abilities and the physical attack.

use tracing::{debug, trace};

use super::BattleEngine;
use crate::config::BattleConfig;
use crate::rng::RandomStream;
use crate::state::{AttrKind, Attribute, BattleState, CapacityError, Weakest};

impl BattleEngine<'_, '_> {
    /// Plays one boss round. Nothing happens before the boss appears.
    pub(super) fn boss_phase(&mut self) -> Result<(), CapacityError> {
        let round = self.state.round;
        if round < BattleConfig::FIRST_BOSS_ROUND {
            return Ok(());
        }
        if round == BattleConfig::FIRST_BOSS_ROUND {
            debug!("{} appears.", self.state.boss.name());
        }
        trace!("{}'s turn:", self.state.boss.name());

        let chip = BattleConfig::unavoidable_damage(round).min(self.state.hp);
        if chip > 0 {
            self.state.hp -= chip;
            debug!(
                "Player takes {} unavoidable damage ({} left)",
                chip, self.state.hp
            );
        }

        let mut i = 0;
        while let Some(attr) = self.state.boss.attrs.get(i) {
            i += 1;
            if self.state.hp <= 0 {
                break;
            }
            self.boss_ability(attr)?;
        }

        if self.state.hp > 0 {
            let mut atk = self.state.boss.atk;
            if let Some(level) = self.state.boss.level_of(AttrKind::HotChase) {
                let bonus = level * self.state.grave.len() as i32;
                if bonus > 0 {
                    atk += bonus;
                    debug!("Hot Chase: Demon attack +{} (now {}).", bonus, atk);
                }
            }
            self.boss_attack(atk)?;
        }

        self.state.field.compact_dead();
        Ok(())
    }

    fn boss_ability(&mut self, attr: Attribute) -> Result<(), CapacityError> {
        let level = attr.level;
        match attr.kind {
            AttrKind::Curse => {
                debug!("Curse : {} dmg.", level);
                self.damage_player(level)?;
            }
            AttrKind::Damnation => {
                let dmg = level * self.state.field.len() as i32;
                if dmg > 0 {
                    debug!("Damnation: {} dmg.", dmg);
                    self.damage_player(dmg)?;
                }
            }
            AttrKind::Exile => self.exile_front()?,
            AttrKind::Snipe => {
                let BattleState { field, rng, .. } = &mut *self.state;
                let Some(target) = field.find_weakest(rng, Weakest::LowestHp) else {
                    return Ok(());
                };
                let card = &mut field[target];
                let dmg = level.min(card.hp);
                card.hp -= dmg;
                debug!("Devil's blade: {} dmg to {}.", dmg, card.name());
                if card.hp == 0 {
                    self.remove_card(target, true)?;
                }
            }
            AttrKind::ManaCorrupt => {
                let BattleState { field, rng, .. } = &mut *self.state;
                let Some(target) = field.pick_alive(rng) else {
                    return Ok(());
                };
                let card = &mut field[target];
                let mut dmg = level;
                if card.has(AttrKind::Reflection) || card.has(AttrKind::Immunity) {
                    dmg *= 3;
                }
                let dmg = dmg.min(card.hp);
                card.hp -= dmg;
                debug!("Mana corrupt: {} dmg to {}.", dmg, card.name());
                if card.hp == 0 {
                    self.remove_card(target, true)?;
                }
            }
            AttrKind::Destroy => {
                let BattleState { field, rng, .. } = &mut *self.state;
                let Some(target) = field.pick_alive(rng) else {
                    return Ok(());
                };
                let card = &mut field[target];
                debug!("Destroy cast on {}.", card.name());
                if card.resists_removal() {
                    debug!("{} resisted Destroy.", card.name());
                } else {
                    card.hp = 0;
                    self.remove_card(target, true)?;
                }
            }
            AttrKind::FireGod => {
                for card in self.state.field.iter_mut().filter(|card| card.is_alive()) {
                    if card.has(AttrKind::Immunity) {
                        debug!("{} immune to Fire God.", card.name());
                    } else if !card.has(AttrKind::FireGod) {
                        debug!("Fire God cast on {}.", card.name());
                        card.add_attr(attr)?;
                    }
                }
            }
            AttrKind::ToxicClouds => self.toxic_clouds(attr)?,
            AttrKind::Trap => self.trap(level)?,
            _ => {}
        }
        Ok(())
    }

    fn exile_front(&mut self) -> Result<(), CapacityError> {
        let Some(card) = self.state.field.get(0) else {
            return Ok(());
        };
        if !card.is_alive() {
            return Ok(());
        }
        debug!("Exile cast on {}.", card.name());
        if card.resists_removal() {
            debug!("{} resisted Exile.", card.name());
            return Ok(());
        }
        self.remove_card(0, false)
    }

    /// Poisons living field cards left to right. The first immune card
    /// shields everything behind it.
    fn toxic_clouds(&mut self, attr: Attribute) -> Result<(), CapacityError> {
        for index in 0..self.state.field.len() {
            let card = &mut self.state.field[index];
            if !card.is_alive() {
                continue;
            }
            if card.has(AttrKind::Immunity) {
                debug!("{} immune to Toxic Clouds.", card.name());
                break;
            }
            let dmg = attr.level.min(card.hp);
            card.hp -= dmg;
            debug!(
                "Toxic clouds does {} dmg to {} ({} hp left).",
                dmg,
                card.name(),
                card.hp
            );
            if card.hp <= 0 {
                self.remove_card(index, true)?;
            } else if !card.has(AttrKind::ToxicClouds) {
                card.add_attr(attr)?;
            }
        }
        Ok(())
    }

    /// Tries to trap `count` distinct living field cards.
    fn trap(&mut self, count: i32) -> Result<(), CapacityError> {
        let BattleState { field, rng, .. } = &mut *self.state;
        let targets = field.pick_n_alive(rng, count.max(0) as usize);
        for index in targets {
            let roll = rng.roll_percent();
            let card = &mut field[index];
            if card.has(AttrKind::Immunity) {
                debug!("{} not trapped because of immunity.", card.name());
            } else if card.has(AttrKind::Evasion) {
                debug!("{} not trapped because of evasion.", card.name());
            } else if roll < BattleConfig::TRAP_CHANCE {
                card.add_attr(Attribute::flag(AttrKind::TrapBuff))?;
                debug!("{} trapped.", card.name());
            } else {
                debug!("{} not trapped.", card.name());
            }
        }
        Ok(())
    }

    /// Physical hit on the front card, or on the hero when the front slot is
    /// empty or dead. Chain attack echoes a share of the landed damage onto
    /// every living copy of the front card.
    pub(super) fn boss_attack(&mut self, dmg: i32) -> Result<(), CapacityError> {
        debug!("Attack: {} dmg.", dmg);
        let front = match self.state.field.get(0) {
            Some(card) if !card.is_dead() => card.name(),
            _ => return self.damage_player(dmg),
        };

        let landed = self.damage_card(0, dmg)?;
        let Some(level) = self.state.boss.level_of(AttrKind::ChainAttack) else {
            return Ok(());
        };
        if landed <= 0 {
            return Ok(());
        }

        let echo = landed * level / 100;
        for index in 1..self.state.field.len() {
            let card = &self.state.field[index];
            if !card.is_dead() && card.is_alive() && card.name() == front {
                debug!("Chain attack on {} for {} damage.", card.name(), echo);
                self.damage_card(index, echo)?;
            }
        }
        Ok(())
    }
}
