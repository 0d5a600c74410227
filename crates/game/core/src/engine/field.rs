//! Field entry, removal and class buff propagation.

use tracing::debug;

use super::BattleEngine;
use crate::combat::percent_of;
use crate::config::BattleConfig;
use crate::rng::RandomStream;
use crate::state::{
    AttrKind, Attribute, BattleState, BuffStat, CapacityError, Card, CardClass, LevelMatch,
    RosterKind,
};

impl BattleEngine<'_, '_> {
    // ========================================================================
    // Removal
    // ========================================================================

    /// Takes the field card at `index` out of play.
    ///
    /// The card is marked dead, withdraws the class buffs it granted, fires
    /// its desperation abilities (graveyard only), and a fresh copy lands in
    /// the graveyard, the hand or deck on a resurrection roll, or a random
    /// deck position when exiled. The slot keeps an inert placeholder until
    /// the phase ends.
    pub(super) fn remove_card(&mut self, index: usize, to_grave: bool) -> Result<(), CapacityError> {
        let card = &mut self.state.field[index];
        card.hp = 0;
        card.add_attr(Attribute::flag(AttrKind::Dead))?;

        let mut i = 0;
        while let Some(attr) = self.state.field[index].attrs.get(i) {
            i += 1;
            if let Some((_, buff)) = attr.kind.class_broadcast() {
                self.remove_buff_from_field(index, buff, attr.level);
                continue;
            }
            if !to_grave {
                continue;
            }
            match attr.kind {
                AttrKind::DPrayer => self.prayer(attr.level),
                AttrKind::DReanimate => self.reanimate("Desperation: Reanimated")?,
                AttrKind::DReincarnate => {
                    self.reincarnate("Desperation: Reincarnated", attr.level)?
                }
                _ => {}
            }
        }

        let BattleState {
            field,
            hand,
            deck,
            grave,
            rng,
            ..
        } = &mut *self.state;
        let card = &field[index];
        let name = card.name();
        let copy = card.recycled();

        if to_grave {
            debug!("{} died.", name);
            let mut destination = RosterKind::Grave;
            for (kind, label) in [(AttrKind::Dirt, " (Dirt)"), (AttrKind::Resurrection, "")] {
                let Some(chance) = card.level_of(kind) else {
                    continue;
                };
                if rng.chance(chance) {
                    if hand.len() >= BattleConfig::MAX_CARDS_IN_HAND {
                        debug!("{} resurrected{} to deck because hand is full.", name, label);
                        destination = RosterKind::Deck;
                    } else {
                        debug!("{} resurrected{}.", name, label);
                        destination = RosterKind::Hand;
                    }
                }
            }
            match destination {
                RosterKind::Hand => hand.push(copy)?,
                RosterKind::Deck => deck.push(copy)?,
                _ => grave.push(copy)?,
            }
        } else {
            debug!("{} exiled.", name);
            deck.insert_random(rng, copy)?;
        }

        self.state.field[index] = Card::dead_placeholder();
        Ok(())
    }

    // ========================================================================
    // Entry
    // ========================================================================

    /// Entry triggers for the card just placed at `index`.
    pub(super) fn card_played_to_field(&mut self, index: usize) -> Result<(), CapacityError> {
        let card = &mut self.state.field[index];
        let name = card.name();

        if let Some(level) = card.level_of(AttrKind::Obstinacy) {
            debug!("Obstinacy: -{} hp", level);
            self.state.hp -= level;
        }

        let card = &mut self.state.field[index];
        if let Some(level) = card.level_of(AttrKind::Backstab) {
            card.atk += level;
            debug!("{} backstab +{} attack (now {}).", name, level, card.atk);
            card.add_attr(Attribute::new(AttrKind::BackstabBuff, level))?;
        }

        let card = &self.state.field[index];
        let quick_prayer = card.level_of(AttrKind::QsPrayer);
        let quick_regenerate = card.level_of(AttrKind::QsRegenerate);
        let quick_reincarnate = card.level_of(AttrKind::QsReincarnate);
        let sacrifice = card.level_of(AttrKind::Sacrifice);

        if let Some(level) = quick_prayer {
            self.prayer(level);
        }
        if let Some(level) = quick_regenerate {
            self.regenerate(name, level);
        }
        if let Some(level) = quick_reincarnate {
            self.reincarnate("QS Reincarnated", level)?;
        }
        if let Some(level) = sacrifice {
            self.sacrifice(index, level)?;
        }

        self.receive_class_buffs(index)?;
        self.broadcast_class_buffs(index)
    }

    /// Consumes another living field card to grow the card at `index`.
    fn sacrifice(&mut self, index: usize, level: i32) -> Result<(), CapacityError> {
        let BattleState { field, rng, .. } = &mut *self.state;
        let Some(victim) = field.pick_where(rng, |i, card| i != index && card.is_alive()) else {
            return Ok(());
        };

        let victim_name = field[victim].name();
        if field[victim].has(AttrKind::Immunity) {
            debug!(
                "{} attempts to sacrifice {} but fails.",
                field[index].name(),
                victim_name
            );
            return Ok(());
        }

        let card = &mut field[index];
        let atk_gain = percent_of(card.atk, level);
        let hp_gain = percent_of(card.hp, level);
        card.atk += atk_gain;
        card.base_atk += atk_gain;
        card.hp += hp_gain;
        card.max_hp += hp_gain;
        debug!(
            "{} sacrifices {}.  Atk +{} (now {}).  Hp +{} (now {}).",
            card.name(),
            victim_name,
            atk_gain,
            card.atk,
            hp_gain,
            card.hp
        );

        field[victim].hp = 0;
        self.remove_card(victim, true)
    }

    /// The entering card picks up guard/force buffs from same-class cards
    /// already on the field.
    fn receive_class_buffs(&mut self, index: usize) -> Result<(), CapacityError> {
        let Some(class) = self.state.field[index].class() else {
            return Ok(());
        };
        for source in 0..self.state.field.len() {
            if source == index {
                continue;
            }
            let giver = &self.state.field[source];
            let hp = giver.level_of(class.hp_ability());
            let atk = giver.level_of(class.atk_ability());
            if let Some(level) = hp {
                self.add_buff_to_card(source, index, class.hp_buff(), level)?;
            }
            if let Some(level) = atk {
                self.add_buff_to_card(source, index, class.atk_buff(), level)?;
            }
        }
        Ok(())
    }

    /// The entering card grants its own guard/force buffs to the others.
    fn broadcast_class_buffs(&mut self, index: usize) -> Result<(), CapacityError> {
        let mut i = 0;
        while let Some(attr) = self.state.field[index].attrs.get(i) {
            i += 1;
            if let Some((class, buff)) = attr.kind.class_broadcast() {
                self.add_buff_to_field(index, Some(class), buff, attr.level)?;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Class buffs
    // ========================================================================

    /// Adds `buff` to one card, moving the matching stat in lockstep.
    pub(super) fn add_buff_to_card(
        &mut self,
        source: usize,
        target: usize,
        buff: AttrKind,
        level: i32,
    ) -> Result<(), CapacityError> {
        let source_name = self.state.field[source].name();
        let card = &mut self.state.field[target];
        match buff.buff_stat() {
            Some(BuffStat::HitPoints) => {
                card.hp += level;
                card.max_hp += level;
                debug!("{} increases hp of {} by {}.", source_name, card.name(), level);
            }
            Some(BuffStat::Attack) => {
                card.atk += level;
                card.base_atk += level;
                debug!(
                    "{} increases atk and base atk of {} by {} (now {}).",
                    source_name,
                    card.name(),
                    level,
                    card.atk
                );
            }
            None => {}
        }
        card.add_attr(Attribute::new(buff, level))
    }

    /// Adds `buff` to every other field card of `class` (every card when
    /// `class` is `None`).
    pub(super) fn add_buff_to_field(
        &mut self,
        source: usize,
        class: Option<CardClass>,
        buff: AttrKind,
        level: i32,
    ) -> Result<(), CapacityError> {
        for target in 0..self.state.field.len() {
            if target == source {
                continue;
            }
            let card = &self.state.field[target];
            if class.is_none_or(|class| card.has(class.marker())) {
                self.add_buff_to_card(source, target, buff, level)?;
            }
        }
        Ok(())
    }

    /// Reverses [`Self::add_buff_to_field`] for one source.
    ///
    /// Only cards still carrying the exact `(buff, level)` entry are touched.
    /// Hit points are clamped to the reduced maximum; attack floors at zero.
    pub(super) fn remove_buff_from_field(&mut self, source: usize, buff: AttrKind, level: i32) {
        let entry = Attribute::new(buff, level);
        for (target, card) in self.state.field.iter_mut().enumerate() {
            if target == source || !card.attrs.iter().any(|attr| *attr == entry) {
                continue;
            }
            card.attrs.remove(buff, LevelMatch::Exact(level));
            match buff.buff_stat() {
                Some(BuffStat::HitPoints) => {
                    let old_hp = card.hp;
                    card.max_hp -= level;
                    card.hp = card.hp.min(card.max_hp);
                    debug!(
                        "Hp buff removed: {} loses {} max hp and {} hp (now {})",
                        card.name(),
                        level,
                        old_hp - card.hp,
                        card.hp
                    );
                }
                Some(BuffStat::Attack) => {
                    card.atk = (card.atk - level).max(0);
                    card.base_atk = (card.base_atk - level).max(0);
                    debug!(
                        "Atk buff removed: {} loses {} atk and base atk (now {})",
                        card.name(),
                        level,
                        card.atk
                    );
                }
                None => {}
            }
        }
    }
}
