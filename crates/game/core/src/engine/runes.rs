//! Rune activation and expiry.
//!
//! Each rune kind maps to a [`Trigger`] checked at the start of every player
//! phase and an [`Effect`] applied when it holds. Standing buffs last one
//! round and are stripped before the next evaluation.

use tracing::{debug, trace};

use super::BattleEngine;
use crate::state::{AttrKind, Attribute, CapacityError, CardClass, LevelMatch, RosterKind};

/// Activation predicate of a rune.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Trigger {
    /// More than `above` cards of `class` in `roster`.
    ClassCount {
        roster: RosterKind,
        class: CardClass,
        above: usize,
    },
    /// Round number strictly above the value.
    RoundAbove(i32),
    /// Hero below half of maximum hp.
    HeroWounded,
}

/// What a rune does once triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Effect {
    /// Tags every field card with the rune attribute for one round.
    FieldBuff,
    /// Heals every field card; needs a damaged living card.
    FieldHeal,
    /// Damages the boss directly.
    BossDamage,
    /// Field buff that also raises hp and max hp; needs a non-empty field.
    Bloom,
}

const fn rule(kind: AttrKind) -> Option<(Trigger, Effect)> {
    use CardClass::{Forest, Mountain, Swamp, Tundra};
    use RosterKind::{Field, Grave, Hand};

    const fn count(roster: RosterKind, class: CardClass, above: usize) -> Trigger {
        Trigger::ClassCount {
            roster,
            class,
            above,
        }
    }

    let rule = match kind {
        AttrKind::ArcticFreeze => (count(Grave, Tundra, 2), Effect::FieldBuff),
        AttrKind::BloodStone => (count(Field, Mountain, 1), Effect::FieldBuff),
        AttrKind::ClearSpring => (count(Field, Tundra, 1), Effect::FieldHeal),
        AttrKind::FrostBite => (count(Grave, Tundra, 3), Effect::FieldBuff),
        AttrKind::RedValley => (count(Field, Swamp, 1), Effect::FieldBuff),
        AttrKind::Lore => (count(Grave, Mountain, 2), Effect::FieldBuff),
        AttrKind::Leaf => (Trigger::RoundAbove(14), Effect::BossDamage),
        AttrKind::Revival => (count(Grave, Forest, 1), Effect::FieldBuff),
        AttrKind::FireForge => (count(Grave, Mountain, 1), Effect::FieldBuff),
        AttrKind::Stonewall => (count(Field, Swamp, 1), Effect::FieldBuff),
        AttrKind::SpringBreeze => (count(Hand, Forest, 1), Effect::Bloom),
        AttrKind::ThunderShield => (count(Field, Forest, 1), Effect::FieldBuff),
        AttrKind::NimbleSoul => (count(Grave, Forest, 2), Effect::FieldBuff),
        AttrKind::Dirt => (count(Grave, Swamp, 1), Effect::FieldBuff),
        AttrKind::FlyingStone => (count(Grave, Swamp, 2), Effect::FieldBuff),
        AttrKind::Tsunami => (Trigger::HeroWounded, Effect::FieldBuff),
        _ => return None,
    };
    Some(rule)
}

impl BattleEngine<'_, '_> {
    /// Expires last round's standing buffs, then fires every rune whose
    /// trigger holds and that has charges left.
    pub(super) fn handle_runes(&mut self) -> Result<(), CapacityError> {
        for slot in 0..self.state.runes.len() {
            let rune = &mut self.state.runes[slot];
            if rune.active {
                rune.active = false;
                let effect = rune.effect();
                self.expire_rune(effect);
            }
        }

        for slot in 0..self.state.runes.len() {
            let rune = &self.state.runes[slot];
            if !rune.has_charges() {
                continue;
            }
            let name = rune.name();
            let effect = rune.effect();
            let Some((trigger, kind)) = rule(effect.kind) else {
                continue;
            };
            if !self.trigger_holds(trigger) {
                continue;
            }
            let Some(stands) = self.apply_rune(name, effect, kind)? else {
                continue;
            };

            let rune = &mut self.state.runes[slot];
            rune.charges_used += 1;
            rune.active = stands;
        }
        Ok(())
    }

    fn trigger_holds(&self, trigger: Trigger) -> bool {
        let state = &*self.state;
        match trigger {
            Trigger::ClassCount {
                roster,
                class,
                above,
            } => state.roster(roster).count_with(class.marker()) > above,
            Trigger::RoundAbove(round) => state.round > round,
            Trigger::HeroWounded => state.hp < state.max_hp / 2,
        }
    }

    /// Applies a triggered rune. Returns `None` when a secondary condition
    /// fails and no charge is spent, otherwise whether the effect stands
    /// until next round.
    fn apply_rune(
        &mut self,
        name: &str,
        effect: Attribute,
        kind: Effect,
    ) -> Result<Option<bool>, CapacityError> {
        match kind {
            Effect::FieldBuff => {
                trace!("{} activated.", name);
                for card in self.state.field.iter_mut() {
                    card.add_attr(effect)?;
                }
                Ok(Some(true))
            }
            Effect::FieldHeal => {
                let damaged = self
                    .state
                    .field
                    .iter()
                    .any(|card| card.hp != 0 && card.hp < card.max_hp);
                if !damaged {
                    trace!("{} skipped because no cards damaged.", name);
                    return Ok(None);
                }
                trace!("{} activated.", name);
                self.regenerate(name, effect.level);
                Ok(Some(false))
            }
            Effect::BossDamage => {
                debug!("{}: {} dmg", name, effect.level);
                self.hit_boss(effect.level);
                Ok(Some(false))
            }
            Effect::Bloom => {
                if self.state.field.is_empty() {
                    return Ok(None);
                }
                trace!("{} activated.", name);
                for card in self.state.field.iter_mut() {
                    card.add_attr(effect)?;
                    card.hp += effect.level;
                    card.max_hp += effect.level;
                    debug!(
                        "{} increases hp of {} by {} (to {}).",
                        name,
                        card.name(),
                        effect.level,
                        card.hp
                    );
                }
                Ok(Some(true))
            }
        }
    }

    /// Strips a standing rune buff from the field. Bloom also gives back the
    /// hp it granted, clamped to the reduced maximum.
    fn expire_rune(&mut self, effect: Attribute) {
        let bloom = matches!(rule(effect.kind), Some((_, Effect::Bloom)));
        if bloom {
            debug!("{} ended.", effect.kind);
        }
        for card in self.state.field.iter_mut() {
            if !card.has(effect.kind) {
                continue;
            }
            card.attrs.remove(effect.kind, LevelMatch::Any);
            if bloom {
                let old_hp = card.hp;
                card.max_hp -= effect.level;
                card.hp = card.hp.min(card.max_hp);
                if card.hp != old_hp {
                    debug!(
                        "{} ended, hp of {} dropped by {} (to {}).",
                        effect.kind,
                        card.name(),
                        old_hp - card.hp,
                        card.hp
                    );
                }
            }
        }
    }
}
