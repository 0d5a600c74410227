//! Card templates and their mutable battle state.

use std::borrow::Cow;

use arrayvec::ArrayVec;
use strum::Display;

use crate::config::BattleConfig;
use crate::state::{AttrKind, Attribute, Attributes, AttributesFull, CapacityError};

/// Elemental class of a card. A card belongs to the first class it carries
/// in the order Tundra, Forest, Mountain, Swamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardClass {
    Tundra,
    Forest,
    Mountain,
    Swamp,
}

impl CardClass {
    pub const ALL: [CardClass; 4] = [Self::Tundra, Self::Forest, Self::Mountain, Self::Swamp];

    /// Tag that marks a card as a member of this class.
    pub const fn marker(self) -> AttrKind {
        match self {
            Self::Tundra => AttrKind::Tundra,
            Self::Forest => AttrKind::Forest,
            Self::Mountain => AttrKind::Mtn,
            Self::Swamp => AttrKind::Swamp,
        }
    }

    /// "Guard" ability granting max hp to same-class cards.
    pub const fn hp_ability(self) -> AttrKind {
        match self {
            Self::Tundra => AttrKind::TundraHp,
            Self::Forest => AttrKind::ForestHp,
            Self::Mountain => AttrKind::MtnHp,
            Self::Swamp => AttrKind::SwampHp,
        }
    }

    /// "Force" ability granting attack to same-class cards.
    pub const fn atk_ability(self) -> AttrKind {
        match self {
            Self::Tundra => AttrKind::TundraAtk,
            Self::Forest => AttrKind::ForestAtk,
            Self::Mountain => AttrKind::MtnAtk,
            Self::Swamp => AttrKind::SwampAtk,
        }
    }

    pub const fn hp_buff(self) -> AttrKind {
        match self {
            Self::Tundra => AttrKind::TundraHpBuff,
            Self::Forest => AttrKind::ForestHpBuff,
            Self::Mountain => AttrKind::MtnHpBuff,
            Self::Swamp => AttrKind::SwampHpBuff,
        }
    }

    pub const fn atk_buff(self) -> AttrKind {
        match self {
            Self::Tundra => AttrKind::TundraAtkBuff,
            Self::Forest => AttrKind::ForestAtkBuff,
            Self::Mountain => AttrKind::MtnAtkBuff,
            Self::Swamp => AttrKind::SwampAtkBuff,
        }
    }
}

/// Immutable description of a card as listed in the catalogue.
///
/// Bosses are ordinary templates; their abilities are read from the same
/// attribute list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardTemplate {
    pub name: Cow<'static, str>,
    pub cost: i32,
    /// Initial cooldown in rounds once the card reaches the hand.
    pub timing: i32,
    pub base_atk: i32,
    pub base_hp: i32,
    pub base_attrs: ArrayVec<Attribute, { BattleConfig::MAX_ATTRIBUTES }>,
}

/// Template behind the inert placeholder left on the field by a removed card.
pub static DEAD_CARD: CardTemplate = CardTemplate {
    name: Cow::Borrowed("Dead Card"),
    cost: 0,
    timing: 0,
    base_atk: 0,
    base_hp: 0,
    base_attrs: ArrayVec::new_const(),
};

impl CardTemplate {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        cost: i32,
        timing: i32,
        base_atk: i32,
        base_hp: i32,
    ) -> Self {
        Self {
            name: name.into(),
            cost,
            timing,
            base_atk,
            base_hp,
            base_attrs: ArrayVec::new(),
        }
    }

    /// Adds a base attribute (builder pattern).
    ///
    /// For hand-built templates. Overflowing the attribute capacity is a
    /// programming error and panics in debug builds; use
    /// [`Self::try_with_attr`] for untrusted input.
    #[must_use]
    pub fn with_attr(mut self, kind: AttrKind, level: i32) -> Self {
        let pushed = self.base_attrs.try_push(Attribute::new(kind, level));
        debug_assert!(pushed.is_ok(), "too many attributes on {}", self.name);
        self
    }

    /// Adds a base attribute, reporting overflow instead of dropping it.
    pub fn try_with_attr(mut self, kind: AttrKind, level: i32) -> Result<Self, CapacityError> {
        match self.base_attrs.try_push(Attribute::new(kind, level)) {
            Ok(()) => Ok(self),
            Err(_) => Err(CapacityError::AttributeOverflow {
                card: self.name.into_owned(),
                max: BattleConfig::MAX_ATTRIBUTES,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A card in battle: template reference plus mutable stats.
#[derive(Clone, Debug)]
pub struct Card<'c> {
    template: &'c CardTemplate,
    /// Remaining cooldown while in hand.
    pub timing: i32,
    pub atk: i32,
    /// Attack baseline used by percentage-scaling abilities.
    pub base_atk: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub attrs: Attributes,
}

impl<'c> Card<'c> {
    /// Creates a card already reset to its template.
    pub fn from_template(template: &'c CardTemplate) -> Self {
        let mut card = Self {
            template,
            timing: 0,
            atk: 0,
            base_atk: 0,
            hp: 0,
            max_hp: 0,
            attrs: Attributes::new(),
        };
        card.reset();
        card
    }

    /// Inert field placeholder, logically dead and carrying only `Dead`.
    pub fn dead_placeholder() -> Self {
        let mut card = Self::from_template(&DEAD_CARD);
        let _ = card.attrs.add(Attribute::flag(AttrKind::Dead));
        card
    }

    /// Copies template stats back and rebuilds the attribute list from the
    /// template, dropping `None` entries.
    pub fn reset(&mut self) {
        let template = self.template;
        self.timing = template.timing;
        self.atk = template.base_atk;
        self.base_atk = template.base_atk;
        self.hp = template.base_hp;
        self.max_hp = template.base_hp;
        self.attrs.clear();
        for attr in template.base_attrs.iter().filter(|a| a.kind != AttrKind::None) {
            // Template lists share the attribute capacity, so this cannot fail.
            let _ = self.attrs.add(*attr);
        }
    }

    /// Fresh copy of this card's template, as sent to a roster on removal.
    pub fn recycled(&self) -> Self {
        Self::from_template(self.template)
    }

    pub fn template(&self) -> &'c CardTemplate {
        self.template
    }

    pub fn name(&self) -> &'c str {
        &self.template.name
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_dead(&self) -> bool {
        self.attrs.has(AttrKind::Dead)
    }

    pub fn level_of(&self, kind: AttrKind) -> Option<i32> {
        self.attrs.level_of(kind)
    }

    pub fn has(&self, kind: AttrKind) -> bool {
        self.attrs.has(kind)
    }

    /// Adds an attribute, reporting overflow as a capacity error naming the
    /// card.
    pub fn add_attr(&mut self, attr: Attribute) -> Result<(), CapacityError> {
        self.attrs
            .add(attr)
            .map_err(|AttributesFull| CapacityError::AttributeOverflow {
                card: self.name().to_owned(),
                max: BattleConfig::MAX_ATTRIBUTES,
            })
    }

    /// Class membership; the first of Tundra, Forest, Mountain, Swamp wins.
    pub fn class(&self) -> Option<CardClass> {
        CardClass::ALL
            .into_iter()
            .find(|class| self.has(class.marker()))
    }

    /// Both immunity-style tags that block removal effects.
    pub fn resists_removal(&self) -> bool {
        self.has(AttrKind::Resistance) || self.has(AttrKind::Immunity)
    }

    /// Hit points missing from the maximum.
    pub fn missing_hp(&self) -> i32 {
        self.max_hp - self.hp
    }

    /// Heals up to `amount` without exceeding max hp; returns the healed
    /// amount.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let healed = amount.min(self.missing_hp());
        if healed > 0 {
            self.hp += healed;
            healed
        } else {
            0
        }
    }
}
