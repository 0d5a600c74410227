//! Generic `(kind, level)` tags carried by combatants.
//!
//! The same tag space describes innate abilities and inflicted buffs/debuffs.
//! Which combatant holds a tag decides its meaning: `FireGod` on the boss is
//! the ability, `FireGod` on a player card is the burn it inflicted.

use arrayvec::ArrayVec;
use strum::{AsRefStr, Display, EnumString};

use crate::config::BattleConfig;
use crate::state::CardClass;

/// Every ability, buff, debuff and rune effect the engine understands.
///
/// Catalogue spellings are parsed case-insensitively through [`core::str::FromStr`].
/// Internal tags parse as well but are rejected by catalogue loaders via
/// [`AttrKind::is_catalogue_ability`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttrKind {
    /// Placeholder entry; filtered out whenever a card is reset.
    None,

    // ========================================================================
    // Card abilities
    // ========================================================================
    AdvancedStrike,
    Backstab,
    Bite,
    Bloodsucker,
    Bloodthirsty,
    ChainAttack,
    Concentrate,
    Counterattack,
    Craze,
    Curse,
    #[strum(to_string = "D_Prayer")]
    DPrayer,
    #[strum(to_string = "D_Reanimate")]
    DReanimate,
    #[strum(to_string = "D_Reincarnate")]
    DReincarnate,
    Damnation,
    Destroy,
    Dexterity,
    Dodge,
    Evasion,
    Exile,
    FireGod,
    Forest,
    #[strum(to_string = "Forest Force")]
    ForestAtk,
    #[strum(to_string = "Forest Guard")]
    ForestHp,
    Guard,
    Healing,
    HotChase,
    IceShield,
    Immunity,
    Lacerate,
    ManaCorrupt,
    Mania,
    Mtn,
    #[strum(to_string = "Mtn Force")]
    MtnAtk,
    #[strum(to_string = "Mtn Guard")]
    MtnHp,
    Obstinacy,
    Parry,
    Prayer,
    #[strum(to_string = "QS_Prayer")]
    QsPrayer,
    #[strum(to_string = "QS_Regenerate")]
    QsRegenerate,
    #[strum(to_string = "QS_Reincarnate")]
    QsReincarnate,
    Reanimate,
    Reflection,
    Regenerate,
    Reincarnate,
    Rejuvenate,
    Resistance,
    Resurrection,
    Retaliation,
    Sacrifice,
    Snipe,
    Swamp,
    #[strum(to_string = "Swamp Force")]
    SwampAtk,
    #[strum(to_string = "Swamp Guard")]
    SwampHp,
    ToxicClouds,
    Trap,
    Tundra,
    #[strum(to_string = "Tundra Force")]
    TundraAtk,
    #[strum(to_string = "Tundra Guard")]
    TundraHp,
    Vendetta,
    Warpath,
    WickedLeech,

    // ========================================================================
    // Internal states (applied by the engine, never parsed from a catalogue)
    // ========================================================================
    Dead,
    #[strum(to_string = "Backstab Buff")]
    BackstabBuff,
    #[strum(to_string = "Forest Force Buff")]
    ForestAtkBuff,
    #[strum(to_string = "Forest Guard Buff")]
    ForestHpBuff,
    #[strum(to_string = "Mtn Force Buff")]
    MtnAtkBuff,
    #[strum(to_string = "Mtn Guard Buff")]
    MtnHpBuff,
    #[strum(to_string = "Swamp Force Buff")]
    SwampAtkBuff,
    #[strum(to_string = "Swamp Guard Buff")]
    SwampHpBuff,
    #[strum(to_string = "Tundra Force Buff")]
    TundraAtkBuff,
    #[strum(to_string = "Tundra Guard Buff")]
    TundraHpBuff,
    #[strum(to_string = "Lacerated")]
    LacerateBuff,
    #[strum(to_string = "Trapped")]
    TrapBuff,
    #[strum(to_string = "Reanimation Sickness")]
    ReanimSickness,

    // ========================================================================
    // Rune effects
    // ========================================================================
    ArcticFreeze,
    BloodStone,
    ClearSpring,
    FrostBite,
    RedValley,
    Lore,
    Leaf,
    Revival,
    FireForge,
    Stonewall,
    SpringBreeze,
    ThunderShield,
    NimbleSoul,
    Dirt,
    FlyingStone,
    Tsunami,
}

/// Which stat a class buff raises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuffStat {
    /// Raises attack and the attack baseline.
    Attack,
    /// Raises hp and max hp.
    HitPoints,
}

impl AttrKind {
    /// True for tags that a card or boss may carry in the catalogue.
    pub const fn is_catalogue_ability(self) -> bool {
        !self.is_internal() && !self.is_rune_effect()
    }

    pub const fn is_internal(self) -> bool {
        matches!(
            self,
            Self::Dead
                | Self::BackstabBuff
                | Self::ForestAtkBuff
                | Self::ForestHpBuff
                | Self::MtnAtkBuff
                | Self::MtnHpBuff
                | Self::SwampAtkBuff
                | Self::SwampHpBuff
                | Self::TundraAtkBuff
                | Self::TundraHpBuff
                | Self::LacerateBuff
                | Self::TrapBuff
                | Self::ReanimSickness
        )
    }

    pub const fn is_rune_effect(self) -> bool {
        matches!(
            self,
            Self::ArcticFreeze
                | Self::BloodStone
                | Self::ClearSpring
                | Self::FrostBite
                | Self::RedValley
                | Self::Lore
                | Self::Leaf
                | Self::Revival
                | Self::FireForge
                | Self::Stonewall
                | Self::SpringBreeze
                | Self::ThunderShield
                | Self::NimbleSoul
                | Self::Dirt
                | Self::FlyingStone
                | Self::Tsunami
        )
    }

    /// For a class "force"/"guard" ability, the class it targets and the buff
    /// tag it places on other cards.
    pub const fn class_broadcast(self) -> Option<(CardClass, AttrKind)> {
        match self {
            Self::ForestAtk => Some((CardClass::Forest, Self::ForestAtkBuff)),
            Self::ForestHp => Some((CardClass::Forest, Self::ForestHpBuff)),
            Self::MtnAtk => Some((CardClass::Mountain, Self::MtnAtkBuff)),
            Self::MtnHp => Some((CardClass::Mountain, Self::MtnHpBuff)),
            Self::SwampAtk => Some((CardClass::Swamp, Self::SwampAtkBuff)),
            Self::SwampHp => Some((CardClass::Swamp, Self::SwampHpBuff)),
            Self::TundraAtk => Some((CardClass::Tundra, Self::TundraAtkBuff)),
            Self::TundraHp => Some((CardClass::Tundra, Self::TundraHpBuff)),
            _ => None,
        }
    }

    /// The stat moved in lockstep with a class buff tag, if this is one.
    pub const fn buff_stat(self) -> Option<BuffStat> {
        match self {
            Self::ForestAtkBuff | Self::MtnAtkBuff | Self::SwampAtkBuff | Self::TundraAtkBuff => {
                Some(BuffStat::Attack)
            }
            Self::ForestHpBuff | Self::MtnHpBuff | Self::SwampHpBuff | Self::TundraHpBuff => {
                Some(BuffStat::HitPoints)
            }
            _ => None,
        }
    }
}

/// One tag with its magnitude (flat amount, percent, or count).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub kind: AttrKind,
    pub level: i32,
}

impl Attribute {
    pub const fn new(kind: AttrKind, level: i32) -> Self {
        Self { kind, level }
    }

    /// Tag without a meaningful magnitude.
    pub const fn flag(kind: AttrKind) -> Self {
        Self { kind, level: 0 }
    }
}

impl core::fmt::Display for Attribute {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.level == 0 {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}:{}", self.kind, self.level)
        }
    }
}

/// Which entries [`Attributes::remove`] should drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelMatch {
    /// The first entry of the kind with exactly this level.
    Exact(i32),
    /// Every entry of the kind.
    Any,
}

/// Returned when an attribute list is already at capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributesFull;

/// Ordered, fixed-capacity attribute list.
///
/// Entries are not unique per kind. Insertion order is preserved and drives
/// ability dispatch order; lookups report the first matching entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    entries: ArrayVec<Attribute, { BattleConfig::MAX_ATTRIBUTES }>,
}

impl Attributes {
    pub const fn new() -> Self {
        Self {
            entries: ArrayVec::new_const(),
        }
    }

    /// Level of the first entry of `kind`, if any.
    pub fn level_of(&self, kind: AttrKind) -> Option<i32> {
        self.entries
            .iter()
            .find(|attr| attr.kind == kind)
            .map(|attr| attr.level)
    }

    pub fn has(&self, kind: AttrKind) -> bool {
        self.entries.iter().any(|attr| attr.kind == kind)
    }

    /// Appends an entry. A full list is a capacity defect, never silently
    /// dropped.
    pub fn add(&mut self, attr: Attribute) -> Result<(), AttributesFull> {
        self.entries.try_push(attr).map_err(|_| AttributesFull)
    }

    /// Removes matching entries, closing gaps without reordering the rest.
    pub fn remove(&mut self, kind: AttrKind, level: LevelMatch) {
        match level {
            LevelMatch::Any => self.entries.retain(|attr| attr.kind != kind),
            LevelMatch::Exact(level) => {
                if let Some(pos) = self
                    .entries
                    .iter()
                    .position(|attr| attr.kind == kind && attr.level == level)
                {
                    self.entries.remove(pos);
                }
            }
        }
    }

    /// Entry at `index`, used by dispatch loops that re-read the list after
    /// every step because handlers may mutate it.
    pub fn get(&self, index: usize) -> Option<Attribute> {
        self.entries.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
