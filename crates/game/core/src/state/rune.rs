//! Rune templates and per-battle charge tracking.

use std::borrow::Cow;

use crate::state::{AttrKind, Attribute};

/// Immutable rune description.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuneTemplate {
    pub name: Cow<'static, str>,
    /// Tag granted to field cards (or, for instant runes, the effect and its
    /// magnitude).
    pub effect: Attribute,
    pub max_charges: i32,
}

impl RuneTemplate {
    pub const fn new(name: &'static str, kind: AttrKind, level: i32, max_charges: i32) -> Self {
        Self {
            name: Cow::Borrowed(name),
            effect: Attribute::new(kind, level),
            max_charges,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Runes known without any data file.
pub static BUILTIN_RUNES: [RuneTemplate; 16] = [
    RuneTemplate::new("Arctic Freeze", AttrKind::ArcticFreeze, 100, 3),
    RuneTemplate::new("Blood Stone", AttrKind::BloodStone, 270, 5),
    RuneTemplate::new("Clear Spring", AttrKind::ClearSpring, 225, 4),
    RuneTemplate::new("Frost Bite", AttrKind::FrostBite, 140, 3),
    RuneTemplate::new("Red Valley", AttrKind::RedValley, 90, 5),
    RuneTemplate::new("Lore", AttrKind::Lore, 150, 4),
    RuneTemplate::new("Leaf", AttrKind::Leaf, 240, 4),
    RuneTemplate::new("Revival", AttrKind::Revival, 120, 4),
    RuneTemplate::new("Fire Forge", AttrKind::FireForge, 210, 4),
    RuneTemplate::new("Stonewall", AttrKind::Stonewall, 180, 4),
    RuneTemplate::new("Spring Breeze", AttrKind::SpringBreeze, 240, 4),
    RuneTemplate::new("Thunder Shield", AttrKind::ThunderShield, 200, 4),
    RuneTemplate::new("Nimble Soul", AttrKind::NimbleSoul, 65, 3),
    RuneTemplate::new("Dirt", AttrKind::Dirt, 70, 4),
    RuneTemplate::new("Flying Stone", AttrKind::FlyingStone, 270, 4),
    RuneTemplate::new("Tsunami", AttrKind::Tsunami, 80, 4),
];

/// A rune equipped for one battle.
#[derive(Clone, Debug)]
pub struct Rune<'c> {
    template: &'c RuneTemplate,
    pub charges_used: i32,
    /// Set when the rune granted a standing buff this round; the buff is
    /// withdrawn at the start of the next player phase.
    pub active: bool,
}

impl<'c> Rune<'c> {
    pub fn new(template: &'c RuneTemplate) -> Self {
        Self {
            template,
            charges_used: 0,
            active: false,
        }
    }

    pub fn template(&self) -> &'c RuneTemplate {
        self.template
    }

    pub fn name(&self) -> &'c str {
        &self.template.name
    }

    pub fn effect(&self) -> Attribute {
        self.template.effect
    }

    pub fn has_charges(&self) -> bool {
        self.charges_used < self.template.max_charges
    }
}
