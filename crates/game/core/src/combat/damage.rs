//! Damage reduction and percentage helpers.

use crate::state::{AttrKind, Attributes};

// ============================================================================
// Reduction
// ============================================================================

/// Applies a defender's physical reductions in attribute order.
///
/// Subtracting tags (Parry, Stonewall) floor at zero. Capping tags
/// (Ice Shield, Arctic Freeze) limit the remaining amount to their
/// magnitude, so several caps end at the smallest.
pub fn reduce_physical(attrs: &Attributes, damage: i32) -> i32 {
    attrs.iter().fold(damage, |damage, attr| match attr.kind {
        AttrKind::Parry | AttrKind::Stonewall => (damage - attr.level).max(0),
        AttrKind::IceShield | AttrKind::ArcticFreeze => damage.min(attr.level),
        _ => damage,
    })
}

// ============================================================================
// Arithmetic
// ============================================================================

/// `value * percent / 100` with integer truncation.
pub const fn percent_of(value: i32, percent: i32) -> i32 {
    value * percent / 100
}

/// Splits `damage` against a guard with `guard_hp` remaining.
///
/// Returns `(absorbed, passed_through)`.
pub fn absorb(guard_hp: i32, damage: i32) -> (i32, i32) {
    let absorbed = damage.min(guard_hp).max(0);
    (absorbed, damage - absorbed)
}
