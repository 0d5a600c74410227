//! Battle state errors.
//!
//! Capacity limits are fixed at compile time. Exceeding one means the
//! catalogue or a constant is wrong, so these errors abort the run.

use strum::Display;

use crate::error::{ErrorSeverity, GameError};

/// The four card containers of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RosterKind {
    Deck,
    Hand,
    Field,
    Grave,
}

/// Errors raised when a fixed-capacity container overflows.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CapacityError {
    /// A card carries too many attributes.
    #[error("Too many attributes on {card} (max: {max})")]
    AttributeOverflow {
        /// Card that overflowed.
        card: String,
        /// Maximum capacity.
        max: usize,
    },

    /// A roster is full.
    #[error("Too many cards in {roster} (max: {max})")]
    RosterFull {
        /// Roster that overflowed.
        roster: RosterKind,
        /// Maximum capacity.
        max: usize,
    },
}

impl GameError for CapacityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AttributeOverflow { .. } => "BATTLE_ATTRIBUTE_OVERFLOW",
            Self::RosterFull { .. } => "BATTLE_ROSTER_FULL",
        }
    }
}
