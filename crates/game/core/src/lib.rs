//! Deterministic battle rules for the demon simulator.
//!
//! `battle-core` defines the attribute model, combatants, rosters, runes and
//! the turn-based [`engine::BattleEngine`] that plays one fight against a
//! boss. It performs no I/O and spawns no threads: loaders build a
//! [`Catalogue`], runners clone a [`BattleState`] per iteration and collect
//! the [`Outcome`] of each fight.
pub mod catalogue;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod level;
pub mod rng;
pub mod state;

pub use catalogue::{Catalogue, Loadout, LoadoutError};
pub use config::BattleConfig;
pub use engine::{BattleEngine, Outcome};
pub use error::{ErrorSeverity, GameError};
pub use level::{MAX_LEVEL, hp_for_level};
pub use rng::{MwcRng, RandomStream};
pub use state::{
    AttrKind, Attribute, BattleState, CapacityError, Card, CardClass, CardTemplate, RosterKind,
    Rune, RuneTemplate, BUILTIN_RUNES,
};
