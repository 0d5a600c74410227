//! Catalogue, deck and settings files for the simulator.
//!
//! This crate turns the plain-text and RON/TOML files of a data directory
//! into `battle-core` values:
//! - Card catalogue (`cards.txt`, one comma-separated card per line)
//! - Deck list (`deck.txt`, one card or rune name per line)
//! - Rune table override (`runes.ron`)
//! - Simulation settings (`config.toml`)
//! - Legacy default arguments (`defaults.txt`)
//!
//! Content is resolved once before a run and never mutated afterwards.

pub mod files;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CardLoader, ConfigLoader, ContentFactory, DeckLoader, DefaultsLoader, LoadResult, RuneLoader,
    SimSettings,
};
