//! Default file names inside a data directory.

pub const CARDS: &str = "cards.txt";
pub const DECK: &str = "deck.txt";
pub const RUNES: &str = "runes.ron";
pub const CONFIG: &str = "config.toml";
pub const DEFAULTS: &str = "defaults.txt";
