//! Read-only card and rune templates, and the loadout resolved from them.
//!
//! A [`Catalogue`] is built once by a loader and shared by every worker
//! without locking. Battle states borrow templates from it for their whole
//! life.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{BUILTIN_RUNES, CardTemplate, RuneTemplate};

/// Errors raised while resolving a loadout against the catalogue.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadoutError {
    #[error("Couldn't find demon card: {0}")]
    UnknownBoss(String),

    #[error("Unknown card/rune {0}")]
    UnknownEntry(String),

    #[error("Too many cards in deck (max: {max})")]
    TooManyCards { max: usize },

    #[error("Too many runes (max: {max})")]
    TooManyRunes { max: usize },
}

impl GameError for LoadoutError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownBoss(_) => "LOADOUT_UNKNOWN_BOSS",
            Self::UnknownEntry(_) => "LOADOUT_UNKNOWN_ENTRY",
            Self::TooManyCards { .. } => "LOADOUT_TOO_MANY_CARDS",
            Self::TooManyRunes { .. } => "LOADOUT_TOO_MANY_RUNES",
        }
    }
}

/// All known card and rune templates. Names match case-insensitively and
/// the first entry wins on duplicates.
#[derive(Clone, Debug, Default)]
pub struct Catalogue {
    cards: Vec<CardTemplate>,
    runes: Vec<RuneTemplate>,
}

impl Catalogue {
    pub fn new(cards: Vec<CardTemplate>, runes: Vec<RuneTemplate>) -> Self {
        Self { cards, runes }
    }

    /// Catalogue over `cards` using the built-in rune table.
    pub fn with_builtin_runes(cards: Vec<CardTemplate>) -> Self {
        Self::new(cards, BUILTIN_RUNES.to_vec())
    }

    pub fn cards(&self) -> &[CardTemplate] {
        &self.cards
    }

    pub fn runes(&self) -> &[RuneTemplate] {
        &self.runes
    }

    pub fn find_card(&self, name: &str) -> Option<&CardTemplate> {
        self.cards
            .iter()
            .find(|card| card.name.eq_ignore_ascii_case(name))
    }

    pub fn find_rune(&self, name: &str) -> Option<&RuneTemplate> {
        self.runes
            .iter()
            .find(|rune| rune.name.eq_ignore_ascii_case(name))
    }

    /// Resolves a boss name and an ordered list of deck entries. Each entry
    /// is looked up as a card first, then as a rune.
    pub fn resolve<I, S>(&self, boss: &str, entries: I) -> Result<Loadout<'_>, LoadoutError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let boss = self
            .find_card(boss)
            .ok_or_else(|| LoadoutError::UnknownBoss(boss.to_owned()))?;

        let mut deck = ArrayVec::new();
        let mut runes = ArrayVec::new();
        for entry in entries {
            let entry = entry.as_ref();
            if let Some(card) = self.find_card(entry) {
                deck.try_push(card).map_err(|_| LoadoutError::TooManyCards {
                    max: BattleConfig::MAX_CARDS_IN_DECK,
                })?;
            } else if let Some(rune) = self.find_rune(entry) {
                runes.try_push(rune).map_err(|_| LoadoutError::TooManyRunes {
                    max: BattleConfig::MAX_RUNES,
                })?;
            } else {
                return Err(LoadoutError::UnknownEntry(entry.to_owned()));
            }
        }

        Ok(Loadout { boss, deck, runes })
    }
}

/// Boss, deck and runes for a run, borrowed from a [`Catalogue`].
#[derive(Clone, Debug)]
pub struct Loadout<'c> {
    pub boss: &'c CardTemplate,
    pub deck: ArrayVec<&'c CardTemplate, { BattleConfig::MAX_CARDS_IN_DECK }>,
    pub runes: ArrayVec<&'c RuneTemplate, { BattleConfig::MAX_RUNES }>,
}

impl Loadout<'_> {
    /// Sum of deck card costs; drives the cooldown between fights.
    pub fn deck_cost(&self) -> i32 {
        self.deck.iter().map(|card| card.cost).sum()
    }
}
