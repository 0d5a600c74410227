//! Card catalogue loader.
//!
//! One card per line:
//!
//! ```text
//! # name, cost, timing, attack, hp, abilities...
//! Fire Demon, 1, 1, 600, 20000000, CURSE:180, FIRE GOD:60, TRAP:2
//! Treant, 12, 4, 315, 1050, FOREST, REGENERATE:120
//! ```
//!
//! Cost, timing, attack and hp must be positive. An ability without a
//! `:level` suffix has level 0. Bosses are ordinary entries.

use std::path::Path;

use anyhow::{anyhow, bail};
use battle_core::{AttrKind, BattleConfig, CardTemplate};
use tracing::debug;

use crate::loaders::{LoadResult, data_lines, read_file};

/// Loader for the comma-separated card catalogue.
pub struct CardLoader;

impl CardLoader {
    /// Highest number of abilities a catalogue entry may list.
    pub const MAX_ABILITIES: usize = BattleConfig::MAX_ATTRIBUTES - 1;

    /// Load every card from a catalogue file.
    pub fn load(path: &Path) -> LoadResult<Vec<CardTemplate>> {
        let content = read_file(path)?;
        let cards = Self::parse(&content)
            .map_err(|e| anyhow!("Failed to parse card catalogue {}: {}", path.display(), e))?;
        debug!(count = cards.len(), path = %path.display(), "loaded card catalogue");
        Ok(cards)
    }

    /// Parse catalogue text. Errors name the offending line.
    pub fn parse(content: &str) -> LoadResult<Vec<CardTemplate>> {
        data_lines(content)
            .map(|(line_no, line)| {
                Self::parse_line(line).map_err(|e| anyhow!("line {}: {}", line_no, e))
            })
            .collect()
    }

    fn parse_line(line: &str) -> LoadResult<CardTemplate> {
        let mut fields = line.split(',').map(str::trim);

        let name = fields.next().filter(|name| !name.is_empty());
        let Some(name) = name else {
            bail!("Bad card description: {}", line);
        };

        let mut stat = |label: &str| -> LoadResult<i32> {
            let Some(field) = fields.next() else {
                bail!("Bad card description: {} (missing {})", name, label);
            };
            match field.parse::<i32>() {
                Ok(value) if value > 0 => Ok(value),
                _ => bail!("Bad {}: {}", label, field),
            }
        };
        let cost = stat("cost")?;
        let timing = stat("timing")?;
        let attack = stat("attack")?;
        let hp = stat("hp")?;

        let mut card = CardTemplate::new(name.to_owned(), cost, timing, attack, hp);
        for field in fields.filter(|field| !field.is_empty()) {
            let (ability, level) = match field.split_once(':') {
                Some((ability, level)) => {
                    let level = level
                        .trim()
                        .parse::<i32>()
                        .map_err(|_| anyhow!("Bad level for {}: {}", ability.trim(), level))?;
                    (ability.trim(), level)
                }
                None => (field, 0),
            };
            let kind = ability
                .parse::<AttrKind>()
                .ok()
                .filter(|kind| kind.is_catalogue_ability())
                .ok_or_else(|| anyhow!("Bad attribute: {} not found", ability))?;

            if card.base_attrs.len() >= Self::MAX_ABILITIES {
                bail!(
                    "Too many abilities on {} (max: {})",
                    name,
                    Self::MAX_ABILITIES
                );
            }
            card = card.try_with_attr(kind, level)?;
        }
        Ok(card)
    }
}
