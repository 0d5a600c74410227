//! Rune table loader.
//!
//! A `runes.ron` file replaces the built-in rune table:
//!
//! ```ron
//! RuneTable(
//!     runes: [
//!         (name: "Leaf", effect: (kind: Leaf, level: 240), max_charges: 4),
//!         (name: "Blood Stone", effect: (kind: BloodStone, level: 270), max_charges: 5),
//!     ],
//! )
//! ```

use std::path::Path;

use anyhow::{anyhow, bail};
use battle_core::RuneTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Rune table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuneTable {
    pub runes: Vec<RuneTemplate>,
}

/// Loader for rune tables from RON files.
pub struct RuneLoader;

impl RuneLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<RuneTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow!("Failed to parse rune table {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<RuneTemplate>> {
        let table: RuneTable =
            ron::from_str(content).map_err(|e| anyhow!("Failed to parse rune RON: {}", e))?;

        for rune in &table.runes {
            if rune.name().is_empty() {
                bail!("Rune with empty name");
            }
            if !rune.effect.kind.is_rune_effect() {
                bail!("{}: {} is not a rune effect", rune.name(), rune.effect.kind);
            }
            if rune.max_charges <= 0 {
                bail!("{}: charges must be positive", rune.name());
            }
        }
        Ok(table.runes)
    }
}
