//! Content factory for loading simulator data from a directory.

use std::path::{Path, PathBuf};

use battle_core::Catalogue;
use tracing::debug;

use crate::files;
use crate::loaders::{
    CardLoader, ConfigLoader, DeckLoader, DefaultsLoader, LoadResult, RuneLoader, SimSettings,
};

/// Content factory that loads all simulator content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── cards.txt      (required)
/// ├── deck.txt       (required unless another deck file is given)
/// ├── runes.ron      (optional, replaces the built-in rune table)
/// ├── config.toml    (optional)
/// └── defaults.txt   (optional)
/// ```
///
/// Relative file names are resolved against the data directory; absolute
/// ones are used as given.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of `file` inside the data directory.
    pub fn resolve(&self, file: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Load the card catalogue together with the rune table.
    pub fn load_catalogue(&self, cards: Option<&Path>) -> LoadResult<Catalogue> {
        let cards = CardLoader::load(&self.resolve(cards.unwrap_or(Path::new(files::CARDS))))?;

        let runes_path = self.resolve(files::RUNES);
        if runes_path.exists() {
            let runes = RuneLoader::load(&runes_path)?;
            debug!(count = runes.len(), "using rune table from {}", runes_path.display());
            Ok(Catalogue::new(cards, runes))
        } else {
            Ok(Catalogue::with_builtin_runes(cards))
        }
    }

    /// Load the ordered deck entries.
    pub fn load_deck(&self, deck: Option<&Path>) -> LoadResult<Vec<String>> {
        DeckLoader::load(&self.resolve(deck.unwrap_or(Path::new(files::DECK))))
    }

    /// Load settings from `config` (default `config.toml`). A missing
    /// default file yields empty settings; a missing explicit file is an
    /// error.
    pub fn load_settings(&self, config: Option<&Path>) -> LoadResult<SimSettings> {
        match config {
            Some(path) => ConfigLoader::load(&self.resolve(path)),
            None => {
                let path = self.resolve(files::CONFIG);
                if path.exists() {
                    ConfigLoader::load(&path)
                } else {
                    Ok(SimSettings::default())
                }
            }
        }
    }

    /// Load the legacy argument line from `defaults.txt`, if present.
    pub fn load_default_args(&self) -> LoadResult<Vec<String>> {
        DefaultsLoader::load(&self.resolve(files::DEFAULTS))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.resolve("deck.txt"), Path::new("/tmp/data/deck.txt"));
        assert_eq!(factory.resolve("/abs/deck.txt"), Path::new("/abs/deck.txt"));
    }

    #[test]
    fn loads_catalogue_deck_and_optional_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("cards.txt"),
            "DarkTitan, 1, 1, 300, 1000000\nImp, 3, 2, 100, 400\n",
        )
        .unwrap();
        fs::write(dir.path().join("deck.txt"), "Imp\nLeaf\n").unwrap();
        let factory = ContentFactory::new(dir.path());

        let catalogue = factory.load_catalogue(None).unwrap();
        assert_eq!(catalogue.cards().len(), 2);
        assert!(catalogue.find_rune("leaf").is_some());

        let deck = factory.load_deck(None).unwrap();
        let loadout = catalogue.resolve("DarkTitan", &deck).unwrap();
        assert_eq!(loadout.deck.len(), 1);
        assert_eq!(loadout.runes.len(), 1);

        assert_eq!(factory.load_settings(None).unwrap(), SimSettings::default());
        assert!(factory.load_settings(Some(Path::new("other.toml"))).is_err());
        assert!(factory.load_default_args().unwrap().is_empty());
    }

    #[test]
    fn rune_file_replaces_builtin_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cards.txt"), "Imp, 3, 2, 100, 400\n").unwrap();
        fs::write(
            dir.path().join("runes.ron"),
            r#"(runes: [(name: "Big Leaf", effect: (kind: Leaf, level: 999), max_charges: 1)])"#,
        )
        .unwrap();

        let catalogue = ContentFactory::new(dir.path()).load_catalogue(None).unwrap();
        assert_eq!(catalogue.runes().len(), 1);
        assert!(catalogue.find_rune("Leaf").is_none());
        assert_eq!(catalogue.find_rune("big leaf").unwrap().effect.level, 999);
    }
}
