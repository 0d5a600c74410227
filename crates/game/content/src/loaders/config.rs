//! Simulation settings loader.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Optional settings from `config.toml`. Every field may be omitted; the
/// command line overrides whatever is set here.
///
/// ```toml
/// level = 80
/// iterations = 20000
/// demon = "Kraken"
/// threads = 4
/// max_rounds = 500
/// print_round = 50
/// avg_concentrate = true
/// deck = "decks/forest.txt"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimSettings {
    pub level: Option<i32>,
    pub hp: Option<i32>,
    pub iterations: Option<u32>,
    pub demon: Option<String>,
    pub threads: Option<usize>,
    pub max_rounds: Option<i32>,
    pub print_round: Option<i32>,
    pub avg_concentrate: Option<bool>,
    pub deck: Option<PathBuf>,
    pub cards: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Loader for simulation settings from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<SimSettings> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SimSettings> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_leave_rest_unset() {
        let settings = ConfigLoader::parse("level = 80\ndemon = \"Kraken\"\n").unwrap();
        assert_eq!(settings.level, Some(80));
        assert_eq!(settings.demon.as_deref(), Some("Kraken"));
        assert_eq!(settings.iterations, None);
        assert_eq!(ConfigLoader::parse("").unwrap(), SimSettings::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ConfigLoader::parse("levle = 80\n").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config TOML"), "{err}");
    }
}
