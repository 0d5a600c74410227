//! Deck list loader.

use std::path::Path;

use crate::loaders::{LoadResult, data_lines, read_file};

/// Loader for deck files: one card or rune name per line, in play order.
///
/// Names are resolved later against the catalogue, cards first and runes
/// second, so this loader only collects them.
pub struct DeckLoader;

impl DeckLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<String>> {
        let content = read_file(path)?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Vec<String> {
        data_lines(content)
            .map(|(_, line)| line.to_owned())
            .collect()
    }
}
