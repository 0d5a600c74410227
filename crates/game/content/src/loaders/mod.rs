//! Content loaders for reading simulator data from files.
//!
//! Text formats (`cards.txt`, `deck.txt`, `defaults.txt`) share the same
//! line rules: surrounding whitespace is trimmed, and blank lines and lines
//! starting with `#` are skipped.

pub mod cards;
pub mod config;
pub mod deck;
pub mod defaults;
pub mod factory;
pub mod runes;

pub use cards::CardLoader;
pub use config::{ConfigLoader, SimSettings};
pub use deck::DeckLoader;
pub use defaults::DefaultsLoader;
pub use factory::ContentFactory;
pub use runes::RuneLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Meaningful lines of a text file with their 1-based line numbers.
pub(crate) fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}
