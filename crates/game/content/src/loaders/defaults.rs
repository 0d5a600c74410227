//! Legacy `defaults.txt` argument file.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};

/// Loader for the single-line argument file that is prepended to the
/// command line.
pub struct DefaultsLoader;

impl DefaultsLoader {
    /// Arguments from the first line of `path`, or none if the file is
    /// absent.
    pub fn load(path: &Path) -> LoadResult<Vec<String>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = read_file(path)?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Vec<String> {
        content
            .lines()
            .next()
            .map(|line| line.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default()
    }
}
