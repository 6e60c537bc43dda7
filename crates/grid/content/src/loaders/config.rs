//! Grid configuration loader.

use std::path::Path;

use grid_core::GridConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for grid configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    const BUILTIN: &'static str = include_str!("../../data/grid.toml");

    /// Load config data from a TOML file. Missing keys take the
    /// [`GridConfig`] defaults.
    pub fn load(path: &Path) -> LoadResult<GridConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// The grid configuration bundled with the crate.
    pub fn builtin() -> LoadResult<GridConfig> {
        Self::parse(Self::BUILTIN)
    }

    pub fn parse(content: &str) -> LoadResult<GridConfig> {
        let config: GridConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
