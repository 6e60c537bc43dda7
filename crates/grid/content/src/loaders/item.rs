//! Item catalog loader.

use std::path::Path;

use grid_core::{ItemCatalog, ItemDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    const BUILTIN: &'static str = include_str!("../../data/items.ron");

    /// Load an item catalog from a RON file.
    ///
    /// Records with blank ids, empty footprints or invalid weights are
    /// skipped with a warning; for duplicate ids the first record wins.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::info!(path = %path.display(), items = catalog.len(), "loaded item catalog");
        Ok(catalog)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let file: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(ItemCatalog::from_definitions(file.items))
    }

    /// The catalog bundled with this crate.
    pub fn builtin() -> LoadResult<ItemCatalog> {
        Self::parse(Self::BUILTIN)
    }
}
