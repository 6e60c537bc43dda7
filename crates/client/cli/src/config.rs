//! CLI configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use grid_core::ItemId;

/// Default location of the save file, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "inventory.json";

/// Paths and start-up options for the inventory shell.
#[derive(Clone, Debug, PartialEq)]
pub struct CliConfig {
    /// RON item catalog; the built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// TOML grid configuration; the built-in one applies when unset.
    pub config_path: Option<PathBuf>,
    pub save_path: PathBuf,
    /// Items auto-added once when no save exists.
    pub bootstrap: Vec<ItemId>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            config_path: None,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            bootstrap: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `INVENTORY_CATALOG` - Path to a RON item catalog (default: built-in)
    /// - `INVENTORY_CONFIG` - Path to a TOML grid config (default: built-in, 10x6 with a 25 kg cap)
    /// - `INVENTORY_SAVE` - Save file path (default: `inventory.json`)
    /// - `INVENTORY_BOOTSTRAP` - Comma-separated item ids to add on first start
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.catalog_path = read_env::<PathBuf>("INVENTORY_CATALOG");
        config.config_path = read_env::<PathBuf>("INVENTORY_CONFIG");

        if let Some(path) = read_env::<PathBuf>("INVENTORY_SAVE") {
            config.save_path = path;
        }

        if let Ok(ids) = env::var("INVENTORY_BOOTSTRAP") {
            config.bootstrap = parse_id_list(&ids);
        }

        config
    }
}

/// Splits a comma-separated list, dropping blank ids.
pub fn parse_id_list(raw: &str) -> Vec<ItemId> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ItemId::from)
        .collect()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    value.parse().ok()
}
