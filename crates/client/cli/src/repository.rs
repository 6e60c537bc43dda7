//! File-backed persistence for grid snapshots.

use std::fs;
use std::path::{Path, PathBuf};

use grid_core::{GridSnapshot, GridState, ItemOracle, SnapshotError};

/// Errors surfaced by the save repository.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Stores one grid as a JSON snapshot on disk.
///
/// Writes go to a sibling temp file that is renamed over the target, so a
/// crash mid-save leaves the previous save intact.
pub struct FileSaveRepository {
    path: PathBuf,
}

impl FileSaveRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, state: &GridState) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let json = GridSnapshot::capture(state).to_json()?;

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved grid ({} entries) to {}", state.len(), self.path.display());
        Ok(())
    }

    /// Loads and audits the saved grid. A missing file yields `None`.
    pub fn load(&self, items: &dyn ItemOracle) -> Result<Option<GridState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path)?;
        let state = GridSnapshot::from_json(&text)?.into_audited_state(items)?;

        tracing::debug!("Loaded grid ({} entries) from {}", state.len(), self.path.display());
        Ok(Some(state))
    }
}
