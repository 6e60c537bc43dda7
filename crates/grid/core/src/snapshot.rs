//! JSON snapshot of a grid, for saves and hand-off to other tools.
//!
//! The document is flat:
//!
//! ```json
//! { "cellsWide": 10, "cellsHigh": 6, "maxWeightKg": 0.0,
//!   "items": [{ "itemId": "ammo9mm", "amount": 30, "x": 0, "y": 0, "rotated": false }] }
//! ```
//!
//! A missing or `null` item list decodes as an empty grid. Missing
//! dimensions fall back to [`GridConfig`] defaults.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::GridConfig;
use crate::env::ItemOracle;
use crate::error::{ErrorSeverity, GridError};
use crate::state::{CellPos, GridEntry, GridState, ItemId, StateError};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(String),

    #[error("snapshot describes an invalid grid: {0}")]
    InvalidState(#[from] StateError),
}

impl GridError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Json(_) => ErrorSeverity::Validation,
            Self::InvalidState(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Json(_) => "SNAPSHOT_JSON",
            Self::InvalidState(error) => error.error_code(),
        }
    }
}

/// Serializable form of a [`GridState`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSnapshot {
    #[serde(default = "default_cells_wide")]
    pub cells_wide: u32,
    #[serde(default = "default_cells_high")]
    pub cells_high: u32,
    #[serde(default)]
    pub max_weight_kg: f32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<EntrySnapshot>,
}

/// One entry of a [`GridSnapshot`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySnapshot {
    pub item_id: ItemId,
    #[serde(default = "default_amount")]
    pub amount: u32,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub rotated: bool,
}

fn default_cells_wide() -> u32 {
    GridConfig::DEFAULT_CELLS_WIDE
}

fn default_cells_high() -> u32 {
    GridConfig::DEFAULT_CELLS_HIGH
}

fn default_amount() -> u32 {
    1
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<EntrySnapshot>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<EntrySnapshot>>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&GridEntry> for EntrySnapshot {
    fn from(entry: &GridEntry) -> Self {
        Self {
            item_id: entry.item_id.clone(),
            amount: entry.quantity,
            x: entry.position.x,
            y: entry.position.y,
            rotated: entry.rotated,
        }
    }
}

impl From<EntrySnapshot> for GridEntry {
    fn from(snapshot: EntrySnapshot) -> Self {
        GridEntry::new(
            snapshot.item_id,
            snapshot.amount.max(1),
            CellPos::new(snapshot.x, snapshot.y),
            snapshot.rotated,
        )
    }
}

impl GridSnapshot {
    /// Captures dimensions, cap and entries in insertion order.
    pub fn capture(state: &GridState) -> Self {
        Self {
            cells_wide: state.width(),
            cells_high: state.height(),
            max_weight_kg: state.max_weight_kg(),
            items: state.entries().iter().map(EntrySnapshot::from).collect(),
        }
    }

    /// Rebuilds the grid without consulting item definitions.
    ///
    /// Only the dimensions and cap are validated; use
    /// [`into_audited_state`](Self::into_audited_state) when the snapshot
    /// comes from outside the process.
    pub fn into_state(self) -> Result<GridState, SnapshotError> {
        let state = GridState::new(self.cells_wide, self.cells_high, self.max_weight_kg)?;
        Ok(state.with_entries(self.items.into_iter().map(GridEntry::from).collect()))
    }

    /// Rebuilds the grid and checks every placement invariant against `items`.
    pub fn into_audited_state(self, items: &dyn ItemOracle) -> Result<GridState, SnapshotError> {
        let state = self.into_state()?;
        state.audit(items)?;
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|error| SnapshotError::Json(error.to_string()))
    }

    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(text).map_err(|error| SnapshotError::Json(error.to_string()))
    }
}
