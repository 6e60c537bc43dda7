//! Grid state errors.
//!
//! Raised when constructing a grid or when auditing a state that did not come
//! out of the engine (a loaded save, a hand-built fixture).

use crate::error::{ErrorSeverity, GridError};
use crate::state::{CellRect, ItemId};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StateError {
    /// Grid must be at least one cell and at most `i32::MAX` cells in each direction.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Weight cap is negative or not a finite number.
    #[error("invalid weight cap {0} kg")]
    InvalidWeightCap(f32),

    /// Entry references an item the registry does not know.
    #[error("entry {index} references unknown item '{item}'")]
    UnresolvedEntry { index: usize, item: ItemId },

    /// Entry is rotated but its item may not rotate.
    #[error("entry {index} ('{item}') is rotated but the item is not rotatable")]
    RotationNotAllowed { index: usize, item: ItemId },

    /// Entry quantity is zero or above the item's stack limit.
    #[error("entry {index} holds {quantity} units (allowed 1..={max_stack})")]
    QuantityOutOfRange {
        index: usize,
        quantity: u32,
        max_stack: u32,
    },

    /// Entry footprint extends past the grid edge.
    #[error("entry {index} at {rect:?} lies outside the {width}x{height} grid")]
    EntryOutOfBounds {
        index: usize,
        rect: CellRect,
        width: u32,
        height: u32,
    },

    /// Two entries share at least one cell.
    #[error("entries {first} and {second} overlap")]
    OverlappingEntries { first: usize, second: usize },

    /// Carried weight is above the cap.
    #[error("total weight {total_kg} kg exceeds cap {cap_kg} kg")]
    WeightCapExceeded { total_kg: f32, cap_kg: f32 },
}

impl GridError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            // Construction parameters are caller input
            InvalidDimensions { .. } | InvalidWeightCap(_) => ErrorSeverity::Validation,

            // A definition may have been removed from content since the save
            UnresolvedEntry { .. } => ErrorSeverity::Internal,

            // Broken placement invariants mean the state cannot be trusted
            RotationNotAllowed { .. }
            | QuantityOutOfRange { .. }
            | EntryOutOfBounds { .. }
            | OverlappingEntries { .. }
            | WeightCapExceeded { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            InvalidDimensions { .. } => "STATE_INVALID_DIMENSIONS",
            InvalidWeightCap(_) => "STATE_INVALID_WEIGHT_CAP",
            UnresolvedEntry { .. } => "STATE_UNRESOLVED_ENTRY",
            RotationNotAllowed { .. } => "STATE_ROTATION_NOT_ALLOWED",
            QuantityOutOfRange { .. } => "STATE_QUANTITY_OUT_OF_RANGE",
            EntryOutOfBounds { .. } => "STATE_ENTRY_OUT_OF_BOUNDS",
            OverlappingEntries { .. } => "STATE_OVERLAPPING_ENTRIES",
            WeightCapExceeded { .. } => "STATE_WEIGHT_CAP_EXCEEDED",
        }
    }
}
