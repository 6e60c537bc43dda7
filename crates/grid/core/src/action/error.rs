use crate::error::{ErrorSeverity, GridError};
use crate::state::{CellRect, ItemId};

/// Reasons a grid mutation or placement query is rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ActionError {
    #[error("unknown item '{0}'")]
    UnknownItem(ItemId),

    #[error("item '{0}' cannot be rotated")]
    RotationDisallowed(ItemId),

    #[error("item '{item}' at {rect:?} does not fit inside the {width}x{height} grid")]
    OutOfBounds {
        item: ItemId,
        rect: CellRect,
        width: u32,
        height: u32,
    },

    #[error("item '{item}' at {rect:?} overlaps entry {blocker}")]
    Overlap {
        item: ItemId,
        rect: CellRect,
        blocker: usize,
    },

    #[error("total weight {total_kg} kg would exceed cap {cap_kg} kg")]
    WeightExceeded { total_kg: f32, cap_kg: f32 },

    #[error("entry {index} not found (grid holds {len} entries)")]
    EntryNotFound { index: usize, len: usize },

    #[error("entry {index} holds {available} units, cannot take {requested}")]
    InsufficientQuantity {
        index: usize,
        requested: u32,
        available: u32,
    },
}

impl GridError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            // Another position, or freeing space, may succeed
            OutOfBounds { .. } | Overlap { .. } | WeightExceeded { .. } => {
                ErrorSeverity::Recoverable
            }

            // The request itself is wrong
            UnknownItem(_)
            | RotationDisallowed(_)
            | EntryNotFound { .. }
            | InsufficientQuantity { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            UnknownItem(_) => "ACTION_UNKNOWN_ITEM",
            RotationDisallowed(_) => "ACTION_ROTATION_DISALLOWED",
            OutOfBounds { .. } => "ACTION_OUT_OF_BOUNDS",
            Overlap { .. } => "ACTION_OVERLAP",
            WeightExceeded { .. } => "ACTION_WEIGHT_EXCEEDED",
            EntryNotFound { .. } => "ACTION_ENTRY_NOT_FOUND",
            InsufficientQuantity { .. } => "ACTION_INSUFFICIENT_QUANTITY",
        }
    }
}
