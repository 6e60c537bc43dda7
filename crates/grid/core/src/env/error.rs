//! Registry access errors.

use crate::env::Footprint;
use crate::error::{ErrorSeverity, GridError};
use crate::state::ItemId;

/// Errors raised while building or querying an item registry.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum OracleError {
    /// Definition has an empty or whitespace-only identifier.
    #[error("item definition has a blank id")]
    BlankItemId,

    /// A definition with the same identifier is already registered.
    #[error("item definition '{0}' is already registered")]
    DuplicateItem(ItemId),

    /// Footprint has a zero dimension.
    #[error("item '{item}' has an empty footprint {footprint:?}")]
    InvalidFootprint { item: ItemId, footprint: Footprint },

    /// Weight per unit is negative or not a finite number.
    #[error("item '{item}' has an invalid weight {weight_kg} kg")]
    InvalidWeight { item: ItemId, weight_kg: f32 },

    /// Item definition was not found by id.
    #[error("item definition '{0}' not found")]
    ItemNotFound(ItemId),
}

impl GridError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Bad catalog records are rejected at load time
            BlankItemId | DuplicateItem(_) | InvalidFootprint { .. } | InvalidWeight { .. } => {
                ErrorSeverity::Validation
            }

            // Unknown references come from caller input
            ItemNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            BlankItemId => "ORACLE_BLANK_ITEM_ID",
            DuplicateItem(_) => "ORACLE_DUPLICATE_ITEM",
            InvalidFootprint { .. } => "ORACLE_INVALID_FOOTPRINT",
            InvalidWeight { .. } => "ORACLE_INVALID_WEIGHT",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
        }
    }
}
