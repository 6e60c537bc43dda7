//! Inventory grid state: dimensions, weight cap and placed entries.
//!
//! The state is plain data owned by one container. It is read freely but only
//! mutated through the engine, which keeps the placement invariants intact
//! between calls.
mod entry;
mod error;
mod grid;
mod types;

pub use entry::GridEntry;
pub use error::StateError;
pub use grid::GridState;
pub use types::{CellPos, CellRect, ItemId};
