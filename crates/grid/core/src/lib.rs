//! Spatial inventory allocation engine.
//!
//! `grid-core` defines a fixed-size 2D grid that holds items with rectangular
//! footprints, optional 90° rotation, stack merging and an aggregate weight
//! cap. All state mutation flows through [`engine::GridEngine`], which runs
//! every request through a validate → apply → verify pipeline and restores the
//! previous state when any phase rejects it.
//!
//! Static item data is consumed through the [`ItemOracle`] trait; the engine
//! never mutates it and never performs I/O.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod placement;
pub mod search;
#[cfg(feature = "serde")]
pub mod snapshot;
pub mod stacking;
pub mod state;
pub mod weight;

pub use action::{ActionError, AddOutcome, GridTransition};
pub use config::GridConfig;
pub use engine::{
    AutoPlacement, ExecuteError, GridEngine, PickupOutcome, StopReason, TransitionPhase,
    TransitionPhaseError,
};
pub use env::{Env, Footprint, GridEnv, ItemCatalog, ItemDefinition, ItemOracle, OracleError};
pub use error::{ErrorSeverity, GridError};
pub use search::{Orientation, Slot};
#[cfg(feature = "serde")]
pub use snapshot::{EntrySnapshot, GridSnapshot, SnapshotError};
pub use state::{CellPos, CellRect, GridEntry, GridState, ItemId, StateError};
