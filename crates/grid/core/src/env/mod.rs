//! Traits describing read-only item data.
//!
//! The [`ItemOracle`] exposes static item definitions (footprint, stack limit,
//! weight, rotatability). The [`Env`] aggregate hands it to the transition
//! pipeline so actions can resolve definitions without hard coupling to a
//! concrete registry.
mod catalog;
mod error;
mod items;

pub use catalog::ItemCatalog;
pub use error::OracleError;
pub use items::{Footprint, ItemDefinition, ItemOracle};

use crate::state::ItemId;

/// Aggregates the read-only collaborators required by the action pipeline.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, I>
where
    I: ItemOracle + ?Sized,
{
    items: &'a I,
}

pub type GridEnv<'a> = Env<'a, dyn ItemOracle + 'a>;

impl<'a, I> Env<'a, I>
where
    I: ItemOracle + ?Sized,
{
    pub fn new(items: &'a I) -> Self {
        Self { items }
    }

    /// Returns the item registry.
    #[inline]
    pub fn items(&self) -> &'a I {
        self.items
    }

    /// Resolves an item definition, or reports it as unknown.
    pub fn definition(&self, id: &str) -> Result<&'a ItemDefinition, OracleError> {
        self.items
            .definition(id)
            .ok_or_else(|| OracleError::ItemNotFound(ItemId::from(id)))
    }
}
