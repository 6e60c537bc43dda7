//! In-memory [`ItemOracle`] backed by a keyed list of definitions.

use std::collections::BTreeMap;

use crate::env::{ItemDefinition, ItemOracle, OracleError};
use crate::state::ItemId;

/// Item registry holding definitions in registration order.
///
/// Lookups go through a sorted index so iteration order of
/// [`all_definitions`](ItemOracle::all_definitions) is stable and matches the
/// order definitions were registered in.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    definitions: Vec<ItemDefinition>,
    index: BTreeMap<ItemId, usize>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from raw records.
    ///
    /// Records with a blank id or invalid geometry are skipped. When several
    /// records share an id the first one wins. Every skipped record is logged.
    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut catalog = Self::new();
        for definition in definitions {
            if let Err(error) = catalog.insert(definition) {
                tracing::warn!(%error, "skipping item definition");
            }
        }
        catalog
    }

    /// Registers a definition.
    ///
    /// # Errors
    ///
    /// Rejects blank ids, duplicate ids, empty footprints and weights that are
    /// negative or not finite. The catalog is unchanged on error.
    pub fn insert(&mut self, definition: ItemDefinition) -> Result<(), OracleError> {
        if definition.id.is_blank() {
            return Err(OracleError::BlankItemId);
        }
        if self.index.contains_key(&definition.id) {
            return Err(OracleError::DuplicateItem(definition.id));
        }
        if definition.footprint.is_empty() {
            return Err(OracleError::InvalidFootprint {
                item: definition.id,
                footprint: definition.footprint,
            });
        }
        if !definition.weight_kg.is_finite() || definition.weight_kg < 0.0 {
            return Err(OracleError::InvalidWeight {
                item: definition.id,
                weight_kg: definition.weight_kg,
            });
        }

        self.index
            .insert(definition.id.clone(), self.definitions.len());
        self.definitions.push(definition);
        Ok(())
    }

    /// Looks up a definition, turning a miss into an error.
    pub fn require(&self, id: &str) -> Result<&ItemDefinition, OracleError> {
        self.definition(id)
            .ok_or_else(|| OracleError::ItemNotFound(ItemId::from(id)))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.definitions.iter().map(|definition| &definition.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, id: &str) -> Option<&ItemDefinition> {
        self.index.get(id).map(|&slot| &self.definitions[slot])
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        self.definitions.clone()
    }
}

impl FromIterator<ItemDefinition> for ItemCatalog {
    fn from_iter<T: IntoIterator<Item = ItemDefinition>>(iter: T) -> Self {
        Self::from_definitions(iter)
    }
}
