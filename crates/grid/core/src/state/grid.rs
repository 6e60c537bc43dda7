use crate::config::GridConfig;
use crate::env::ItemOracle;
use crate::state::{CellPos, CellRect, GridEntry, StateError};
use crate::weight;

/// Canonical inventory grid state.
///
/// Dimensions and weight cap are fixed at construction. Entries are kept in
/// insertion order; the order carries no placement meaning but gives the UI
/// stable indices between mutations.
///
/// Entries can only be read from outside the crate; every mutation goes
/// through [`GridEngine`](crate::engine::GridEngine) so the placement
/// invariants hold whenever the state is observable.
#[derive(Clone, Debug, PartialEq)]
pub struct GridState {
    width: u32,
    height: u32,
    max_weight_kg: f32,
    entries: Vec<GridEntry>,
}

impl GridState {
    /// Largest width or height; cell coordinates are `i32`.
    pub const MAX_DIMENSION: u32 = i32::MAX as u32;

    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidDimensions`] when either dimension is zero
    /// or above [`MAX_DIMENSION`](Self::MAX_DIMENSION), and
    /// [`StateError::InvalidWeightCap`] for a negative or non-finite cap.
    pub fn new(width: u32, height: u32, max_weight_kg: f32) -> Result<Self, StateError> {
        let valid = 1..=Self::MAX_DIMENSION;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(StateError::InvalidDimensions { width, height });
        }
        if !max_weight_kg.is_finite() || max_weight_kg < 0.0 {
            return Err(StateError::InvalidWeightCap(max_weight_kg));
        }

        Ok(Self {
            width,
            height,
            max_weight_kg,
            entries: Vec::new(),
        })
    }

    pub fn from_config(config: &GridConfig) -> Result<Self, StateError> {
        Self::new(config.cells_wide, config.cells_high, config.max_weight_kg)
    }

    /// Replaces the entry list wholesale. Used when restoring a save; callers
    /// should [`audit`](Self::audit) the result.
    pub(crate) fn with_entries(mut self, entries: Vec<GridEntry>) -> Self {
        self.entries = entries;
        self
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Weight cap in kilograms; `0.0` means unlimited.
    #[inline]
    pub fn max_weight_kg(&self) -> f32 {
        self.max_weight_kg
    }

    #[inline]
    pub fn is_weight_limited(&self) -> bool {
        self.max_weight_kg > 0.0
    }

    pub fn entries(&self) -> &[GridEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&GridEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<GridEntry> {
        &mut self.entries
    }

    /// Copies the entry list so a failed transition can be undone.
    pub(crate) fn checkpoint(&self) -> Vec<GridEntry> {
        self.entries.clone()
    }

    pub(crate) fn restore(&mut self, checkpoint: Vec<GridEntry>) {
        self.entries = checkpoint;
    }

    /// Returns the index of the first entry (in insertion order) covering the
    /// cell. Entries whose definition cannot be resolved are skipped.
    pub fn index_at(&self, items: &dyn ItemOracle, cell: CellPos) -> Option<usize> {
        self.entries.iter().position(|entry| {
            items
                .definition(entry.item_id.as_str())
                .is_some_and(|definition| entry.rect(definition).contains(cell))
        })
    }

    /// Verifies every placement invariant.
    ///
    /// The engine maintains these on its own; this is for states that were
    /// assembled elsewhere, such as a decoded save.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, checking entries in order.
    pub fn audit(&self, items: &dyn ItemOracle) -> Result<(), StateError> {
        let mut rects = Vec::with_capacity(self.entries.len());

        for (index, entry) in self.entries.iter().enumerate() {
            let definition = items.definition(entry.item_id.as_str()).ok_or_else(|| {
                StateError::UnresolvedEntry {
                    index,
                    item: entry.item_id.clone(),
                }
            })?;

            if entry.rotated && !definition.rotatable {
                return Err(StateError::RotationNotAllowed {
                    index,
                    item: entry.item_id.clone(),
                });
            }

            if entry.quantity == 0 || entry.quantity > definition.stack_limit() {
                return Err(StateError::QuantityOutOfRange {
                    index,
                    quantity: entry.quantity,
                    max_stack: definition.stack_limit(),
                });
            }

            let rect = entry.rect(definition);
            if !rect.fits_within(self.width, self.height) {
                return Err(StateError::EntryOutOfBounds {
                    index,
                    rect,
                    width: self.width,
                    height: self.height,
                });
            }

            if let Some(first) = rects.iter().position(|other: &CellRect| other.intersects(&rect)) {
                return Err(StateError::OverlappingEntries {
                    first,
                    second: index,
                });
            }
            rects.push(rect);
        }

        let total_kg = weight::total_weight(self, items);
        if weight::exceeds_cap(total_kg, self.max_weight_kg) {
            return Err(StateError::WeightCapExceeded {
                total_kg,
                cap_kg: self.max_weight_kg,
            });
        }

        Ok(())
    }
}

impl Default for GridState {
    fn default() -> Self {
        let config = GridConfig::default();
        Self {
            width: config.cells_wide,
            height: config.cells_high,
            max_weight_kg: config.max_weight_kg,
            entries: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ItemCatalog, ItemDefinition};

    fn catalog() -> ItemCatalog {
        ItemCatalog::from_definitions([
            ItemDefinition::new("pistol").with_footprint(2, 1),
            ItemDefinition::new("crate")
                .with_footprint(2, 2)
                .with_rotatable(false),
            ItemDefinition::new("ammo9mm").with_max_stack(30).with_weight(0.02),
        ])
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert_eq!(
            GridState::new(0, 6, 0.0),
            Err(StateError::InvalidDimensions { width: 0, height: 6 })
        );
        assert_eq!(
            GridState::new(4, u32::MAX, 0.0),
            Err(StateError::InvalidDimensions {
                width: 4,
                height: u32::MAX
            })
        );
        assert!(GridState::new(GridState::MAX_DIMENSION, 1, 0.0).is_ok());
        assert!(matches!(
            GridState::new(4, 4, -1.0),
            Err(StateError::InvalidWeightCap(_))
        ));
    }

    #[test]
    fn index_at_resolves_rotated_footprints() {
        let items = catalog();
        let state = GridState::new(10, 6, 0.0).unwrap().with_entries(vec![
            GridEntry::new("pistol", 1, CellPos::new(0, 0), true),
            GridEntry::new("ammo9mm", 5, CellPos::new(3, 3), false),
        ]);

        assert_eq!(state.index_at(&items, CellPos::new(0, 1)), Some(0));
        assert_eq!(state.index_at(&items, CellPos::new(1, 0)), None);
        assert_eq!(state.index_at(&items, CellPos::new(3, 3)), Some(1));
    }

    #[test]
    fn index_at_skips_unknown_items() {
        let items = catalog();
        let state = GridState::new(4, 4, 0.0).unwrap().with_entries(vec![
            GridEntry::new("mystery", 1, CellPos::ORIGIN, false),
        ]);

        assert_eq!(state.index_at(&items, CellPos::ORIGIN), None);
    }

    #[test]
    fn audit_detects_each_violation() {
        let items = catalog();
        let base = GridState::new(4, 4, 0.0).unwrap();

        let overlap = base.clone().with_entries(vec![
            GridEntry::new("pistol", 1, CellPos::new(0, 0), false),
            GridEntry::new("pistol", 1, CellPos::new(1, 0), false),
        ]);
        assert_eq!(
            overlap.audit(&items),
            Err(StateError::OverlappingEntries { first: 0, second: 1 })
        );

        let outside = base.clone().with_entries(vec![GridEntry::new(
            "pistol",
            1,
            CellPos::new(3, 0),
            false,
        )]);
        assert!(matches!(
            outside.audit(&items),
            Err(StateError::EntryOutOfBounds { index: 0, .. })
        ));

        let spun = base.clone().with_entries(vec![GridEntry::new(
            "crate",
            1,
            CellPos::ORIGIN,
            true,
        )]);
        assert!(matches!(
            spun.audit(&items),
            Err(StateError::RotationNotAllowed { index: 0, .. })
        ));

        let overfull = base.clone().with_entries(vec![GridEntry::new(
            "ammo9mm",
            31,
            CellPos::ORIGIN,
            false,
        )]);
        assert!(matches!(
            overfull.audit(&items),
            Err(StateError::QuantityOutOfRange { max_stack: 30, .. })
        ));

        let heavy = GridState::new(4, 4, 0.5).unwrap().with_entries(vec![GridEntry::new(
            "ammo9mm",
            30,
            CellPos::ORIGIN,
            false,
        )]);
        assert!(matches!(
            heavy.audit(&items),
            Err(StateError::WeightCapExceeded { .. })
        ));
    }

    #[test]
    fn audit_accepts_edge_touching_entries() {
        let items = catalog();
        let state = GridState::new(4, 1, 0.0).unwrap().with_entries(vec![
            GridEntry::new("pistol", 1, CellPos::new(0, 0), false),
            GridEntry::new("pistol", 1, CellPos::new(2, 0), false),
        ]);

        assert_eq!(state.audit(&items), Ok(()));
    }
}
