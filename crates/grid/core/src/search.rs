//! Auto-placer: exhaustive first-fit search for a free slot.
//!
//! Orientations are tried upright first, then rotated when permitted. Within
//! an orientation, rows are scanned top to bottom and columns left to right;
//! the first anchor accepted by the placement validator wins.

use crate::env::{ItemDefinition, ItemOracle};
use crate::placement;
use crate::state::{CellPos, GridState};

/// Orientation of an item's footprint on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    Upright,
    Rotated,
}

impl Orientation {
    #[inline]
    pub fn is_rotated(self) -> bool {
        matches!(self, Self::Rotated)
    }

    /// Orientations to try for `definition`, in search order.
    pub fn candidates(definition: &ItemDefinition, allow_rotate: bool) -> &'static [Orientation] {
        if allow_rotate && definition.rotatable {
            &[Orientation::Upright, Orientation::Rotated]
        } else {
            &[Orientation::Upright]
        }
    }
}

/// A free anchor found by the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub position: CellPos,
    pub orientation: Orientation,
}

impl Slot {
    #[inline]
    pub fn rotated(&self) -> bool {
        self.orientation.is_rotated()
    }
}

/// Returns the first slot where `definition` can be placed, or `None` if the
/// grid has no room for it in any permitted orientation.
pub fn find_slot(
    state: &GridState,
    items: &dyn ItemOracle,
    definition: &ItemDefinition,
    allow_rotate: bool,
) -> Option<Slot> {
    Orientation::candidates(definition, allow_rotate)
        .iter()
        .find_map(|&orientation| scan(state, items, definition, orientation))
}

fn scan(
    state: &GridState,
    items: &dyn ItemOracle,
    definition: &ItemDefinition,
    orientation: Orientation,
) -> Option<Slot> {
    let rotated = orientation.is_rotated();
    let (width, height) = definition.effective_size(rotated);
    if width > state.width() || height > state.height() {
        return None;
    }

    for y in 0..=(state.height() - height) {
        for x in 0..=(state.width() - width) {
            let position = CellPos::new(x as i32, y as i32);
            if placement::check_definition(state, items, definition, position, rotated, None).is_ok()
            {
                return Some(Slot {
                    position,
                    orientation,
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ItemCatalog;
    use crate::state::GridEntry;

    fn catalog() -> ItemCatalog {
        ItemCatalog::from_definitions([
            ItemDefinition::new("pistol").with_footprint(2, 1),
            ItemDefinition::new("rifle").with_footprint(3, 1),
            ItemDefinition::new("plank")
                .with_footprint(3, 1)
                .with_rotatable(false),
        ])
    }

    #[test]
    fn raster_order_prefers_top_left() {
        let items = catalog();
        let state = GridState::new(4, 3, 0.0).unwrap().with_entries(vec![GridEntry::new(
            "pistol",
            1,
            CellPos::new(0, 0),
            false,
        )]);
        let pistol = items.definition("pistol").unwrap();

        let slot = find_slot(&state, &items, pistol, true).unwrap();
        assert_eq!(slot.position, CellPos::new(2, 0));
        assert_eq!(slot.orientation, Orientation::Upright);
    }

    #[test]
    fn falls_back_to_rotation_when_upright_is_full() {
        let items = catalog();
        // 2 wide, 3 high: a 3x1 rifle only fits standing up.
        let state = GridState::new(2, 3, 0.0).unwrap();
        let rifle = items.definition("rifle").unwrap();

        let slot = find_slot(&state, &items, rifle, true).unwrap();
        assert_eq!(slot.position, CellPos::ORIGIN);
        assert!(slot.rotated());

        assert_eq!(find_slot(&state, &items, rifle, false), None);
    }

    #[test]
    fn fixed_items_never_search_rotated() {
        let items = catalog();
        let state = GridState::new(2, 3, 0.0).unwrap();
        let plank = items.definition("plank").unwrap();

        assert_eq!(find_slot(&state, &items, plank, true), None);
    }

    #[test]
    fn orientation_names() {
        assert_eq!(Orientation::Rotated.to_string(), "rotated");
        assert_eq!(Orientation::Upright.as_ref(), "upright");
    }
}
