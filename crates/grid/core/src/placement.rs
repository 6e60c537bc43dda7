//! Placement validator.
//!
//! Decides whether an item may occupy a rectangle of cells: the definition
//! must resolve, rotation must be allowed, the rectangle must lie inside the
//! grid and it must not intersect any other entry. Every check is a pure read
//! of the state; cost is linear in the number of entries, so bulk searches
//! multiply it by the number of candidate cells.

use crate::action::ActionError;
use crate::env::{ItemDefinition, ItemOracle};
use crate::state::{CellPos, CellRect, GridState, ItemId};

/// Validates a candidate placement of `item_id`.
///
/// `ignore` names an entry to leave out of the collision test, which lets a
/// moved entry be checked against everything but itself.
///
/// # Errors
///
/// [`ActionError::UnknownItem`], [`ActionError::RotationDisallowed`],
/// [`ActionError::OutOfBounds`] or [`ActionError::Overlap`], checked in that
/// order.
pub fn check_placement<'i>(
    state: &GridState,
    items: &'i dyn ItemOracle,
    item_id: &str,
    position: CellPos,
    rotated: bool,
    ignore: Option<usize>,
) -> Result<&'i ItemDefinition, ActionError> {
    let definition = items
        .definition(item_id)
        .ok_or_else(|| ActionError::UnknownItem(ItemId::from(item_id)))?;
    check_definition(state, items, definition, position, rotated, ignore)?;
    Ok(definition)
}

/// Same as [`check_placement`] for an already resolved definition. Returns the
/// rectangle the item would cover.
pub fn check_definition(
    state: &GridState,
    items: &dyn ItemOracle,
    definition: &ItemDefinition,
    position: CellPos,
    rotated: bool,
    ignore: Option<usize>,
) -> Result<CellRect, ActionError> {
    if rotated && !definition.rotatable {
        return Err(ActionError::RotationDisallowed(definition.id.clone()));
    }

    let (width, height) = definition.effective_size(rotated);
    let rect = CellRect::new(position, width, height);
    if !rect.fits_within(state.width(), state.height()) {
        return Err(ActionError::OutOfBounds {
            item: definition.id.clone(),
            rect,
            width: state.width(),
            height: state.height(),
        });
    }

    if let Some(blocker) = first_collision(state, items, &rect, ignore) {
        return Err(ActionError::Overlap {
            item: definition.id.clone(),
            rect,
            blocker,
        });
    }

    Ok(rect)
}

/// Boolean form of [`check_placement`]; fails closed on unknown items.
pub fn can_place(
    state: &GridState,
    items: &dyn ItemOracle,
    item_id: &str,
    position: CellPos,
    rotated: bool,
    ignore: Option<usize>,
) -> bool {
    check_placement(state, items, item_id, position, rotated, ignore).is_ok()
}

/// Index of the first entry (other than `ignore`) whose footprint intersects
/// `rect`. Entries with unresolvable definitions occupy nothing.
pub fn first_collision(
    state: &GridState,
    items: &dyn ItemOracle,
    rect: &CellRect,
    ignore: Option<usize>,
) -> Option<usize> {
    state
        .entries()
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != ignore)
        .find_map(|(index, entry)| {
            let other = entry.rect(items.definition(entry.item_id.as_str())?);
            other.intersects(rect).then_some(index)
        })
}

/// Pulls a dragged anchor back inside the grid for the given orientation.
///
/// Items larger than the grid are pinned to the origin; the validator will
/// still reject them.
pub fn clamp_anchor(
    state: &GridState,
    definition: &ItemDefinition,
    position: CellPos,
    rotated: bool,
) -> CellPos {
    let (width, height) = definition.effective_size(rotated);
    let max_x = i64::from(state.width()).saturating_sub(i64::from(width)).max(0);
    let max_y = i64::from(state.height()).saturating_sub(i64::from(height)).max(0);

    CellPos::new(
        i64::from(position.x).clamp(0, max_x) as i32,
        i64::from(position.y).clamp(0, max_y) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ItemCatalog;
    use crate::state::GridEntry;

    fn catalog() -> ItemCatalog {
        ItemCatalog::from_definitions([
            ItemDefinition::new("pistol").with_footprint(2, 1),
            ItemDefinition::new("rifle").with_footprint(4, 1),
            ItemDefinition::new("crate")
                .with_footprint(2, 2)
                .with_rotatable(false),
        ])
    }

    fn grid(entries: Vec<GridEntry>) -> GridState {
        GridState::new(6, 4, 0.0).unwrap().with_entries(entries)
    }

    #[test]
    fn unknown_item_fails_closed() {
        let items = catalog();
        let state = grid(vec![]);

        assert!(!can_place(&state, &items, "ghost", CellPos::ORIGIN, false, None));
        assert_eq!(
            check_placement(&state, &items, "ghost", CellPos::ORIGIN, false, None).unwrap_err(),
            ActionError::UnknownItem(ItemId::from("ghost"))
        );
    }

    #[test]
    fn rotation_rejected_for_fixed_items_everywhere() {
        let items = catalog();
        let state = grid(vec![]);

        for y in -1..5 {
            for x in -1..7 {
                assert!(!can_place(&state, &items, "crate", CellPos::new(x, y), true, None));
            }
        }
    }

    #[test]
    fn rotation_swaps_bounds() {
        let items = catalog();
        let state = grid(vec![]);

        assert!(can_place(&state, &items, "rifle", CellPos::new(2, 0), false, None));
        assert!(!can_place(&state, &items, "rifle", CellPos::new(0, 1), true, None));
        assert!(can_place(&state, &items, "rifle", CellPos::new(5, 0), true, None));
    }

    #[test]
    fn negative_anchor_is_out_of_bounds() {
        let items = catalog();
        let state = grid(vec![]);

        let error =
            check_placement(&state, &items, "pistol", CellPos::new(-1, 0), false, None).unwrap_err();
        assert!(matches!(error, ActionError::OutOfBounds { .. }));
    }

    #[test]
    fn overlap_reports_blocker_and_respects_ignore() {
        let items = catalog();
        let state = grid(vec![
            GridEntry::new("crate", 1, CellPos::new(0, 0), false),
            GridEntry::new("pistol", 1, CellPos::new(2, 0), false),
        ]);

        let error =
            check_placement(&state, &items, "pistol", CellPos::new(3, 0), false, None).unwrap_err();
        assert!(matches!(error, ActionError::Overlap { blocker: 1, .. }));

        assert!(can_place(&state, &items, "pistol", CellPos::new(3, 0), false, Some(1)));
        assert!(can_place(&state, &items, "pistol", CellPos::new(2, 2), false, None));
    }

    #[test]
    fn clamp_anchor_keeps_footprint_inside() {
        let items = catalog();
        let state = grid(vec![]);
        let rifle = items.definition("rifle").unwrap();

        assert_eq!(clamp_anchor(&state, rifle, CellPos::new(5, 3), false), CellPos::new(2, 3));
        assert_eq!(clamp_anchor(&state, rifle, CellPos::new(5, 3), true), CellPos::new(5, 0));
        assert_eq!(clamp_anchor(&state, rifle, CellPos::new(-3, -3), false), CellPos::ORIGIN);
    }
}
