//! Grid mutation pipeline.
//!
//! The [`GridEngine`] is the only way to change a [`GridState`]. Single-entry
//! requests run through the pre_validate → apply → post_validate pipeline and
//! are rolled back when any phase rejects them. Auto-add commits step by step
//! and reports what it could not place instead of failing.

mod auto;
mod errors;
mod transition;

pub use auto::{AutoPlacement, PickupOutcome, StopReason};
pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{
    ActionError, AddAction, AddOutcome, ConsumeAction, MoveAction, RemoveAction,
};
use crate::env::{GridEnv, ItemDefinition, ItemOracle};
use crate::placement;
use crate::state::{CellPos, GridEntry, GridState, ItemId};
use crate::weight;

use transition::drive_transition;

/// Borrows a grid exclusively for a series of requests.
///
/// The item registry is injected at construction and only read.
pub struct GridEngine<'a> {
    state: &'a mut GridState,
    env: GridEnv<'a>,
}

impl<'a> GridEngine<'a> {
    pub fn new(state: &'a mut GridState, items: &'a dyn ItemOracle) -> Self {
        Self {
            state,
            env: GridEnv::new(items),
        }
    }

    pub fn state(&self) -> &GridState {
        self.state
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.env.items()
    }

    /// Adds `amount` units at an explicit anchor.
    ///
    /// Existing stacks absorb units first. If any remain, one new entry is
    /// placed at `position` holding at most one full stack; the surplus is
    /// dropped and reported in [`AddOutcome::Placed`].
    pub fn try_add(
        &mut self,
        item_id: impl Into<ItemId>,
        amount: u32,
        position: CellPos,
        rotated: bool,
    ) -> Result<AddOutcome, ExecuteError> {
        let action = AddAction::new(item_id, amount, position, rotated);
        let outcome =
            drive_transition(&action, self.state, &self.env).map_err(ExecuteError::Add)?;

        tracing::debug!(item = %action.item_id, %position, rotated, ?outcome, "added");
        Ok(outcome)
    }

    /// Stacks and auto-places `amount` units, returning what was left over.
    pub fn add_auto(
        &mut self,
        item_id: impl Into<ItemId>,
        amount: u32,
        allow_rotate: bool,
    ) -> Result<AutoPlacement, ExecuteError> {
        let item_id = item_id.into();
        auto::add_auto(self.state, &self.env, &item_id, amount, allow_rotate)
            .map_err(ExecuteError::AutoAdd)
    }

    /// Collects items from the world into the grid, rotating when needed.
    pub fn pickup(
        &mut self,
        item_id: impl Into<ItemId>,
        amount: u32,
    ) -> Result<PickupOutcome, ExecuteError> {
        let item_id = item_id.into();
        let placement = self.add_auto(item_id.clone(), amount, true)?;
        let outcome = PickupOutcome::from(&placement);

        if let PickupOutcome::Partial { leftover, .. } = outcome {
            tracing::info!(item = %item_id, leftover, "no space or overweight");
        }
        Ok(outcome)
    }

    /// Moves the entry at `index`, possibly rotating it.
    pub fn try_move(
        &mut self,
        index: usize,
        position: CellPos,
        rotated: bool,
    ) -> Result<(), ExecuteError> {
        let action = MoveAction::new(index, position, rotated);
        drive_transition(&action, self.state, &self.env).map_err(ExecuteError::Move)?;

        tracing::debug!(index, %position, rotated, "moved");
        Ok(())
    }

    /// Removes the entry at `index` and returns it. Later indices shift down.
    pub fn remove(&mut self, index: usize) -> Result<GridEntry, ExecuteError> {
        let action = RemoveAction::new(index);
        let entry =
            drive_transition(&action, self.state, &self.env).map_err(ExecuteError::Remove)?;

        tracing::debug!(index, item = %entry.item_id, quantity = entry.quantity, "removed");
        Ok(entry)
    }

    /// Uses up `amount` units of the entry at `index`, returning how many are
    /// left. The entry is removed when nothing is left.
    pub fn consume(&mut self, index: usize, amount: u32) -> Result<u32, ExecuteError> {
        let action = ConsumeAction::new(index, amount);
        let left =
            drive_transition(&action, self.state, &self.env).map_err(ExecuteError::Consume)?;

        tracing::debug!(index, amount = action.amount, left, "consumed");
        Ok(left)
    }

    pub fn can_place(
        &self,
        item_id: &str,
        position: CellPos,
        rotated: bool,
        ignore: Option<usize>,
    ) -> bool {
        placement::can_place(self.state, self.env.items(), item_id, position, rotated, ignore)
    }

    /// Like [`can_place`](Self::can_place) but reports why a placement fails.
    pub fn check_placement(
        &self,
        item_id: &str,
        position: CellPos,
        rotated: bool,
        ignore: Option<usize>,
    ) -> Result<&'a ItemDefinition, ActionError> {
        placement::check_placement(self.state, self.env.items(), item_id, position, rotated, ignore)
    }

    pub fn index_at(&self, cell: CellPos) -> Option<usize> {
        self.state.index_at(self.env.items(), cell)
    }

    pub fn total_weight(&self) -> f32 {
        weight::total_weight(self.state, self.env.items())
    }

    pub fn exceeds_weight(&self) -> bool {
        weight::exceeds_weight(self.state, self.env.items())
    }

    /// Kilograms left under the cap, `None` when unlimited.
    pub fn remaining_capacity_kg(&self) -> Option<f32> {
        weight::remaining_capacity_kg(self.state, self.env.items())
    }

    /// Footprint of `item_id` in the given orientation.
    pub fn effective_size(&self, item_id: &str, rotated: bool) -> Option<(u32, u32)> {
        self.env
            .items()
            .definition(item_id)
            .map(|definition| definition.effective_size(rotated))
    }

    /// Clamps a dragged anchor for the entry at `index` into the grid.
    pub fn clamp_anchor(&self, index: usize, position: CellPos, rotated: bool) -> Option<CellPos> {
        let entry = self.state.entry(index)?;
        let definition = self.env.items().definition(entry.item_id.as_str())?;
        Some(placement::clamp_anchor(self.state, definition, position, rotated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ItemCatalog;

    fn catalog() -> ItemCatalog {
        ItemCatalog::from_definitions([
            ItemDefinition::new("pistol").with_footprint(2, 1),
            ItemDefinition::new("brick").with_weight(0.6),
        ])
    }

    #[test]
    fn weight_veto_rolls_back_try_add() {
        let items = catalog();
        let mut state = GridState::new(4, 4, 1.0).unwrap();
        let mut engine = GridEngine::new(&mut state, &items);

        engine.try_add("brick", 1, CellPos::ORIGIN, false).unwrap();
        let error = engine
            .try_add("brick", 1, CellPos::new(1, 0), false)
            .unwrap_err();

        assert_eq!(error.phase(), Some(TransitionPhase::PostValidate));
        assert!(matches!(error.action_error(), ActionError::WeightExceeded { .. }));
        assert_eq!(engine.state().len(), 1);
    }

    #[test]
    fn queries_resolve_through_registry() {
        let items = catalog();
        let mut state = GridState::new(4, 4, 0.0).unwrap();
        let mut engine = GridEngine::new(&mut state, &items);

        engine.try_add("pistol", 1, CellPos::new(1, 1), true).unwrap();

        assert_eq!(engine.effective_size("pistol", true), Some((1, 2)));
        assert_eq!(engine.effective_size("ghost", false), None);
        assert_eq!(engine.index_at(CellPos::new(1, 2)), Some(0));
        assert_eq!(engine.index_at(CellPos::new(2, 1)), None);
        assert_eq!(engine.clamp_anchor(0, CellPos::new(9, 9), false), Some(CellPos::new(2, 3)));
        assert_eq!(engine.remaining_capacity_kg(), None);
    }

    #[test]
    fn consume_to_zero_removes_entry() {
        let items = catalog();
        let mut state = GridState::new(4, 4, 0.0).unwrap();
        let mut engine = GridEngine::new(&mut state, &items);

        engine.try_add("brick", 1, CellPos::ORIGIN, false).unwrap();
        assert_eq!(engine.consume(0, 1), Ok(0));
        assert!(engine.state().is_empty());

        let error = engine.remove(0).unwrap_err();
        assert_eq!(error.phase(), Some(TransitionPhase::PreValidate));
    }
}
