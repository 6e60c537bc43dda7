use crate::action::{ActionError, GridTransition, entry_at, resolve};
use crate::env::GridEnv;
use crate::{placement, weight};
use crate::state::{CellPos, GridState};

/// Relocates an existing entry, optionally changing its orientation.
///
/// The entry is checked against every other entry, so sliding it onto cells
/// it already covers is allowed. The weight cap is re-checked afterwards and
/// vetoes the move on a grid that is already over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub index: usize,
    pub position: CellPos,
    pub rotated: bool,
}

impl MoveAction {
    pub fn new(index: usize, position: CellPos, rotated: bool) -> Self {
        Self {
            index,
            position,
            rotated,
        }
    }
}

impl GridTransition for MoveAction {
    type Error = ActionError;
    type Result = ();

    fn pre_validate(&self, state: &GridState, env: &GridEnv<'_>) -> Result<(), Self::Error> {
        let entry = entry_at(state, self.index)?;
        let definition = resolve(env, &entry.item_id)?;

        placement::check_definition(
            state,
            env.items(),
            definition,
            self.position,
            self.rotated,
            Some(self.index),
        )?;
        Ok(())
    }

    fn apply(&self, state: &mut GridState, _env: &GridEnv<'_>) -> Result<(), Self::Error> {
        let len = state.len();
        let entry = state
            .entries_mut()
            .get_mut(self.index)
            .ok_or(ActionError::EntryNotFound {
                index: self.index,
                len,
            })?;

        entry.position = self.position;
        entry.rotated = self.rotated;
        Ok(())
    }

    fn post_validate(&self, state: &GridState, env: &GridEnv<'_>) -> Result<(), Self::Error> {
        weight::check(state, env.items())
    }
}
