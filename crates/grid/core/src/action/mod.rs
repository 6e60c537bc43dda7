//! Grid mutations expressed as transitions.
//!
//! Each action validates against the state it receives, mutates it in
//! `apply`, and may veto the result in `post_validate`. Actions never roll
//! themselves back; [`GridEngine`](crate::engine::GridEngine) owns that.
mod add;
mod error;
mod movement;
mod removal;
mod transition;

pub use add::{AddAction, AddOutcome};
pub use error::ActionError;
pub use movement::MoveAction;
pub use removal::{ConsumeAction, RemoveAction};
pub use transition::GridTransition;

use crate::env::{GridEnv, ItemDefinition};
use crate::state::{GridEntry, GridState, ItemId};

/// Resolves `item_id` through the environment, mapping a miss to
/// [`ActionError::UnknownItem`].
pub(crate) fn resolve<'a>(
    env: &GridEnv<'a>,
    item_id: &ItemId,
) -> Result<&'a ItemDefinition, ActionError> {
    env.definition(item_id.as_str())
        .map_err(|_| ActionError::UnknownItem(item_id.clone()))
}

/// Looks up the entry at `index`, mapping a miss to
/// [`ActionError::EntryNotFound`].
pub(crate) fn entry_at(state: &GridState, index: usize) -> Result<&GridEntry, ActionError> {
    state.entry(index).ok_or(ActionError::EntryNotFound {
        index,
        len: state.len(),
    })
}
