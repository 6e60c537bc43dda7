//! Transition execution with rollback.

use crate::action::GridTransition;
use crate::env::GridEnv;
use crate::state::GridState;

use super::errors::{TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the grid and return result
/// 3. `post_validate` - Verify postconditions after mutation
///
/// The entry list is checkpointed before `apply`; if `apply` or
/// `post_validate` fails it is restored, so a rejected request never leaves
/// partial changes behind.
pub(super) fn drive_transition<T>(
    transition: &T,
    state: &mut GridState,
    env: &GridEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: GridTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let checkpoint = state.checkpoint();

    let outcome = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))
        .and_then(|result| {
            transition
                .post_validate(state, env)
                .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
                .map(|()| result)
        });

    if let Err(error) = &outcome {
        tracing::debug!(phase = error.phase.as_str(), "rolling back grid transition");
        state.restore(checkpoint);
    }

    outcome
}
