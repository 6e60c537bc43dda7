use crate::env::GridEnv;
use crate::state::GridState;

/// Defines how a concrete request mutates the grid.
///
/// The engine drives every transition through three phases and restores the
/// pre-call entries if any of them fails, so implementations may mutate
/// speculatively in `apply` and leave the veto to `post_validate`. Validation
/// hooks receive read-only state and must stay side-effect free.
pub trait GridTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GridState, _env: &GridEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the request by mutating the state directly. Implementations
    /// should assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GridState, env: &GridEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GridState, _env: &GridEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
