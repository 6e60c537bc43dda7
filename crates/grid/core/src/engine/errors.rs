//! Error types for the grid transition pipeline.

use crate::action::ActionError;
use crate::error::{ErrorSeverity, GridError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a request through the grid engine.
///
/// The grid is unchanged whenever one of these is returned.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ExecuteError {
    #[error("add failed: {0}")]
    Add(TransitionPhaseError<ActionError>),

    #[error("move failed: {0}")]
    Move(TransitionPhaseError<ActionError>),

    #[error("remove failed: {0}")]
    Remove(TransitionPhaseError<ActionError>),

    #[error("consume failed: {0}")]
    Consume(TransitionPhaseError<ActionError>),

    #[error("auto-add failed: {0}")]
    AutoAdd(ActionError),
}

impl ExecuteError {
    /// The rejection underneath the pipeline wrapper.
    pub fn action_error(&self) -> &ActionError {
        match self {
            Self::Add(inner) | Self::Move(inner) | Self::Remove(inner) | Self::Consume(inner) => {
                &inner.error
            }
            Self::AutoAdd(error) => error,
        }
    }

    /// Pipeline stage that failed, when the request ran as a single transition.
    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            Self::Add(inner) | Self::Move(inner) | Self::Remove(inner) | Self::Consume(inner) => {
                Some(inner.phase)
            }
            Self::AutoAdd(_) => None,
        }
    }
}

impl GridError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.action_error().severity()
    }

    fn error_code(&self) -> &'static str {
        self.action_error().error_code()
    }
}
