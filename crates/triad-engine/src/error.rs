//! Error types for the turn engine.

use thiserror::Error;
use triad_mechanics::ValidationError;

/// Result type for orchestrator operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Result type for game driver operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised by the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// A turn was applied to a session that already ended. Always a caller
    /// bug or stale state; never retried.
    #[error("session is terminated")]
    SessionTerminated,
}

/// Errors surfaced by the turn orchestrator's single entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The session already ended; no further turns are accepted.
    #[error("session is terminated")]
    SessionTerminated,

    /// The interpreter judgment failed validation. Recoverable by
    /// re-querying the interpreter; the turn attempt itself is over.
    #[error("invalid judgment: {0}")]
    InvalidJudgment(#[from] ValidationError),
}

impl From<StateError> for EngineError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::SessionTerminated => Self::SessionTerminated,
        }
    }
}

/// A failure reported by an interpreter or narrator collaborator.
///
/// The engine treats the model layer as opaque; whatever went wrong there
/// (transport, decoding, refusal to answer) arrives as a single message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("collaborator failure: {0}")]
pub struct CollaboratorError(
    /// Description of the failure.
    pub String,
);

/// Errors raised by the game driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// An engine-level failure (terminated session, malformed judgment).
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The interpreter refused the action. The action is remembered and
    /// can be retried with [`crate::game::Game::force`].
    #[error("action refused: {reason}")]
    ActionRefused {
        /// The interpreter's stated reason.
        reason: String,
    },

    /// An interpreter or narrator call failed.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    /// `force` was called with no refused action pending.
    #[error("no refused action to force")]
    NothingToForce,
}
