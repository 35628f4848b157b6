//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A reveal was triggered before every player had answered.
    #[error("reveal gate closed: {answered} of {total} players answered")]
    GateViolation {
        /// Players that have answered this round.
        answered: usize,
        /// Players known to the game.
        total: usize,
    },

    /// The external reveal-commit collaborator rejected the reveal.
    #[error("reveal commit failed: {0}")]
    CommitFailure(String),

    /// A camera command was issued while no map surface was attached.
    #[error("camera surface unavailable")]
    CameraUnavailable,

    /// Bounds were requested over an empty set of points.
    #[error("bounds require at least one point")]
    InsufficientData,

    /// An action was attempted from a phase that does not admit it.
    #[error("cannot {action} while {phase}")]
    InvalidTransition {
        /// The phase the state machine was in.
        phase: &'static str,
        /// The rejected action.
        action: &'static str,
    },

    /// A sequence was abandoned because the active question changed.
    #[error("sequence superseded by question {question_index}")]
    Superseded {
        /// The question index that took over.
        question_index: u32,
    },
}
