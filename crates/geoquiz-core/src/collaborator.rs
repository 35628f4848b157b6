//! External collaborators the reveal engine signals.

use async_trait::async_trait;

use crate::error::DomainError;

/// The "commit reveal" action owned by the game-state provider.
///
/// A reveal only proceeds past ranking once this succeeds.
#[async_trait]
pub trait RevealCommitter: Send + Sync {
    /// Commits the reveal of the active question.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CommitFailure` if the provider rejects it.
    async fn commit_reveal(&self) -> Result<(), DomainError>;
}

/// Fire-and-forget signal to move the game to its next question.
pub trait QuestionAdvancer: Send + Sync {
    /// Requests the next question. Implementations must not block.
    fn advance(&self);
}
