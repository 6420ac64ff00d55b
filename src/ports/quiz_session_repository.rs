//! Quiz session repository port.
//!
//! Holds one `QuizSession` per id. Sessions never share state; a service
//! hosting many users keys every operation by `QuizSessionId`.

use async_trait::async_trait;

use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::QuizSession;

/// Errors that can occur in session storage.
#[derive(Debug, thiserror::Error)]
pub enum QuizSessionStoreError {
    #[error("Quiz session not found: {0}")]
    NotFound(QuizSessionId),

    #[error("Session storage error: {0}")]
    Storage(String),
}

/// Repository port for quiz session persistence.
#[async_trait]
pub trait QuizSessionRepository: Send + Sync {
    /// Insert or overwrite a session.
    async fn save(&self, session: &QuizSession) -> Result<(), QuizSessionStoreError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(
        &self,
        id: &QuizSessionId,
    ) -> Result<Option<QuizSession>, QuizSessionStoreError>;

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session doesn't exist
    async fn delete(&self, id: &QuizSessionId) -> Result<(), QuizSessionStoreError>;
}
