//! Errors surfaced by the quiz handlers.
//!
//! Domain-level misuse (unknown ids, answering a completed quiz) is not an
//! error here; it comes back as an ignored outcome. These variants cover
//! only missing sessions and infrastructure failures.

use thiserror::Error;

use crate::domain::foundation::QuizSessionId;
use crate::ports::{ContentStoreError, QuizSessionStoreError};

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Quiz session not found: {0}")]
    SessionNotFound(QuizSessionId),

    #[error(transparent)]
    ContentUnavailable(#[from] ContentStoreError),

    #[error(transparent)]
    Storage(#[from] QuizSessionStoreError),
}
