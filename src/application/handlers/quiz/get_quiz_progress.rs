//! GetQuizProgressHandler - Query handler for a session snapshot.

use std::sync::Arc;

use super::QuizError;
use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::QuizProgress;
use crate::ports::QuizSessionRepository;

#[derive(Debug, Clone)]
pub struct GetQuizProgressQuery {
    pub session_id: QuizSessionId,
}

pub struct GetQuizProgressHandler {
    repository: Arc<dyn QuizSessionRepository>,
}

impl GetQuizProgressHandler {
    pub fn new(repository: Arc<dyn QuizSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetQuizProgressQuery) -> Result<QuizProgress, QuizError> {
        let session = self
            .repository
            .find_by_id(&query.session_id)
            .await?
            .ok_or(QuizError::SessionNotFound(query.session_id))?;

        Ok(session.progress())
    }
}
