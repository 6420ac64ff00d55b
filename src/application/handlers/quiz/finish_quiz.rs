//! FinishQuizHandler - Command handler for completing a quiz and ranking careers.

use std::sync::Arc;
use tracing::{debug, info};

use super::QuizError;
use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::{QuizProgress, QuizResults};
use crate::ports::{ContentStore, QuizSessionRepository};

#[derive(Debug, Clone)]
pub struct FinishQuizCommand {
    pub session_id: QuizSessionId,
}

#[derive(Debug, Clone)]
pub struct FinishQuizResult {
    /// `None` when the quiz was not finishable (not in progress, or some
    /// question unanswered). The session is unchanged in that case.
    pub results: Option<QuizResults>,
    pub progress: QuizProgress,
}

pub struct FinishQuizHandler {
    content: Arc<dyn ContentStore>,
    repository: Arc<dyn QuizSessionRepository>,
    max_results: Option<usize>,
}

impl FinishQuizHandler {
    pub fn new(content: Arc<dyn ContentStore>, repository: Arc<dyn QuizSessionRepository>) -> Self {
        Self {
            content,
            repository,
            max_results: None,
        }
    }

    /// Caps the ranked list; `0` means unlimited.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = (max_results > 0).then_some(max_results);
        self
    }

    pub async fn handle(&self, cmd: FinishQuizCommand) -> Result<FinishQuizResult, QuizError> {
        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(QuizError::SessionNotFound(cmd.session_id))?;

        if !session.can_finish() {
            debug!(
                session_id = %cmd.session_id,
                status = %session.status(),
                "Quiz not finishable yet"
            );
            return Ok(FinishQuizResult {
                results: None,
                progress: session.progress(),
            });
        }

        // The catalog is fetched before the transition so a content outage
        // leaves the session in progress.
        let catalog = self.content.load_careers().await?;

        let mut results = session.finish(&catalog);
        if let (Some(results), Some(max)) = (results.as_mut(), self.max_results) {
            results.truncate(max);
        }

        self.repository.save(&session).await?;

        if let Some(results) = &results {
            let elapsed_secs = session
                .started_at()
                .map(|started| results.completed_at.duration_since(started).num_seconds());
            info!(
                session_id = %cmd.session_id,
                elapsed_secs,
                catalog = catalog.len(),
                matches = results.ranked.len(),
                filters = results.filters.len(),
                "Quiz completed"
            );
        }

        Ok(FinishQuizResult {
            results,
            progress: session.progress(),
        })
    }
}
