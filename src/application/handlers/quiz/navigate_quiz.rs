//! NavigateQuizHandler - Command handler for moving through a quiz.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::QuizError;
use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::QuizProgress;
use crate::ports::QuizSessionRepository;

/// Navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    /// Advance; only allowed once the current question is answered.
    Next,
    Previous,
    /// Discard all answers and begin again from the first question.
    Restart,
}

#[derive(Debug, Clone)]
pub struct NavigateQuizCommand {
    pub session_id: QuizSessionId,
    pub navigation: Navigation,
}

#[derive(Debug, Clone)]
pub struct NavigateQuizResult {
    /// False when the request was a no-op (first/last question, unanswered).
    pub moved: bool,
    pub progress: QuizProgress,
}

pub struct NavigateQuizHandler {
    repository: Arc<dyn QuizSessionRepository>,
}

impl NavigateQuizHandler {
    pub fn new(repository: Arc<dyn QuizSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: NavigateQuizCommand) -> Result<NavigateQuizResult, QuizError> {
        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(QuizError::SessionNotFound(cmd.session_id))?;

        let moved = match cmd.navigation {
            Navigation::Next => session.next(),
            Navigation::Previous => session.previous(),
            Navigation::Restart => {
                session.reset();
                session.start()
            }
        };

        if moved {
            self.repository.save(&session).await?;
        } else {
            debug!(
                session_id = %cmd.session_id,
                navigation = ?cmd.navigation,
                index = session.current_index(),
                "Navigation was a no-op"
            );
        }

        Ok(NavigateQuizResult {
            moved,
            progress: session.progress(),
        })
    }
}
