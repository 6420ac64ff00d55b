//! StartQuizHandler - Command handler for beginning a quiz.

use std::sync::Arc;
use tracing::info;

use super::QuizError;
use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::{QuizProgress, QuizSession};
use crate::ports::{ContentStore, QuizSessionRepository};

/// Command to start a new quiz session.
#[derive(Debug, Clone, Default)]
pub struct StartQuizCommand {
    /// Preferred display language for question text.
    pub language: Option<String>,
}

/// Result of a successful start.
#[derive(Debug, Clone)]
pub struct StartQuizResult {
    pub session_id: QuizSessionId,
    pub progress: QuizProgress,
}

/// Loads the question list, creates a session and starts it.
pub struct StartQuizHandler {
    content: Arc<dyn ContentStore>,
    repository: Arc<dyn QuizSessionRepository>,
}

impl StartQuizHandler {
    pub fn new(content: Arc<dyn ContentStore>, repository: Arc<dyn QuizSessionRepository>) -> Self {
        Self {
            content,
            repository,
        }
    }

    pub async fn handle(&self, cmd: StartQuizCommand) -> Result<StartQuizResult, QuizError> {
        let questions = self.content.load_questions(cmd.language.as_deref()).await?;

        let mut session = QuizSession::new(QuizSessionId::new(), questions, cmd.language);
        session.start();

        self.repository.save(&session).await?;

        info!(
            session_id = %session.id(),
            questions = session.questions().len(),
            language = session.language().unwrap_or("default"),
            "Quiz started"
        );

        Ok(StartQuizResult {
            session_id: *session.id(),
            progress: session.progress(),
        })
    }
}
