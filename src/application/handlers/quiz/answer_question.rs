//! AnswerQuestionHandler - Command handler for recording an answer.

use std::sync::Arc;
use tracing::debug;

use super::QuizError;
use crate::domain::foundation::{OptionId, QuestionId, QuizSessionId};
use crate::domain::quiz::{AnswerOutcome, QuizProgress};
use crate::ports::QuizSessionRepository;

/// The answer as the client supplied it.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerInput {
    /// Select (or, on multi-select, toggle) an option by id.
    Option(OptionId),

    /// Yes/no on a boolean question.
    Boolean(bool),

    /// Slider position on a continuous-rating question.
    Rating(f64),
}

/// Command to answer one question of a session.
#[derive(Debug, Clone)]
pub struct AnswerQuestionCommand {
    pub session_id: QuizSessionId,
    pub question_id: QuestionId,
    pub answer: AnswerInput,
}

/// What the answer did, plus the refreshed progress.
#[derive(Debug, Clone)]
pub struct AnswerQuestionResult {
    pub outcome: AnswerOutcome,
    pub progress: QuizProgress,
}

pub struct AnswerQuestionHandler {
    repository: Arc<dyn QuizSessionRepository>,
}

impl AnswerQuestionHandler {
    pub fn new(repository: Arc<dyn QuizSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: AnswerQuestionCommand,
    ) -> Result<AnswerQuestionResult, QuizError> {
        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(QuizError::SessionNotFound(cmd.session_id))?;

        let outcome = match &cmd.answer {
            AnswerInput::Option(option_id) => session.answer(&cmd.question_id, option_id),
            AnswerInput::Boolean(value) => session.answer_boolean(&cmd.question_id, *value),
            AnswerInput::Rating(value) => session.answer_rating(&cmd.question_id, *value),
        };

        if outcome.changed() {
            self.repository.save(&session).await?;
        } else {
            debug!(
                session_id = %cmd.session_id,
                question_id = %cmd.question_id,
                ?outcome,
                "Answer left session unchanged"
            );
        }

        Ok(AnswerQuestionResult {
            outcome,
            progress: session.progress(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{oid, qid, repository, started_session, FailingRepository};
    use super::*;
    use crate::domain::quiz::IgnoreReason;
    use crate::domain::vector::Dimension;

    fn command(session_id: QuizSessionId, question: &str, answer: AnswerInput) -> AnswerQuestionCommand {
        AnswerQuestionCommand {
            session_id,
            question_id: qid(question),
            answer,
        }
    }

    #[tokio::test]
    async fn selecting_an_option_updates_vector_and_persists() {
        let repo = Arc::new(repository());
        let session = started_session(&repo).await;
        let handler = AnswerQuestionHandler::new(repo.clone());

        let result = handler
            .handle(command(*session.id(), "setting", AnswerInput::Option(oid("clinic"))))
            .await
            .unwrap();

        assert_eq!(result.outcome, AnswerOutcome::Selected);
        assert_eq!(result.progress.vector.get(Dimension::PatientFacing), 2.0);

        let saved = repo.find_by_id(session.id()).await.unwrap().unwrap();
        assert!(saved.is_answered(&qid("setting")));
    }

    #[tokio::test]
    async fn changing_a_single_select_answer_swaps_weights() {
        let repo = Arc::new(repository());
        let session = started_session(&repo).await;
        let handler = AnswerQuestionHandler::new(repo);
        let id = *session.id();

        handler
            .handle(command(id, "setting", AnswerInput::Option(oid("clinic"))))
            .await
            .unwrap();
        let result = handler
            .handle(command(id, "setting", AnswerInput::Option(oid("lab"))))
            .await
            .unwrap();

        assert_eq!(
            result.outcome,
            AnswerOutcome::Replaced {
                previous: oid("clinic")
            }
        );
        assert_eq!(result.progress.vector.get(Dimension::PatientFacing), 0.0);
        assert_eq!(result.progress.vector.get(Dimension::LabResearch), 2.0);
    }

    #[tokio::test]
    async fn boolean_answer_resolves_by_role() {
        let repo = Arc::new(repository());
        let session = started_session(&repo).await;
        let handler = AnswerQuestionHandler::new(repo);

        let result = handler
            .handle(command(*session.id(), "needles", AnswerInput::Boolean(true)))
            .await
            .unwrap();

        assert_eq!(result.outcome, AnswerOutcome::Selected);
        assert_eq!(result.progress.vector.get(Dimension::PatientFacing), 1.0);
    }

    #[tokio::test]
    async fn unknown_option_is_ignored_without_saving() {
        let repo = Arc::new(repository());
        let session = started_session(&repo).await;
        let failing = Arc::new(FailingRepository::holding(session.clone()));
        let handler = AnswerQuestionHandler::new(failing);

        let result = handler
            .handle(command(*session.id(), "setting", AnswerInput::Option(oid("beach"))))
            .await
            .unwrap();

        assert_eq!(
            result.outcome,
            AnswerOutcome::Ignored {
                reason: IgnoreReason::UnknownOption
            }
        );
        assert!(result.progress.vector.is_zero());
    }

    #[tokio::test]
    async fn missing_session_is_an_error() {
        let handler = AnswerQuestionHandler::new(Arc::new(repository()));

        let result = handler
            .handle(command(QuizSessionId::new(), "setting", AnswerInput::Option(oid("lab"))))
            .await;

        assert!(matches!(result, Err(QuizError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn save_failure_surfaces_for_real_changes() {
        let repo = Arc::new(repository());
        let session = started_session(&repo).await;
        let handler = AnswerQuestionHandler::new(Arc::new(FailingRepository::holding(session.clone())));

        let result = handler
            .handle(command(*session.id(), "setting", AnswerInput::Option(oid("lab"))))
            .await;

        assert!(matches!(result, Err(QuizError::Storage(_))));
    }
}
