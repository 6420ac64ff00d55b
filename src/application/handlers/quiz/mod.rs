//! Quiz command and query handlers.

mod answer_question;
mod error;
mod finish_quiz;
mod get_quiz_progress;
mod navigate_quiz;
mod start_quiz;

#[cfg(test)]
mod fixtures;

pub use answer_question::{
    AnswerInput, AnswerQuestionCommand, AnswerQuestionHandler, AnswerQuestionResult,
};
pub use error::QuizError;
pub use finish_quiz::{FinishQuizCommand, FinishQuizHandler, FinishQuizResult};
pub use get_quiz_progress::{GetQuizProgressHandler, GetQuizProgressQuery};
pub use navigate_quiz::{Navigation, NavigateQuizCommand, NavigateQuizHandler, NavigateQuizResult};
pub use start_quiz::{StartQuizCommand, StartQuizHandler, StartQuizResult};
