//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    AnswerInput, AnswerQuestionCommand, AnswerQuestionHandler, AnswerQuestionResult,
    FinishQuizCommand, FinishQuizHandler, FinishQuizResult, GetQuizProgressHandler,
    GetQuizProgressQuery, Navigation, NavigateQuizCommand, NavigateQuizHandler,
    NavigateQuizResult, QuizError, StartQuizCommand, StartQuizHandler, StartQuizResult,
};
