//! Command and query handlers.
//!
//! Each handler pairs a command (or query) struct with a result struct and
//! works only through ports, so adapters can be swapped in tests.

pub mod quiz;

pub use quiz::{
    AnswerInput, AnswerQuestionCommand, AnswerQuestionHandler, AnswerQuestionResult,
    FinishQuizCommand, FinishQuizHandler, FinishQuizResult, GetQuizProgressHandler,
    GetQuizProgressQuery, Navigation, NavigateQuizCommand, NavigateQuizHandler,
    NavigateQuizResult, QuizError, StartQuizCommand, StartQuizHandler, StartQuizResult,
};
