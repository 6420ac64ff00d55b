//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, status enums and error types
//! that form the vocabulary of the career matching domain.

mod errors;
mod ids;
mod percentage;
mod quiz_status;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{CareerId, OptionId, QuestionId, QuizSessionId};
pub use percentage::MatchPercentage;
pub use quiz_status::QuizStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
