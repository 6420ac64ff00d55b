//! Quiz module - the session state machine that accumulates answers.
//!
//! # Components
//!
//! - `QuizSession` - aggregate holding questions, selections and the live
//!   user vector
//! - `Answers` / `Selection` - per-question selections
//! - `AnswerOutcome` - what an answer event did (or why it was ignored)
//! - `QuizProgress` / `QuizResults` - snapshots for the UI layer

mod answers;
mod outcome;
mod progress;
mod session;

pub use answers::{Answers, Selection};
pub use outcome::{AnswerOutcome, IgnoreReason};
pub use progress::{QuestionProgress, QuizProgress, QuizResults};
pub use session::QuizSession;
