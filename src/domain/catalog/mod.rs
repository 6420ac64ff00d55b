//! Catalog module - content records the engine reads.
//!
//! Questions and careers are authored in the external content store and
//! normalized into these types at the adapter boundary.

mod career;
mod question;

pub use career::{CareerRecord, SalaryRange};
pub use question::{OptionRole, Question, QuestionType, QuizOption, RatingScale};
