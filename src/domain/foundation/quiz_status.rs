//! QuizStatus enum for tracking the lifecycle of a quiz session.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a quiz session.
///
/// `NotStarted -> InProgress -> Completed`, with a reset back to
/// `NotStarted` allowed from anywhere and a restart from `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuizStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl QuizStatus {
    /// Returns true if answers and navigation are accepted.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, QuizStatus::InProgress)
    }
}

impl StateMachine for QuizStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use QuizStatus::*;
        matches!(
            (self, target),
            (NotStarted, InProgress)
                | (Completed, InProgress)
                | (InProgress, Completed)
                | (InProgress, NotStarted)
                | (Completed, NotStarted)
                | (NotStarted, NotStarted)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use QuizStatus::*;
        match self {
            NotStarted => vec![InProgress, NotStarted],
            InProgress => vec![Completed, NotStarted],
            Completed => vec![InProgress, NotStarted],
        }
    }
}

impl fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizStatus::NotStarted => "Not Started",
            QuizStatus::InProgress => "In Progress",
            QuizStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
