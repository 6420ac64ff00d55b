//! Read-only snapshots of a quiz session for progress rendering.

use serde::{Deserialize, Serialize};

use crate::domain::filter::HardFilterSet;
use crate::domain::foundation::{QuestionId, QuizSessionId, QuizStatus, Timestamp};
use crate::domain::scoring::RankedCareer;
use crate::domain::vector::PreferenceVector;

/// Answered state of one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionProgress {
    pub question_id: QuestionId,
    pub section: Option<String>,
    pub answered: bool,
}

/// Snapshot of a session for progress indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizProgress {
    pub session_id: QuizSessionId,
    pub status: QuizStatus,
    pub current_index: usize,
    pub current_question_id: Option<QuestionId>,
    pub total_questions: usize,
    pub answered_count: usize,
    pub questions: Vec<QuestionProgress>,

    /// Live user vector.
    pub vector: PreferenceVector,

    /// Current question is answered and is not the last one.
    pub can_advance: bool,

    /// Every question is answered.
    pub can_finish: bool,
}

impl QuizProgress {
    /// Fraction of questions answered, 0.0 for an empty quiz.
    pub fn completion_ratio(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.answered_count as f64 / self.total_questions as f64
    }
}

/// Final output of a completed quiz.
///
/// Both the ranking and the match percentages derive from `vector`, the
/// vector committed at completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResults {
    pub session_id: QuizSessionId,
    pub vector: PreferenceVector,
    pub filters: HardFilterSet,
    pub ranked: Vec<RankedCareer>,
    pub completed_at: Timestamp,
}

impl QuizResults {
    /// Keeps only the first `max` ranked careers.
    pub fn truncate(&mut self, max: usize) {
        self.ranked.truncate(max);
    }
}
