//! Results of feeding an answer event to a quiz session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::OptionId;

/// Why an answer event left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The session is not in progress.
    NotInProgress,
    UnknownQuestion,
    UnknownOption,
    /// Multi-select question already holds `max_select` options.
    MaxSelectReached,
    /// Boolean question has no option tagged with the requested role.
    NoOptionForRole,
    /// Continuous question has no option carrying a value.
    NoOptionForValue,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IgnoreReason::NotInProgress => "quiz is not in progress",
            IgnoreReason::UnknownQuestion => "unknown question",
            IgnoreReason::UnknownOption => "unknown option",
            IgnoreReason::MaxSelectReached => "maximum selections reached",
            IgnoreReason::NoOptionForRole => "no option tagged with role",
            IgnoreReason::NoOptionForValue => "no option carries a value",
        };
        write!(f, "{}", s)
    }
}

/// What an answer event did.
///
/// Stale or invalid input is reported as `Ignored`, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnswerOutcome {
    /// The option was added (first answer, or multi-select toggle-on).
    Selected,
    /// A single-select answer replaced an earlier option.
    Replaced { previous: OptionId },
    /// A multi-select option was toggled off.
    Deselected,
    /// The option was already the single selection.
    Unchanged,
    Ignored { reason: IgnoreReason },
}

impl AnswerOutcome {
    /// True if the selection (and so the user vector) changed.
    pub fn changed(&self) -> bool {
        matches!(
            self,
            AnswerOutcome::Selected | AnswerOutcome::Replaced { .. } | AnswerOutcome::Deselected
        )
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, AnswerOutcome::Ignored { .. })
    }
}
