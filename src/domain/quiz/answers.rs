//! Per-question selections recorded by a quiz session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{OptionId, QuestionId};

/// What a user has selected for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Single-select, boolean and continuous-rating questions.
    Single(OptionId),
    /// Multi-select questions, in selection order.
    Multiple(Vec<OptionId>),
}

impl Selection {
    /// A selection counts as an answer iff it is non-empty.
    pub fn is_answered(&self) -> bool {
        match self {
            Selection::Single(_) => true,
            Selection::Multiple(ids) => !ids.is_empty(),
        }
    }

    /// Selected option ids.
    pub fn option_ids(&self) -> &[OptionId] {
        match self {
            Selection::Single(id) => std::slice::from_ref(id),
            Selection::Multiple(ids) => ids,
        }
    }

    pub fn contains(&self, option_id: &OptionId) -> bool {
        self.option_ids().contains(option_id)
    }
}

/// Mapping from question id to its current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<QuestionId, Selection>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<&Selection> {
        self.0.get(question_id)
    }

    /// True if the question has a non-empty selection.
    pub fn is_answered(&self, question_id: &QuestionId) -> bool {
        self.get(question_id).is_some_and(Selection::is_answered)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Selection)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn set(&mut self, question_id: QuestionId, selection: Selection) {
        self.0.insert(question_id, selection);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(QuestionId, Selection)> for Answers {
    fn from_iter<I: IntoIterator<Item = (QuestionId, Selection)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
