//! Quiz questions and their answer options.

use serde::{Deserialize, Serialize};

use crate::domain::filter::HardFilter;
use crate::domain::foundation::{OptionId, QuestionId};
use crate::domain::vector::Weights;

/// How a question collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    SingleSelect,
    MultiSelect,
    Boolean,
    ContinuousRating,
}

impl QuestionType {
    /// True for types whose answer is a list of option ids.
    pub fn is_multi(&self) -> bool {
        matches!(self, QuestionType::MultiSelect)
    }
}

/// Semantic role of an option on a boolean question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionRole {
    Yes,
    No,
}

impl From<bool> for OptionRole {
    fn from(value: bool) -> Self {
        if value {
            OptionRole::Yes
        } else {
            OptionRole::No
        }
    }
}

/// Declared range of a continuous-rating question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingScale {
    pub min: f64,
    pub max: f64,
}

impl RatingScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: OptionId,
    pub label: String,

    /// Weights contributed to the user vector while selected.
    pub weights: Weights,

    /// Constraint the user takes on by selecting this option.
    pub hard_filter: Option<HardFilter>,

    /// Yes/no tag on boolean questions.
    pub role: Option<OptionRole>,

    /// Slider position this option stands for on continuous questions.
    pub value: Option<f64>,
}

impl QuizOption {
    pub fn new(id: OptionId, label: impl Into<String>, weights: Weights) -> Self {
        Self {
            id,
            label: label.into(),
            weights,
            hard_filter: None,
            role: None,
            value: None,
        }
    }

    pub fn with_filter(mut self, filter: HardFilter) -> Self {
        self.hard_filter = Some(filter);
        self
    }

    pub fn with_role(mut self, role: OptionRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

/// A quiz question. Immutable once loaded for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,

    /// Ordering key; questions without one follow the ordered ones.
    pub order: Option<i32>,

    /// Section or grouping label for display.
    pub section: Option<String>,

    pub prompt: String,
    pub question_type: QuestionType,

    /// Selection cap for multi-select questions; `None` is unlimited.
    pub max_select: Option<usize>,

    /// Range of a continuous-rating question.
    pub scale: Option<RatingScale>,

    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        question_type: QuestionType,
        options: Vec<QuizOption>,
    ) -> Self {
        Self {
            id,
            order: None,
            section: None,
            prompt: prompt.into(),
            question_type,
            max_select: None,
            scale: None,
            options,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn with_max_select(mut self, max_select: usize) -> Self {
        self.max_select = Some(max_select);
        self
    }

    pub fn with_scale(mut self, scale: RatingScale) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Looks up an option by id.
    pub fn option(&self, option_id: &OptionId) -> Option<&QuizOption> {
        self.options.iter().find(|o| &o.id == option_id)
    }

    /// Looks up the option tagged with a boolean role.
    pub fn option_by_role(&self, role: OptionRole) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.role == Some(role))
    }

    /// Maps a slider value to the option with the nearest declared value.
    ///
    /// Ties resolve to the earlier option. Returns `None` when no option
    /// declares a value.
    pub fn option_for_value(&self, value: f64) -> Option<&QuizOption> {
        let mut best: Option<(&QuizOption, f64)> = None;
        for option in &self.options {
            let Some(option_value) = option.value else {
                continue;
            };
            let distance = (option_value - value).abs();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((option, distance)),
            }
        }
        best.map(|(option, _)| option)
    }

    /// Midpoint of the rating range: the declared scale, or else the span
    /// of option values.
    pub fn rating_midpoint(&self) -> Option<f64> {
        if let Some(scale) = self.scale {
            return Some(scale.midpoint());
        }
        let values = self.options.iter().filter_map(|o| o.value);
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        (min <= max).then(|| (min + max) / 2.0)
    }

    /// The option a continuous-rating question starts on.
    ///
    /// Nearest to the rating midpoint; when no option declares a value, the
    /// middle option by position. `None` for other question types.
    pub fn default_option(&self) -> Option<&QuizOption> {
        if self.question_type != QuestionType::ContinuousRating || self.options.is_empty() {
            return None;
        }
        self.rating_midpoint()
            .and_then(|mid| self.option_for_value(mid))
            .or_else(|| self.options.get((self.options.len() - 1) / 2))
    }
}
