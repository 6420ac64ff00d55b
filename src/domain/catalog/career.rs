//! Career records supplied by the content store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::filter::{DealbreakerTrait, EducationLevel};
use crate::domain::foundation::CareerId;
use crate::domain::vector::PreferenceVector;

/// Annual salary figures for a career, in whole dollars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    /// Minimum starting salary, when published.
    pub min: Option<u32>,
    pub median: Option<u32>,
    pub max: Option<u32>,
}

impl SalaryRange {
    pub fn new(min: Option<u32>, median: Option<u32>, max: Option<u32>) -> Self {
        Self { min, median, max }
    }
}

/// A career in the catalog. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub id: CareerId,
    pub title: String,

    /// Declared weights along the preference dimensions.
    pub quiz_vector: PreferenceVector,

    /// Minimum education required to enter the career.
    pub education_level: Option<EducationLevel>,

    pub requires_licensure: bool,
    pub salary: SalaryRange,

    /// Dealbreaker traits this career is flagged with.
    pub traits: BTreeSet<DealbreakerTrait>,
}

impl CareerRecord {
    /// Creates a record with no education, licensure, salary or trait data.
    pub fn new(id: CareerId, title: impl Into<String>, quiz_vector: PreferenceVector) -> Self {
        Self {
            id,
            title: title.into(),
            quiz_vector,
            education_level: None,
            requires_licensure: false,
            salary: SalaryRange::default(),
            traits: BTreeSet::new(),
        }
    }

    pub fn with_education(mut self, level: EducationLevel) -> Self {
        self.education_level = Some(level);
        self
    }

    pub fn with_licensure(mut self, required: bool) -> Self {
        self.requires_licensure = required;
        self
    }

    pub fn with_salary(mut self, salary: SalaryRange) -> Self {
        self.salary = salary;
        self
    }

    pub fn with_trait(mut self, dealbreaker: DealbreakerTrait) -> Self {
        self.traits.insert(dealbreaker);
        self
    }

    /// True if the career declares the given dealbreaker trait.
    pub fn has_trait(&self, dealbreaker: DealbreakerTrait) -> bool {
        self.traits.contains(&dealbreaker)
    }
}
