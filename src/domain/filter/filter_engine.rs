//! Hard-Filter Engine - collection and evaluation of exclusion rules.

use std::collections::HashMap;

use tracing::debug;

use super::{HardFilter, HardFilterSet};
use crate::domain::catalog::{CareerRecord, Question};
use crate::domain::foundation::QuestionId;
use crate::domain::quiz::Answers;

/// Stateless hard-filter functions.
pub struct FilterEngine;

impl FilterEngine {
    /// Collects the hard filters carried by every currently selected option.
    ///
    /// Answers that reference unknown questions or options contribute
    /// nothing. The result is a set: equal filters collapse to one.
    pub fn collect_filters(answers: &Answers, questions: &[Question]) -> HardFilterSet {
        let by_id: HashMap<&QuestionId, &Question> =
            questions.iter().map(|q| (&q.id, q)).collect();

        let mut filters = HardFilterSet::new();
        for (question_id, selection) in answers.iter() {
            let Some(question) = by_id.get(question_id) else {
                debug!(question_id = %question_id, "Answer references unknown question");
                continue;
            };
            for option_id in selection.option_ids() {
                match question.option(option_id) {
                    Some(option) => {
                        if let Some(filter) = &option.hard_filter {
                            filters.insert(filter.clone());
                        }
                    }
                    None => {
                        debug!(
                            question_id = %question_id,
                            option_id = %option_id,
                            "Answer references unknown option"
                        );
                    }
                }
            }
        }
        filters
    }

    /// Returns true if this single filter disqualifies the career.
    ///
    /// # Rules
    /// - `EducationCeiling`: career's required level ranks above the ceiling
    /// - `LicensureRule`: exclusion requested and career requires a license
    /// - `MinStartSalary`: career publishes a minimum below the floor
    /// - `Dealbreaker`: career is flagged with the trait
    /// - `Region`: never
    ///
    /// Careers that leave a constraint undeclared are not excluded by it.
    pub fn excludes(filter: &HardFilter, career: &CareerRecord) -> bool {
        match filter {
            HardFilter::EducationCeiling { max_level } => career
                .education_level
                .is_some_and(|required| required > *max_level),
            HardFilter::LicensureRule { exclude_licensure } => {
                *exclude_licensure && career.requires_licensure
            }
            HardFilter::MinStartSalary { salary_min } => {
                career.salary.min.is_some_and(|min| min < *salary_min)
            }
            HardFilter::Dealbreaker { dealbreaker } => career.has_trait(*dealbreaker),
            HardFilter::Region { .. } => false,
        }
    }

    /// Returns true if any filter in the set excludes the career.
    ///
    /// Short-circuits on the first violated constraint.
    pub fn should_exclude<'a, I>(filters: I, career: &CareerRecord) -> bool
    where
        I: IntoIterator<Item = &'a HardFilter>,
    {
        filters
            .into_iter()
            .any(|filter| Self::excludes(filter, career))
    }
}
