//! Raw content-store records and their normalization into catalog types.
//!
//! Authored content is loosely typed. Questions may carry a structured
//! `hardFilter` object or the older flat fields (`type`, `minSalary`,
//! `dealbreakerType`, `maxEducation`, `excludeLicensure`). Anything this
//! module cannot interpret is dropped with a warning rather than failing
//! the whole load; a missing id is the only thing that rejects a record.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::domain::catalog::{
    CareerRecord, OptionRole, Question, QuestionType, QuizOption, RatingScale, SalaryRange,
};
use crate::domain::filter::{DealbreakerTrait, EducationLevel, HardFilter};
use crate::domain::foundation::{CareerId, OptionId, QuestionId, ValidationError};
use crate::domain::vector::{Dimension, PreferenceVector, Weights};

/// A document is either a bare list or a list wrapped in an envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawDocument<T> {
    List(Vec<T>),
    Wrapped {
        #[serde(alias = "items", alias = "data")]
        result: Vec<T>,
    },
}

impl<T> RawDocument<T> {
    pub fn into_records(self) -> Vec<T> {
        match self {
            RawDocument::List(records) => records,
            RawDocument::Wrapped { result } => result,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub order: Option<i32>,
    pub section: Option<String>,
    #[serde(alias = "question", alias = "text")]
    pub prompt: Option<String>,
    #[serde(rename = "type", alias = "questionType")]
    pub question_type: Option<String>,
    pub max_select: Option<usize>,
    pub scale: Option<RawScale>,
    #[serde(default)]
    pub options: Vec<RawOption>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawScale {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOption {
    #[serde(alias = "_key", alias = "_id")]
    pub id: Option<String>,
    #[serde(alias = "text")]
    pub label: Option<String>,
    #[serde(default)]
    pub weights: BTreeMap<String, Value>,
    pub hard_filter: Option<Value>,
    pub role: Option<String>,
    pub value: Option<f64>,

    #[serde(rename = "type")]
    pub legacy_type: Option<String>,
    pub min_salary: Option<f64>,
    pub dealbreaker_type: Option<String>,
    pub max_education: Option<String>,
    pub exclude_licensure: Option<bool>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCareer {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    #[serde(alias = "name")]
    pub title: Option<String>,
    #[serde(default)]
    pub quiz_vector: BTreeMap<String, Value>,
    #[serde(alias = "minEducation", alias = "educationRequired")]
    pub education_level: Option<String>,
    pub requires_licensure: Option<bool>,
    pub salary: Option<RawSalary>,
    pub salary_min: Option<f64>,
    pub salary_median: Option<f64>,
    pub salary_max: Option<f64>,
    #[serde(alias = "heavyLifting")]
    pub requires_lifting: Option<bool>,
    #[serde(alias = "worksNightsWeekends")]
    pub nights_weekends: Option<bool>,
    #[serde(alias = "bloodNeedlesExposure")]
    pub blood_needles: Option<bool>,
    #[serde(alias = "highStress")]
    pub acute_stress: Option<bool>,
    #[serde(default)]
    pub dealbreakers: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawSalary {
    pub min: Option<f64>,
    pub median: Option<f64>,
    pub max: Option<f64>,
}

// ───────────────────────────────────────────────────────────────
// Questions
// ───────────────────────────────────────────────────────────────

/// Normalizes raw questions, skipping records without a usable id.
pub fn normalize_questions(raw: Vec<RawQuestion>) -> Vec<Question> {
    raw.into_iter()
        .filter_map(|record| match record.into_question() {
            Ok(question) => Some(question),
            Err(error) => {
                warn!(%error, "Skipping question record");
                None
            }
        })
        .collect()
}

impl RawQuestion {
    pub fn into_question(self) -> Result<Question, ValidationError> {
        let id = QuestionId::new(self.id.unwrap_or_default())?;
        let question_type = parse_question_type(self.question_type.as_deref(), &id);

        let options: Vec<QuizOption> = self
            .options
            .into_iter()
            .filter_map(|option| match option.into_option(&id, question_type) {
                Ok(option) => Some(option),
                Err(error) => {
                    warn!(question_id = %id, %error, "Skipping option record");
                    None
                }
            })
            .collect();
        if options.is_empty() {
            return Err(ValidationError::invalid_format(
                "options",
                format!("question '{}' has no usable options", id),
            ));
        }

        let mut question = Question::new(
            id.clone(),
            self.prompt.unwrap_or_default(),
            question_type,
            options,
        );
        if let Some(order) = self.order {
            question = question.with_order(order);
        }
        if let Some(section) = self.section.filter(|s| !s.trim().is_empty()) {
            question = question.with_section(section);
        }
        match (question_type, self.max_select) {
            (QuestionType::MultiSelect, Some(0)) | (_, None) => {}
            (QuestionType::MultiSelect, Some(max)) => question = question.with_max_select(max),
            (_, Some(_)) => debug!(question_id = %id, "maxSelect ignored on non-multi question"),
        }
        if let Some(scale) = self.scale {
            if scale.min.is_finite() && scale.max.is_finite() && scale.min < scale.max {
                question = question.with_scale(RatingScale::new(scale.min, scale.max));
            } else {
                warn!(question_id = %id, min = scale.min, max = scale.max, "Ignoring invalid rating scale");
            }
        }
        Ok(question)
    }
}

fn parse_question_type(raw: Option<&str>, id: &QuestionId) -> QuestionType {
    let normalized = raw
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
        .replace(['-', '_', ' '], "");
    match normalized.as_str() {
        "" | "single" | "singleselect" => QuestionType::SingleSelect,
        "multi" | "multiple" | "multiselect" => QuestionType::MultiSelect,
        "boolean" | "bool" | "yesno" => QuestionType::Boolean,
        "continuous" | "rating" | "slider" | "scale" | "continuousrating" => {
            QuestionType::ContinuousRating
        }
        _ => {
            warn!(question_id = %id, question_type = ?raw, "Unknown question type, treating as single select");
            QuestionType::SingleSelect
        }
    }
}

impl RawOption {
    fn into_option(
        self,
        question_id: &QuestionId,
        question_type: QuestionType,
    ) -> Result<QuizOption, ValidationError> {
        let id = OptionId::new(self.id.clone().unwrap_or_default())?;
        let context = format!("{}/{}", question_id, id);
        let weights = parse_weights(&self.weights, &context);

        let mut option = QuizOption::new(id, self.label.clone().unwrap_or_default(), weights);
        if let Some(filter) = self.hard_filter(&context) {
            option = option.with_filter(filter);
        }
        match self.role.as_deref().map(parse_role) {
            Some(Some(role)) => option = option.with_role(role),
            Some(None) => warn!(option = %context, role = ?self.role, "Unknown option role"),
            None if question_type == QuestionType::Boolean => {
                warn!(option = %context, "Boolean option has no role tag");
            }
            None => {}
        }
        match self.value {
            Some(value) if value.is_finite() => option = option.with_value(value),
            Some(value) => warn!(option = %context, value, "Ignoring non-finite option value"),
            None => {}
        }
        Ok(option)
    }

    /// The structured `hardFilter` wins over legacy flat fields.
    fn hard_filter(&self, context: &str) -> Option<HardFilter> {
        if let Some(raw) = &self.hard_filter {
            if self.legacy_type.is_some() {
                debug!(option = %context, "Both hardFilter and legacy type present, using hardFilter");
            }
            return match serde_json::from_value::<HardFilter>(raw.clone()) {
                Ok(HardFilter::Region { region }) => Some(HardFilter::region(&region)),
                Ok(filter) => Some(filter),
                Err(error) => {
                    warn!(option = %context, %error, "Ignoring unrecognized hard filter");
                    None
                }
            };
        }
        self.legacy_filter(context)
    }

    fn legacy_filter(&self, context: &str) -> Option<HardFilter> {
        let kind = self.legacy_type.as_deref()?.trim().to_ascii_lowercase();
        let filter = match kind.as_str() {
            "" | "none" | "preference" => return None,
            "salary" | "min_salary" | "min_start_salary" => self
                .min_salary
                .and_then(to_dollars)
                .map(|salary_min| HardFilter::MinStartSalary { salary_min }),
            "dealbreaker" => self
                .dealbreaker_type
                .as_deref()
                .and_then(|raw| raw.parse::<DealbreakerTrait>().ok())
                .map(|dealbreaker| HardFilter::Dealbreaker { dealbreaker }),
            "education" | "education_ceiling" => self
                .max_education
                .as_deref()
                .and_then(|raw| raw.parse::<EducationLevel>().ok())
                .map(|max_level| HardFilter::EducationCeiling { max_level }),
            "licensure" | "licensure_rule" => Some(HardFilter::LicensureRule {
                exclude_licensure: self.exclude_licensure.unwrap_or(true),
            }),
            "region" => self.region.as_deref().map(HardFilter::region),
            _ => {
                warn!(option = %context, kind = %kind, "Unknown legacy filter type");
                return None;
            }
        };
        if filter.is_none() {
            warn!(option = %context, kind = %kind, "Legacy filter is missing or has an invalid value");
        }
        filter
    }
}

fn parse_role(raw: &str) -> Option<OptionRole> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "y" => Some(OptionRole::Yes),
        "no" | "false" | "n" => Some(OptionRole::No),
        _ => None,
    }
}

fn parse_weights(raw: &BTreeMap<String, Value>, context: &str) -> Weights {
    raw.iter()
        .filter_map(|(key, value)| {
            let dimension = match key.parse::<Dimension>() {
                Ok(dimension) => dimension,
                Err(_) => {
                    warn!(record = %context, key = %key, "Ignoring weight for unknown dimension");
                    return None;
                }
            };
            match value.as_f64() {
                Some(weight) if weight.is_finite() => Some((dimension, weight)),
                _ => {
                    warn!(record = %context, key = %key, "Ignoring non-numeric weight");
                    None
                }
            }
        })
        .collect()
}

fn to_dollars(value: f64) -> Option<u32> {
    if value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX) {
        Some(value.round() as u32)
    } else {
        None
    }
}

// ───────────────────────────────────────────────────────────────
// Careers
// ───────────────────────────────────────────────────────────────

/// Normalizes raw careers, skipping records without a usable id.
pub fn normalize_careers(raw: Vec<RawCareer>) -> Vec<CareerRecord> {
    raw.into_iter()
        .filter_map(|record| match record.into_career() {
            Ok(career) => Some(career),
            Err(error) => {
                warn!(%error, "Skipping career record");
                None
            }
        })
        .collect()
}

impl RawCareer {
    pub fn into_career(self) -> Result<CareerRecord, ValidationError> {
        let id = CareerId::new(self.id.clone().unwrap_or_default())?;
        let context = id.to_string();
        let vector = PreferenceVector::from_weights(&parse_weights(&self.quiz_vector, &context));

        let salary = self.salary.unwrap_or_default();
        let salary = SalaryRange::new(
            salary.min.or(self.salary_min).and_then(to_dollars),
            salary.median.or(self.salary_median).and_then(to_dollars),
            salary.max.or(self.salary_max).and_then(to_dollars),
        );

        let mut career = CareerRecord::new(id, self.title.clone().unwrap_or_default(), vector)
            .with_licensure(self.requires_licensure.unwrap_or(false))
            .with_salary(salary);

        if let Some(code) = self.education_level.as_deref() {
            match code.parse::<EducationLevel>() {
                Ok(level) => career = career.with_education(level),
                Err(_) => warn!(career_id = %context, code = %code, "Unknown education code"),
            }
        }

        let flags = [
            (self.requires_lifting, DealbreakerTrait::Lifting),
            (self.nights_weekends, DealbreakerTrait::NightsWeekends),
            (self.blood_needles, DealbreakerTrait::BloodNeedles),
            (self.acute_stress, DealbreakerTrait::AcuteStress),
        ];
        for (flag, dealbreaker) in flags {
            if flag.unwrap_or(false) {
                career = career.with_trait(dealbreaker);
            }
        }
        for raw in &self.dealbreakers {
            match raw.parse::<DealbreakerTrait>() {
                Ok(dealbreaker) => career = career.with_trait(dealbreaker),
                Err(_) => warn!(career_id = %context, dealbreaker = %raw, "Unknown dealbreaker trait"),
            }
        }
        Ok(career)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions_from(json: &str) -> Vec<Question> {
        let doc: RawDocument<RawQuestion> = serde_json::from_str(json).unwrap();
        normalize_questions(doc.into_records())
    }

    fn careers_from(json: &str) -> Vec<CareerRecord> {
        let doc: RawDocument<RawCareer> = serde_json::from_str(json).unwrap();
        normalize_careers(doc.into_records())
    }

    #[test]
    fn structured_filter_is_parsed() {
        let questions = questions_from(
            r#"[{"id":"pay","type":"single_select","options":[
                {"id":"40k","hardFilter":{"kind":"min_start_salary","salaryMin":40000}}
            ]}]"#,
        );
        assert_eq!(
            questions[0].options[0].hard_filter,
            Some(HardFilter::MinStartSalary { salary_min: 40000 })
        );
    }

    #[test]
    fn legacy_filter_fields_are_mapped() {
        let questions = questions_from(
            r#"[{"id":"q","options":[
                {"id":"a","type":"salary","minSalary":35000.0},
                {"id":"b","type":"dealbreaker","dealbreakerType":"bloodNeedles"},
                {"id":"c","type":"education","maxEducation":"aas"},
                {"id":"d","type":"licensure"},
                {"id":"e","type":"region","region":"  Tidewater "}
            ]}]"#,
        );
        let filters: Vec<_> = questions[0]
            .options
            .iter()
            .map(|o| o.hard_filter.clone())
            .collect();
        assert_eq!(
            filters,
            vec![
                Some(HardFilter::MinStartSalary { salary_min: 35000 }),
                Some(HardFilter::Dealbreaker {
                    dealbreaker: DealbreakerTrait::BloodNeedles
                }),
                Some(HardFilter::EducationCeiling {
                    max_level: EducationLevel::AssociateApplied
                }),
                Some(HardFilter::LicensureRule {
                    exclude_licensure: true
                }),
                Some(HardFilter::region("tidewater")),
            ]
        );
    }

    #[test]
    fn structured_filter_wins_over_legacy() {
        let questions = questions_from(
            r#"[{"id":"q","options":[{"id":"a","type":"salary","minSalary":1,
                "hardFilter":{"kind":"licensure_rule","excludeLicensure":true}}]}]"#,
        );
        assert_eq!(
            questions[0].options[0].hard_filter,
            Some(HardFilter::LicensureRule {
                exclude_licensure: true
            })
        );
    }

    #[test]
    fn unknown_filters_and_dimensions_are_dropped() {
        let questions = questions_from(
            r#"[{"id":"q","options":[{"id":"a",
                "weights":{"patientFacing":2,"astrology":5,"teamwork":"lots"},
                "hardFilter":{"kind":"zodiac"}}]}]"#,
        );
        let option = &questions[0].options[0];
        assert!(option.hard_filter.is_none());
        assert_eq!(option.weights.len(), 1);
        assert_eq!(option.weights.get(Dimension::PatientFacing), Some(2.0));
    }

    #[test]
    fn records_without_ids_are_skipped() {
        let questions = questions_from(
            r#"{"result":[{"prompt":"no id"},{"id":"ok","options":[{"label":"no id"},{"id":"x"}]}]}"#,
        );
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.len(), 1);
    }

    #[test]
    fn questions_without_usable_options_are_skipped() {
        let questions = questions_from(
            r#"[{"id":"empty","type":"single_select"},
                {"id":"anonymous","options":[{"label":"no id"}]},
                {"id":"kept","options":[{"id":"x"}]}]"#,
        );
        let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["kept"]);
    }

    #[test]
    fn question_shape_is_normalized() {
        let questions = questions_from(
            r#"[
                {"id":"m","type":"multiSelect","maxSelect":0,"order":2,"section":"Work",
                    "options":[{"id":"a"}]},
                {"id":"b","type":"boolean","maxSelect":3,"options":[
                    {"id":"y","role":"yes"},{"id":"n","role":"No"}]},
                {"id":"r","type":"slider","scale":{"min":1,"max":5},"options":[
                    {"id":"one","value":1},{"id":"five","value":5}]},
                {"id":"u","type":"ranking","options":[{"id":"only"}]}
            ]"#,
        );
        assert_eq!(questions[0].question_type, QuestionType::MultiSelect);
        assert_eq!(questions[0].max_select, None);
        assert_eq!(questions[0].order, Some(2));
        assert_eq!(questions[0].section.as_deref(), Some("Work"));

        assert_eq!(questions[1].question_type, QuestionType::Boolean);
        assert_eq!(questions[1].max_select, None);
        assert_eq!(questions[1].options[1].role, Some(OptionRole::No));

        assert_eq!(questions[2].question_type, QuestionType::ContinuousRating);
        assert_eq!(questions[2].scale, Some(RatingScale::new(1.0, 5.0)));
        assert_eq!(questions[2].options[1].value, Some(5.0));

        assert_eq!(questions[3].question_type, QuestionType::SingleSelect);
    }

    #[test]
    fn career_traits_come_from_flags_and_lists() {
        let careers = careers_from(
            r#"[{"id":"rn","title":"Registered Nurse",
                "quizVector":{"patient_facing":3,"teamwork":1},
                "educationLevel":"BACH","requiresLicensure":true,
                "salary":{"min":52000,"median":61000},
                "bloodNeedles":true,"dealbreakers":["nights_weekends","telepathy"]}]"#,
        );
        let rn = &careers[0];
        assert_eq!(rn.quiz_vector.get(Dimension::PatientFacing), 3.0);
        assert_eq!(rn.education_level, Some(EducationLevel::Bachelor));
        assert!(rn.requires_licensure);
        assert_eq!(rn.salary.min, Some(52000));
        assert_eq!(rn.salary.max, None);
        assert!(rn.has_trait(DealbreakerTrait::BloodNeedles));
        assert!(rn.has_trait(DealbreakerTrait::NightsWeekends));
        assert!(!rn.has_trait(DealbreakerTrait::Lifting));
    }

    #[test]
    fn flat_salary_fields_and_unknown_education_are_tolerated() {
        let careers = careers_from(
            r#"[{"id":"pt","name":"Phlebotomist","salaryMin":31000,"minEducation":"PHD"}]"#,
        );
        assert_eq!(careers[0].title, "Phlebotomist");
        assert_eq!(careers[0].salary.min, Some(31000));
        assert_eq!(careers[0].education_level, None);
    }
}
