//! Hard filter taxonomy: binary exclusion rules attached to answer options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Minimum education a career requires, ordered from shortest to longest.
///
/// `FastForward < CareerStudiesCertificate < Certificate < AssociateApplied
/// < Bachelor < Graduate`; the derived `Ord` follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "FF")]
    FastForward,
    #[serde(rename = "CSC")]
    CareerStudiesCertificate,
    #[serde(rename = "CERT")]
    Certificate,
    #[serde(rename = "AAS")]
    AssociateApplied,
    #[serde(rename = "BACH")]
    Bachelor,
    #[serde(rename = "GRAD")]
    Graduate,
}

impl EducationLevel {
    /// Every level, lowest first.
    pub const ALL: [EducationLevel; 6] = [
        EducationLevel::FastForward,
        EducationLevel::CareerStudiesCertificate,
        EducationLevel::Certificate,
        EducationLevel::AssociateApplied,
        EducationLevel::Bachelor,
        EducationLevel::Graduate,
    ];

    /// Ordinal rank, 0 for the shortest path.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Content-store code for this level.
    pub fn code(&self) -> &'static str {
        match self {
            EducationLevel::FastForward => "FF",
            EducationLevel::CareerStudiesCertificate => "CSC",
            EducationLevel::Certificate => "CERT",
            EducationLevel::AssociateApplied => "AAS",
            EducationLevel::Bachelor => "BACH",
            EducationLevel::Graduate => "GRAD",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for EducationLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        EducationLevel::ALL
            .into_iter()
            .find(|level| level.code() == code)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "education_level",
                    format!("unknown code '{}'", s),
                )
            })
    }
}

/// A disqualifying trait a career can be flagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealbreakerTrait {
    /// Regular heavy lifting or patient transfers.
    Lifting,
    /// Night, weekend or rotating shift work.
    NightsWeekends,
    /// Exposure to blood, needles or bodily fluids.
    BloodNeedles,
    /// Acute, high-stakes stress (trauma, emergency).
    AcuteStress,
}

impl DealbreakerTrait {
    pub const ALL: [DealbreakerTrait; 4] = [
        DealbreakerTrait::Lifting,
        DealbreakerTrait::NightsWeekends,
        DealbreakerTrait::BloodNeedles,
        DealbreakerTrait::AcuteStress,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DealbreakerTrait::Lifting => "lifting",
            DealbreakerTrait::NightsWeekends => "nights_weekends",
            DealbreakerTrait::BloodNeedles => "blood_needles",
            DealbreakerTrait::AcuteStress => "acute_stress",
        }
    }
}

impl fmt::Display for DealbreakerTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for DealbreakerTrait {
    type Err = ValidationError;

    /// Accepts the canonical keys plus the spellings older content uses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "lifting" | "heavy_lifting" => Ok(DealbreakerTrait::Lifting),
            "nights_weekends" | "nightsweekends" | "shift_work" | "schedule" => {
                Ok(DealbreakerTrait::NightsWeekends)
            }
            "blood_needles" | "bloodneedles" | "blood" | "needles" | "exposure" => {
                Ok(DealbreakerTrait::BloodNeedles)
            }
            "acute_stress" | "acutestress" | "stress" | "high_stress" => {
                Ok(DealbreakerTrait::AcuteStress)
            }
            _ => Err(ValidationError::invalid_format(
                "dealbreaker",
                format!("unknown trait '{}'", s),
            )),
        }
    }
}

/// A binary exclusion rule.
///
/// Serialized as a tagged record: `{"kind": "min_start_salary", "salaryMin": 40000}`.
/// Equality, hashing and ordering cover the kind and every field, which is
/// what de-duplication in a [`super::HardFilterSet`] relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HardFilter {
    /// Excludes careers requiring more education than `max_level`.
    #[serde(rename_all = "camelCase")]
    EducationCeiling { max_level: EducationLevel },

    /// Excludes careers requiring a professional license when set.
    #[serde(rename_all = "camelCase")]
    LicensureRule { exclude_licensure: bool },

    /// Excludes careers whose minimum starting salary is below `salary_min`.
    #[serde(rename_all = "camelCase")]
    MinStartSalary { salary_min: u32 },

    /// Excludes careers flagged with the trait.
    Dealbreaker {
        #[serde(rename = "trait")]
        dealbreaker: DealbreakerTrait,
    },

    /// Reserved. Never excludes.
    Region { region: String },
}

impl HardFilter {
    /// Region filter with the value normalized for de-duplication.
    pub fn region(region: &str) -> Self {
        HardFilter::Region {
            region: region.trim().to_lowercase(),
        }
    }

    /// Short discriminant name, matching the serialized `kind`.
    pub fn kind(&self) -> &'static str {
        match self {
            HardFilter::EducationCeiling { .. } => "education_ceiling",
            HardFilter::LicensureRule { .. } => "licensure_rule",
            HardFilter::MinStartSalary { .. } => "min_start_salary",
            HardFilter::Dealbreaker { .. } => "dealbreaker",
            HardFilter::Region { .. } => "region",
        }
    }
}
