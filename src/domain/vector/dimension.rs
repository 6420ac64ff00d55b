//! The fixed set of preference axes every vector is defined over.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One named numeric axis of a preference vector.
///
/// Declaration order is the canonical iteration order. It carries no
/// meaning beyond making iteration and serialization deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Direct, hands-on work with patients.
    PatientFacing,
    /// Laboratory, diagnostic or research orientation.
    LabResearch,
    /// Preference for a fast-paced, high-tempo day.
    FastPaced,
    /// Tolerance for standing, moving and physical exertion.
    PhysicalDemands,
    /// Hospital or clinical setting as opposed to office or community.
    ClinicalSetting,
    /// Importance of a short path from training to first job.
    ShortPathToEntry,
    /// Affinity for equipment, imaging and technology.
    TechnologyFocus,
    /// Preference for working within a team rather than independently.
    Teamwork,
}

impl Dimension {
    /// Number of dimensions in the set.
    pub const COUNT: usize = 8;

    /// Every dimension, in canonical order.
    pub const ALL: [Dimension; Dimension::COUNT] = [
        Dimension::PatientFacing,
        Dimension::LabResearch,
        Dimension::FastPaced,
        Dimension::PhysicalDemands,
        Dimension::ClinicalSetting,
        Dimension::ShortPathToEntry,
        Dimension::TechnologyFocus,
        Dimension::Teamwork,
    ];

    /// Position of this dimension in [`Dimension::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the content-store key for this dimension.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::PatientFacing => "patient_facing",
            Dimension::LabResearch => "lab_research",
            Dimension::FastPaced => "fast_paced",
            Dimension::PhysicalDemands => "physical_demands",
            Dimension::ClinicalSetting => "clinical_setting",
            Dimension::ShortPathToEntry => "short_path_to_entry",
            Dimension::TechnologyFocus => "technology_focus",
            Dimension::Teamwork => "teamwork",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Dimension {
    type Err = ValidationError;

    /// Parses a content-store key. Accepts snake_case and camelCase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        Dimension::ALL
            .into_iter()
            .find(|d| d.key().replace('_', "") == normalized)
            .ok_or_else(|| {
                ValidationError::invalid_format("dimension", format!("unknown dimension '{}'", s))
            })
    }
}
