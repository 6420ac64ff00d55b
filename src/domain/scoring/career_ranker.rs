//! Career Ranker - filters and orders the catalog for a final user vector.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::VectorScorer;
use crate::domain::catalog::CareerRecord;
use crate::domain::filter::{FilterEngine, HardFilterSet};
use crate::domain::foundation::MatchPercentage;
use crate::domain::vector::PreferenceVector;

/// A career that survived ranking, with both derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCareer {
    pub career: CareerRecord,

    /// Ranking score.
    pub dot_score: f64,

    /// Display statistic; not used for ordering.
    pub match_percentage: MatchPercentage,
}

/// Catalog ranking pipeline.
pub struct CareerRanker;

impl CareerRanker {
    /// Ranks the catalog against a final user vector.
    ///
    /// # Algorithm
    /// 1. Score every career with `dot_score`
    /// 2. Drop careers scoring `<= 0`
    /// 3. Drop careers any active filter excludes
    /// 4. Sort by score descending; equal scores keep catalog order
    pub fn rank(
        user: &PreferenceVector,
        filters: &HardFilterSet,
        catalog: &[CareerRecord],
    ) -> Vec<RankedCareer> {
        let mut non_positive = 0usize;
        let mut excluded = 0usize;

        let mut ranked: Vec<RankedCareer> = catalog
            .iter()
            .filter_map(|career| {
                let dot_score = VectorScorer::dot_score(user, &career.quiz_vector);
                if dot_score <= 0.0 {
                    non_positive += 1;
                    return None;
                }
                if FilterEngine::should_exclude(filters, career) {
                    excluded += 1;
                    return None;
                }
                Some(RankedCareer {
                    career: career.clone(),
                    dot_score,
                    match_percentage: VectorScorer::match_percentage(user, &career.quiz_vector),
                })
            })
            .collect();

        // Vec::sort_by is stable, which gives the catalog-order tie-break.
        ranked.sort_by(|a, b| b.dot_score.total_cmp(&a.dot_score));

        debug!(
            catalog = catalog.len(),
            ranked = ranked.len(),
            non_positive,
            excluded,
            "Ranked career catalog"
        );
        ranked
    }
}
