//! Vector Scorer - weight application, dot score and match percentage.

use crate::domain::foundation::MatchPercentage;
use crate::domain::vector::{Dimension, PreferenceVector, Sign, Weights};

/// Stateless scoring functions over preference vectors.
pub struct VectorScorer;

impl VectorScorer {
    /// Returns `vector` with `sign * weights[d]` added on each declared axis.
    pub fn apply_weights(vector: &PreferenceVector, weights: &Weights, sign: Sign) -> PreferenceVector {
        let mut result = *vector;
        result.apply(weights, sign);
        result
    }

    /// Raw alignment `Σ user[d] * career[d]`, used for ranking.
    ///
    /// Unbounded and signed; only strictly positive scores are ranked.
    pub fn dot_score(user: &PreferenceVector, career: &PreferenceVector) -> f64 {
        Dimension::ALL
            .iter()
            .map(|d| user.get(*d) * career.get(*d))
            .sum()
    }

    /// Cosine similarity remapped from [-1, 1] onto [0, 100].
    ///
    /// # Algorithm
    /// `cosine = dot / (|user| * |career|)`, then
    /// `clamp(((cosine + 1) / 2) * 100, 0, 100)`.
    ///
    /// # Edge Cases
    /// - Either vector has zero magnitude: 0%
    ///
    /// This is a display statistic. It can disagree with `dot_score`
    /// ordering because it ignores vector length.
    pub fn match_percentage(user: &PreferenceVector, career: &PreferenceVector) -> MatchPercentage {
        let user_magnitude = user.magnitude();
        let career_magnitude = career.magnitude();
        if user_magnitude == 0.0 || career_magnitude == 0.0 {
            return MatchPercentage::ZERO;
        }

        let cosine = Self::dot_score(user, career) / (user_magnitude * career_magnitude);
        MatchPercentage::new(((cosine + 1.0) / 2.0) * 100.0)
    }
}
