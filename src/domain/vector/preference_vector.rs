//! Total preference vectors over the full dimension set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Dimension, Sign, Weights};

/// A real-valued weight for every dimension in [`Dimension::ALL`].
///
/// Used both for the mutable user vector accumulated during a quiz and for
/// the immutable vector a career declares. Unset axes are zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Dimension, f64>", into = "BTreeMap<Dimension, f64>")]
pub struct PreferenceVector {
    values: [f64; Dimension::COUNT],
}

impl PreferenceVector {
    /// Returns a vector with every dimension mapped to 0.
    pub fn empty() -> Self {
        Self {
            values: [0.0; Dimension::COUNT],
        }
    }

    /// Builds a total vector from partial weights; undeclared axes are 0.
    pub fn from_weights(weights: &Weights) -> Self {
        let mut vector = Self::empty();
        vector.apply(weights, Sign::Apply);
        vector
    }

    /// Returns the value on one axis.
    pub fn get(&self, dimension: Dimension) -> f64 {
        self.values[dimension.index()]
    }

    /// Iterates every dimension with its value, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Euclidean norm, `sqrt(Σ v[d]^2)`.
    pub fn magnitude(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// True when every axis is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    /// Adds `sign * weights[d]` for each dimension declared in `weights`.
    ///
    /// Retracting previously applied fractional weights may leave a
    /// rounding residue; quiz sessions rebuild their vector from zero.
    pub fn apply(&mut self, weights: &Weights, sign: Sign) {
        let factor = sign.factor();
        for (dimension, weight) in weights.iter() {
            self.values[dimension.index()] += factor * weight;
        }
    }
}

impl Default for PreferenceVector {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<BTreeMap<Dimension, f64>> for PreferenceVector {
    fn from(map: BTreeMap<Dimension, f64>) -> Self {
        let mut vector = Self::empty();
        for (dimension, value) in map {
            vector.values[dimension.index()] = value;
        }
        vector
    }
}

impl From<PreferenceVector> for BTreeMap<Dimension, f64> {
    fn from(vector: PreferenceVector) -> Self {
        vector.iter().collect()
    }
}
