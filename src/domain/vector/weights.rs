//! Partial weight maps contributed by answer options.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Dimension;

/// Direction in which a set of weights is applied to a running vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Add the weights (option selected).
    Apply,
    /// Subtract the weights (option deselected or replaced).
    Retract,
}

impl Sign {
    /// Multiplier for this direction.
    pub fn factor(&self) -> f64 {
        match self {
            Sign::Apply => 1.0,
            Sign::Retract => -1.0,
        }
    }
}

/// A partial preference vector: only the dimensions an option touches.
///
/// Dimensions absent from the map are left untouched when applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weights(BTreeMap<Dimension, f64>);

impl Weights {
    /// Creates an empty weight map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, dimension: Dimension, weight: f64) -> Self {
        self.0.insert(dimension, weight);
        self
    }

    /// Returns the weight for a dimension, if the map declares one.
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        self.0.get(&dimension).copied()
    }

    /// Iterates declared dimensions in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        self.0.iter().map(|(d, w)| (*d, *w))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(Dimension, f64)> for Weights {
    fn from_iter<I: IntoIterator<Item = (Dimension, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
