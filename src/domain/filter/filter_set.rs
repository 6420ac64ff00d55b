//! De-duplicated collection of active hard filters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::HardFilter;

/// The set of hard filters a user has opted into.
///
/// Identity is `(kind, fields)`: inserting an equal filter twice keeps one.
/// Iteration order is the filters' natural order, independent of the order
/// they were collected in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HardFilterSet(BTreeSet<HardFilter>);

impl HardFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter. Returns false if an equal filter was already present.
    pub fn insert(&mut self, filter: HardFilter) -> bool {
        self.0.insert(filter)
    }

    pub fn contains(&self, filter: &HardFilter) -> bool {
        self.0.contains(filter)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HardFilter> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<HardFilter> for HardFilterSet {
    fn from_iter<I: IntoIterator<Item = HardFilter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a HardFilterSet {
    type Item = &'a HardFilter;
    type IntoIter = std::collections::btree_set::Iter<'a, HardFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
