//! Matching configuration

use serde::Deserialize;

/// Result shaping for completed quizzes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingConfig {
    /// Maximum ranked careers returned; `0` means unlimited
    #[serde(default)]
    pub max_results: usize,
}

impl MatchingConfig {
    /// Effective cap, `None` when unlimited
    pub fn result_limit(&self) -> Option<usize> {
        (self.max_results > 0).then_some(self.max_results)
    }
}
