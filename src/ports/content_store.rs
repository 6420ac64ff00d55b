//! Content Store Port - read-only access to quiz questions and the career catalog.
//!
//! The content store is an external document store. Both fetches are
//! one-shot: implementations report failures and never retry, leaving
//! retry policy to the caller.

use async_trait::async_trait;

use crate::domain::catalog::{CareerRecord, Question};

/// Errors that can occur while fetching content.
///
/// These are distinct from a legitimately empty result: an empty question
/// list or catalog is `Ok(vec![])`.
#[derive(Debug, thiserror::Error)]
pub enum ContentStoreError {
    #[error("Content store unavailable: {0}")]
    Unavailable(String),

    #[error("Content not found: {0}")]
    NotFound(String),

    #[error("Malformed content: {0}")]
    Malformed(String),
}

/// Port for loading quiz content.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Load the question list, optionally localized.
    ///
    /// The language only changes display text; weights and hard filters are
    /// identical across languages.
    ///
    /// # Errors
    /// Returns `ContentStoreError` if the store cannot be reached or read
    async fn load_questions(
        &self,
        language: Option<&str>,
    ) -> Result<Vec<Question>, ContentStoreError>;

    /// Load the full career catalog.
    ///
    /// # Errors
    /// Returns `ContentStoreError` if the store cannot be reached or read
    async fn load_careers(&self) -> Result<Vec<CareerRecord>, ContentStoreError>;
}
