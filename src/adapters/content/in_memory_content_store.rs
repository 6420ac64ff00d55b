//! In-Memory Content Store Adapter
//!
//! Serves questions and careers from memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::language::language_candidates;
use crate::domain::catalog::{CareerRecord, Question};
use crate::ports::{ContentStore, ContentStoreError};

/// In-memory content with optional per-language question sets.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentStore {
    questions: Arc<RwLock<Vec<Question>>>,
    translations: Arc<RwLock<HashMap<String, Vec<Question>>>>,
    careers: Arc<RwLock<Vec<CareerRecord>>>,
    outage: Arc<RwLock<Option<String>>>,
}

impl InMemoryContentStore {
    pub fn new(questions: Vec<Question>, careers: Vec<CareerRecord>) -> Self {
        Self {
            questions: Arc::new(RwLock::new(questions)),
            careers: Arc::new(RwLock::new(careers)),
            ..Self::default()
        }
    }

    /// Registers questions for a language tag (stored lowercased).
    pub async fn set_translation(&self, language: &str, questions: Vec<Question>) {
        self.translations
            .write()
            .await
            .insert(language.trim().to_ascii_lowercase(), questions);
    }

    pub async fn set_careers(&self, careers: Vec<CareerRecord>) {
        *self.careers.write().await = careers;
    }

    /// Makes every load fail with `Unavailable` until cleared with `None`.
    pub async fn set_outage(&self, reason: Option<String>) {
        *self.outage.write().await = reason;
    }

    async fn check_available(&self) -> Result<(), ContentStoreError> {
        match self.outage.read().await.as_ref() {
            Some(reason) => Err(ContentStoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn load_questions(
        &self,
        language: Option<&str>,
    ) -> Result<Vec<Question>, ContentStoreError> {
        self.check_available().await?;

        let translations = self.translations.read().await;
        for candidate in language_candidates(language) {
            if let Some(questions) = translations.get(&candidate) {
                return Ok(questions.clone());
            }
        }
        Ok(self.questions.read().await.clone())
    }

    async fn load_careers(&self) -> Result<Vec<CareerRecord>, ContentStoreError> {
        self.check_available().await?;
        Ok(self.careers.read().await.clone())
    }
}
