//! In-Memory Quiz Session Repository
//!
//! Keeps sessions in a map keyed by id. Suitable for a single process;
//! sessions are lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::QuizSession;
use crate::ports::{QuizSessionRepository, QuizSessionStoreError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryQuizSessionRepository {
    sessions: Arc<RwLock<HashMap<QuizSessionId, QuizSession>>>,
}

impl InMemoryQuizSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl QuizSessionRepository for InMemoryQuizSessionRepository {
    async fn save(&self, session: &QuizSession) -> Result<(), QuizSessionStoreError> {
        self.sessions
            .write()
            .await
            .insert(*session.id(), session.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &QuizSessionId,
    ) -> Result<Option<QuizSession>, QuizSessionStoreError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &QuizSessionId) -> Result<(), QuizSessionStoreError> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(QuizSessionStoreError::NotFound(*id))
    }
}
