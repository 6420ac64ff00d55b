//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ContentStore` - question list and career catalog from the document store
//! - `QuizSessionRepository` - per-session state, isolated by session id

mod content_store;
mod quiz_session_repository;

pub use content_store::{ContentStore, ContentStoreError};
pub use quiz_session_repository::{QuizSessionRepository, QuizSessionStoreError};
