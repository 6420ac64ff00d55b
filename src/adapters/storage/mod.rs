//! Storage Adapters
//!
//! Implementations of the `QuizSessionRepository` port.
//!
//! - **InMemoryQuizSessionRepository** - sessions in a process-local map

mod in_memory_quiz_session_repository;

pub use in_memory_quiz_session_repository::InMemoryQuizSessionRepository;
