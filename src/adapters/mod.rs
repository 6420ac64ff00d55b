//! Adapters - Implementations of port interfaces.
//!
//! - `content` - content store implementations (file, HTTP, in-memory)
//! - `storage` - quiz session repository implementations

pub mod content;
pub mod storage;

pub use content::{FileContentStore, HttpContentStore, HttpContentStoreConfig, InMemoryContentStore};
pub use storage::InMemoryQuizSessionRepository;
