//! Content Adapters
//!
//! Implementations of the `ContentStore` port.
//!
//! ## Available Adapters
//!
//! - **FileContentStore** - YAML/JSON documents in a directory
//! - **HttpContentStore** - remote content API
//! - **InMemoryContentStore** - fixed content (testing/development)
//!
//! All adapters normalize raw records through [`records`], which accepts the
//! structured `hardFilter` form as well as the older flat filter fields.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::content::{FileContentStore, HttpContentStore, HttpContentStoreConfig};
//!
//! let store = FileContentStore::new("./content");
//! let store = HttpContentStore::new(HttpContentStoreConfig::new("https://cms.example.org"))?;
//! ```

mod file_content_store;
mod http_content_store;
mod in_memory_content_store;
mod language;
pub mod records;

pub use file_content_store::FileContentStore;
pub use http_content_store::{HttpContentStore, HttpContentStoreConfig};
pub use in_memory_content_store::InMemoryContentStore;
