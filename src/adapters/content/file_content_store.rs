//! File-based Content Store Adapter
//!
//! Reads questions and careers from YAML or JSON files in one directory:
//!
//! ```text
//! content/
//!   questions.yaml      default language
//!   questions.es.yaml   per-language override
//!   careers.yaml
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::language::language_candidates;
use super::records::{normalize_careers, normalize_questions, RawCareer, RawDocument, RawQuestion};
use crate::domain::catalog::{CareerRecord, Question};
use crate::ports::{ContentStore, ContentStoreError};

const EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Content store backed by a directory of documents.
#[derive(Debug, Clone)]
pub struct FileContentStore {
    base_path: PathBuf,
}

impl FileContentStore {
    /// # Example
    /// ```ignore
    /// let store = FileContentStore::new("./content");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// First existing `<stem>.<ext>` in the base directory.
    async fn find_document(&self, stem: &str) -> Option<PathBuf> {
        for extension in EXTENSIONS {
            let path = self.base_path.join(format!("{}.{}", stem, extension));
            if fs::metadata(&path).await.is_ok() {
                return Some(path);
            }
        }
        None
    }

    async fn read_document<T: DeserializeOwned>(
        &self,
        path: &Path,
    ) -> Result<Vec<T>, ContentStoreError> {
        let text = fs::read_to_string(path)
            .await
            .map_err(|e| ContentStoreError::Unavailable(format!("{}: {}", path.display(), e)))?;

        let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
        let document: RawDocument<T> = if is_json {
            serde_json::from_str(&text)
                .map_err(|e| ContentStoreError::Malformed(format!("{}: {}", path.display(), e)))?
        } else {
            serde_yaml::from_str(&text)
                .map_err(|e| ContentStoreError::Malformed(format!("{}: {}", path.display(), e)))?
        };

        debug!(path = %path.display(), "Loaded content document");
        Ok(document.into_records())
    }
}

#[async_trait]
impl ContentStore for FileContentStore {
    async fn load_questions(
        &self,
        language: Option<&str>,
    ) -> Result<Vec<Question>, ContentStoreError> {
        let mut stems: Vec<String> = language_candidates(language)
            .into_iter()
            .map(|lang| format!("questions.{}", lang))
            .collect();
        stems.push("questions".to_string());

        for stem in &stems {
            if let Some(path) = self.find_document(stem).await {
                let raw: Vec<RawQuestion> = self.read_document(&path).await?;
                return Ok(normalize_questions(raw));
            }
        }
        Err(ContentStoreError::NotFound(format!(
            "questions in {}",
            self.base_path.display()
        )))
    }

    async fn load_careers(&self) -> Result<Vec<CareerRecord>, ContentStoreError> {
        let path = self.find_document("careers").await.ok_or_else(|| {
            ContentStoreError::NotFound(format!("careers in {}", self.base_path.display()))
        })?;
        let raw: Vec<RawCareer> = self.read_document(&path).await?;
        Ok(normalize_careers(raw))
    }
}
