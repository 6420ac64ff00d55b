//! Content store configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where questions and careers are loaded from
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub source: ContentSource,

    /// Directory holding `questions.yaml` and `careers.yaml` (file source)
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Content API root (http source)
    pub base_url: Option<String>,

    /// Bearer token for the content API
    pub api_token: Option<SecretString>,

    /// Language requested when a client does not ask for one
    pub default_language: Option<String>,

    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

/// Content backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    #[default]
    File,
    Http,
}

impl ContentConfig {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Default language, ignoring blank values
    pub fn default_language(&self) -> Option<&str> {
        self.default_language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    /// Validate content configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.source {
            ContentSource::File => {
                if self.directory.trim().is_empty() {
                    return Err(ValidationError::MissingRequired("CONTENT__DIRECTORY"));
                }
            }
            ContentSource::Http => {
                let url = self
                    .base_url
                    .as_deref()
                    .filter(|u| !u.trim().is_empty())
                    .ok_or(ValidationError::MissingRequired("CONTENT__BASE_URL"))?;
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ValidationError::InvalidContentUrl);
                }
            }
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: ContentSource::default(),
            directory: default_directory(),
            base_url: None,
            api_token: None,
            default_language: None,
            request_timeout_secs: default_timeout(),
        }
    }
}

fn default_directory() -> String {
    "./content".to_string()
}

fn default_timeout() -> u64 {
    10
}
