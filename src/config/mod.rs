//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `CAREER_MATCH` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use career_match::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod content;
mod error;
mod logging;
mod matching;

pub use content::{ContentConfig, ContentSource};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use matching::MatchingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// file-backed configuration reading from `./content`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Content store selection and connection settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Result shaping
    #[serde(default)]
    pub matching: MatchingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `CAREER_MATCH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CAREER_MATCH__CONTENT__SOURCE=http` -> `content.source = http`
    /// - `CAREER_MATCH__MATCHING__MAX_RESULTS=10` -> `matching.max_results = 10`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAREER_MATCH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.content.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
