//! HTTP Content Store Adapter
//!
//! Fetches questions and careers from a content API:
//!
//! - `GET {base_url}/questions?lang=<tag>`
//! - `GET {base_url}/careers`
//!
//! Responses are either a JSON array or `{"result": [...]}`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::records::{normalize_careers, normalize_questions, RawCareer, RawDocument, RawQuestion};
use crate::domain::catalog::{CareerRecord, Question};
use crate::ports::{ContentStore, ContentStoreError};

/// Connection settings for the content API.
#[derive(Debug, Clone)]
pub struct HttpContentStoreConfig {
    pub base_url: String,

    /// Sent as a bearer token when present.
    pub api_token: Option<SecretString>,

    pub timeout: Duration,
}

impl HttpContentStoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: None,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Content store backed by a remote JSON API.
pub struct HttpContentStore {
    config: HttpContentStoreConfig,
    client: Client,
}

impl HttpContentStore {
    pub fn new(config: HttpContentStoreConfig) -> Result<Self, ContentStoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ContentStoreError::Unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<Vec<T>, ContentStoreError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| ContentStoreError::Unavailable(format!("{}: {}", what, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ContentStoreError::NotFound(what.to_string()));
        }
        if !status.is_success() {
            return Err(ContentStoreError::Unavailable(format!(
                "{}: unexpected status {}",
                what, status
            )));
        }

        let document: RawDocument<T> = response
            .json()
            .await
            .map_err(|e| ContentStoreError::Malformed(format!("{}: {}", what, e)))?;

        debug!(what, %status, "Fetched content");
        Ok(document.into_records())
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn load_questions(
        &self,
        language: Option<&str>,
    ) -> Result<Vec<Question>, ContentStoreError> {
        let mut request = self.client.get(self.endpoint("questions"));
        if let Some(lang) = language.map(str::trim).filter(|l| !l.is_empty()) {
            request = request.query(&[("lang", lang)]);
        }
        let raw: Vec<RawQuestion> = self.fetch(request, "questions").await?;
        Ok(normalize_questions(raw))
    }

    async fn load_careers(&self) -> Result<Vec<CareerRecord>, ContentStoreError> {
        let request = self.client.get(self.endpoint("careers"));
        let raw: Vec<RawCareer> = self.fetch(request, "careers").await?;
        Ok(normalize_careers(raw))
    }
}
