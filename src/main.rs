//! Content check.
//!
//! Loads the configured questions and careers through the same normalization
//! the quiz uses and logs a summary. Exits non-zero if either fails to load.

use std::collections::BTreeMap;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, warn};

use career_match::adapters::{FileContentStore, HttpContentStore, HttpContentStoreConfig};
use career_match::config::{AppConfig, ContentConfig, ContentSource, LoggingConfig};
use career_match::domain::catalog::{CareerRecord, Question};
use career_match::ports::{ContentStore, ContentStoreError};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }
    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match check_content(&config.content).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Content check failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(config: &LoggingConfig) -> Result<(), String> {
    let filter = config.env_filter().map_err(|e| e.to_string())?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| e.to_string())
}

fn build_content_store(config: &ContentConfig) -> Result<Arc<dyn ContentStore>, ContentStoreError> {
    match config.source {
        ContentSource::File => Ok(Arc::new(FileContentStore::new(&config.directory))),
        ContentSource::Http => {
            let mut http = HttpContentStoreConfig::new(config.base_url.clone().unwrap_or_default())
                .with_timeout(config.request_timeout());
            http.api_token = config.api_token.clone();
            Ok(Arc::new(HttpContentStore::new(http)?))
        }
    }
}

async fn check_content(config: &ContentConfig) -> Result<(), ContentStoreError> {
    let store = build_content_store(config)?;

    let questions = store.load_questions(config.default_language()).await?;
    let careers = store.load_careers().await?;

    summarize_questions(&questions);
    summarize_careers(&careers);

    info!(
        source = ?config.source,
        language = config.default_language().unwrap_or("default"),
        questions = questions.len(),
        careers = careers.len(),
        "Content loaded"
    );
    Ok(())
}

fn summarize_questions(questions: &[Question]) {
    let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut filters = 0;
    for question in questions {
        *by_type
            .entry(format!("{:?}", question.question_type))
            .or_default() += 1;
        filters += question
            .options
            .iter()
            .filter(|o| o.hard_filter.is_some())
            .count();
    }
    info!(?by_type, filter_options = filters, "Questions");
}

fn summarize_careers(careers: &[CareerRecord]) {
    for career in careers.iter().filter(|c| c.quiz_vector.is_zero()) {
        warn!(career_id = %career.id, "Career has an empty quiz vector and can never match");
    }
    let licensed = careers.iter().filter(|c| c.requires_licensure).count();
    let without_salary = careers.iter().filter(|c| c.salary.min.is_none()).count();
    info!(licensed, without_salary, "Careers");
}
