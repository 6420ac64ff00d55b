//! Shared content and mocks for handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::adapters::{InMemoryContentStore, InMemoryQuizSessionRepository};
use crate::domain::catalog::{CareerRecord, OptionRole, Question, QuestionType, QuizOption};
use crate::domain::filter::{DealbreakerTrait, HardFilter};
use crate::domain::foundation::{CareerId, OptionId, QuestionId, QuizSessionId};
use crate::domain::quiz::QuizSession;
use crate::domain::vector::{Dimension, PreferenceVector, Weights};
use crate::ports::{QuizSessionRepository, QuizSessionStoreError};

pub fn qid(id: &str) -> QuestionId {
    QuestionId::new(id).unwrap()
}

pub fn oid(id: &str) -> OptionId {
    OptionId::new(id).unwrap()
}

/// "setting" (single select) then "needles" (boolean, "no" excludes blood work).
pub fn questions() -> Vec<Question> {
    vec![
        Question::new(
            qid("setting"),
            "Where would you like to work?",
            QuestionType::SingleSelect,
            vec![
                QuizOption::new(
                    oid("clinic"),
                    "Clinic",
                    Weights::new()
                        .with(Dimension::PatientFacing, 2.0)
                        .with(Dimension::ClinicalSetting, 1.0),
                ),
                QuizOption::new(
                    oid("lab"),
                    "Lab",
                    Weights::new().with(Dimension::LabResearch, 2.0),
                ),
            ],
        )
        .with_order(1),
        Question::new(
            qid("needles"),
            "Comfortable around needles?",
            QuestionType::Boolean,
            vec![
                QuizOption::new(
                    oid("yes"),
                    "Yes",
                    Weights::new().with(Dimension::PatientFacing, 1.0),
                )
                .with_role(OptionRole::Yes),
                QuizOption::new(oid("no"), "No", Weights::new())
                    .with_role(OptionRole::No)
                    .with_filter(HardFilter::Dealbreaker {
                        dealbreaker: DealbreakerTrait::BloodNeedles,
                    }),
            ],
        )
        .with_order(2),
    ]
}

fn career(id: &str, weights: Weights) -> CareerRecord {
    CareerRecord::new(
        CareerId::new(id).unwrap(),
        id,
        PreferenceVector::from_weights(&weights),
    )
}

pub fn careers() -> Vec<CareerRecord> {
    vec![
        career(
            "rn",
            Weights::new()
                .with(Dimension::PatientFacing, 3.0)
                .with(Dimension::ClinicalSetting, 1.0),
        )
        .with_trait(DealbreakerTrait::BloodNeedles),
        career("lab_tech", Weights::new().with(Dimension::LabResearch, 3.0)),
        career("ma", Weights::new().with(Dimension::PatientFacing, 2.0)),
    ]
}

pub fn content() -> InMemoryContentStore {
    InMemoryContentStore::new(questions(), careers())
}

pub fn repository() -> InMemoryQuizSessionRepository {
    InMemoryQuizSessionRepository::new()
}

/// Saves a started session over the fixture questions.
pub async fn started_session(repo: &InMemoryQuizSessionRepository) -> QuizSession {
    let mut session = QuizSession::new(QuizSessionId::new(), questions(), None);
    session.start();
    repo.save(&session).await.unwrap();
    session
}

/// Repository whose writes always fail.
pub struct FailingRepository {
    pub session: Mutex<Option<QuizSession>>,
}

impl FailingRepository {
    pub fn holding(session: QuizSession) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

#[async_trait]
impl QuizSessionRepository for FailingRepository {
    async fn save(&self, _session: &QuizSession) -> Result<(), QuizSessionStoreError> {
        Err(QuizSessionStoreError::Storage(
            "Simulated save failure".to_string(),
        ))
    }

    async fn find_by_id(
        &self,
        _id: &QuizSessionId,
    ) -> Result<Option<QuizSession>, QuizSessionStoreError> {
        Ok(self.session.lock().unwrap().clone())
    }

    async fn delete(&self, id: &QuizSessionId) -> Result<(), QuizSessionStoreError> {
        Err(QuizSessionStoreError::NotFound(*id))
    }
}
