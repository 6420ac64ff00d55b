//! Quiz session aggregate.
//!
//! A session owns the loaded questions, the per-question selections and the
//! running user vector. Every answer mutation rebuilds the vector from zero
//! out of the currently selected options, so it is exactly their sum no
//! matter how often an option was toggled.
//!
//! # Lifecycle
//!
//! `NotStarted -> InProgress -> Completed`; `reset` returns to `NotStarted`
//! from any state and `start` restarts a completed quiz.
//!
//! Invalid input (unknown ids, answering outside `InProgress`, navigating
//! past the ends) is ignored and logged, never raised.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    AnswerOutcome, Answers, IgnoreReason, QuestionProgress, QuizProgress, QuizResults, Selection,
};
use crate::domain::catalog::{CareerRecord, Question, QuestionType};
use crate::domain::filter::{FilterEngine, HardFilterSet};
use crate::domain::foundation::{
    OptionId, QuestionId, QuizSessionId, QuizStatus, StateMachine, Timestamp,
};
use crate::domain::scoring::{CareerRanker, VectorScorer};
use crate::domain::vector::{PreferenceVector, Sign};

/// Quiz session aggregate.
///
/// # Invariants
///
/// - `vector` equals the sum of the weights of every selected option
/// - `current_index < questions.len()` whenever there are questions
/// - multi-select selections never exceed the question's `max_select`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    id: QuizSessionId,
    status: QuizStatus,

    /// Questions in presentation order.
    questions: Vec<Question>,

    current_index: usize,
    answers: Answers,

    /// Live user vector.
    vector: PreferenceVector,

    /// Language the questions were loaded in, if any.
    language: Option<String>,

    started_at: Option<Timestamp>,
    completed_at: Option<Timestamp>,
}

impl QuizSession {
    /// Creates a session over the given questions, not yet started.
    ///
    /// Questions are put in presentation order: by `order` key, with
    /// unordered questions after ordered ones, each group keeping its
    /// original relative position. Questions without options can never be
    /// answered and are left out.
    pub fn new(id: QuizSessionId, mut questions: Vec<Question>, language: Option<String>) -> Self {
        questions.retain(|q| {
            let answerable = !q.options.is_empty();
            if !answerable {
                warn!(session_id = %id, question_id = %q.id, "Dropping question without options");
            }
            answerable
        });
        questions.sort_by_key(|q| (q.order.is_none(), q.order));

        Self {
            id,
            status: QuizStatus::NotStarted,
            questions,
            current_index: 0,
            answers: Answers::new(),
            vector: PreferenceVector::empty(),
            language,
            started_at: None,
            completed_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &QuizSessionId {
        &self.id
    }

    pub fn status(&self) -> QuizStatus {
        self.status
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question currently shown, if the quiz has any.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// The live user vector.
    pub fn vector(&self) -> &PreferenceVector {
        &self.vector
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn started_at(&self) -> Option<&Timestamp> {
        self.started_at.as_ref()
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    /// Hard filters carried by the options selected so far.
    pub fn active_filters(&self) -> HardFilterSet {
        FilterEngine::collect_filters(&self.answers, &self.questions)
    }

    /// True iff the question has a non-empty selection.
    pub fn is_answered(&self, question_id: &QuestionId) -> bool {
        self.answers.is_answered(question_id)
    }

    /// Forward navigation is allowed from an answered, non-final question.
    pub fn can_advance(&self) -> bool {
        self.status.accepts_answers()
            && self.current_index + 1 < self.questions.len()
            && self
                .current_question()
                .is_some_and(|q| self.is_answered(&q.id))
    }

    /// Finishing requires every question to be answered.
    pub fn can_finish(&self) -> bool {
        self.status.accepts_answers() && self.questions.iter().all(|q| self.is_answered(&q.id))
    }

    /// Snapshot for progress rendering.
    pub fn progress(&self) -> QuizProgress {
        let questions: Vec<QuestionProgress> = self
            .questions
            .iter()
            .map(|q| QuestionProgress {
                question_id: q.id.clone(),
                section: q.section.clone(),
                answered: self.is_answered(&q.id),
            })
            .collect();

        QuizProgress {
            session_id: self.id,
            status: self.status,
            current_index: self.current_index,
            current_question_id: self.current_question().map(|q| q.id.clone()),
            total_questions: self.questions.len(),
            answered_count: questions.iter().filter(|q| q.answered).count(),
            questions,
            vector: self.vector,
            can_advance: self.can_advance(),
            can_finish: self.can_finish(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts (or restarts) the quiz from the first question with a clean
    /// slate. Returns false if the session is already in progress.
    pub fn start(&mut self) -> bool {
        let Ok(status) = self.status.transition_to(QuizStatus::InProgress) else {
            debug!(session_id = %self.id, status = %self.status, "Ignoring start");
            return false;
        };

        self.clear();
        self.status = status;
        self.started_at = Some(Timestamp::now());
        self.show_current();
        true
    }

    /// Returns the session to `NotStarted`, discarding all answers.
    pub fn reset(&mut self) {
        self.clear();
        self.status = QuizStatus::NotStarted;
        self.started_at = None;
    }

    /// Completes the quiz and ranks the catalog against the final vector.
    ///
    /// Collects the active hard filters, drops careers with a non-positive
    /// dot score or violating any filter, and orders the rest by score.
    ///
    /// Stricter than `next`: forward navigation only needs the current
    /// question answered, but finishing needs every question answered
    /// (continuous questions count once shown). Returns `None` and changes
    /// nothing unless the quiz is in progress and [`can_finish`] holds.
    ///
    /// [`can_finish`]: Self::can_finish
    pub fn finish(&mut self, catalog: &[CareerRecord]) -> Option<QuizResults> {
        if !self.can_finish() {
            debug!(
                session_id = %self.id,
                status = %self.status,
                "Ignoring finish: quiz not in progress or not fully answered"
            );
            return None;
        }
        let status = self.status.transition_to(QuizStatus::Completed).ok()?;

        let filters = self.active_filters();
        let ranked = CareerRanker::rank(&self.vector, &filters, catalog);
        let completed_at = Timestamp::now();

        self.status = status;
        self.completed_at = Some(completed_at);

        Some(QuizResults {
            session_id: self.id,
            vector: self.vector,
            filters,
            ranked,
            completed_at,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves to the next question. No-op at the last question or while the
    /// current question is unanswered.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.current_index += 1;
        self.show_current();
        true
    }

    /// Moves to the previous question. No-op at the first question.
    pub fn previous(&mut self) -> bool {
        if !self.status.accepts_answers() || self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        self.show_current();
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Answers
    // ─────────────────────────────────────────────────────────────────────────

    /// Records an answer event.
    ///
    /// Single-select, boolean and continuous questions replace any prior
    /// selection. Multi-select questions toggle the option, refusing to add
    /// beyond `max_select`.
    pub fn answer(&mut self, question_id: &QuestionId, option_id: &OptionId) -> AnswerOutcome {
        if !self.status.accepts_answers() {
            return self.ignored(question_id, IgnoreReason::NotInProgress);
        }
        let Some(index) = self.question_index(question_id) else {
            return self.ignored(question_id, IgnoreReason::UnknownQuestion);
        };
        if self.questions[index].option(option_id).is_none() {
            return self.ignored(question_id, IgnoreReason::UnknownOption);
        }

        if self.questions[index].question_type.is_multi() {
            self.toggle(index, option_id)
        } else {
            self.replace(index, option_id)
        }
    }

    /// Answers a boolean question by the option tagged with the matching role.
    pub fn answer_boolean(&mut self, question_id: &QuestionId, value: bool) -> AnswerOutcome {
        let Some(index) = self.question_index(question_id) else {
            return self.ignored(question_id, IgnoreReason::UnknownQuestion);
        };
        match self.questions[index].option_by_role(value.into()) {
            Some(option) => {
                let option_id = option.id.clone();
                self.answer(question_id, &option_id)
            }
            None => self.ignored(question_id, IgnoreReason::NoOptionForRole),
        }
    }

    /// Answers a continuous-rating question with the option nearest `value`.
    pub fn answer_rating(&mut self, question_id: &QuestionId, value: f64) -> AnswerOutcome {
        let Some(index) = self.question_index(question_id) else {
            return self.ignored(question_id, IgnoreReason::UnknownQuestion);
        };
        match self.questions[index].option_for_value(value) {
            Some(option) => {
                let option_id = option.id.clone();
                self.answer(question_id, &option_id)
            }
            None => self.ignored(question_id, IgnoreReason::NoOptionForValue),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn question_index(&self, question_id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| &q.id == question_id)
    }

    fn ignored(&self, question_id: &QuestionId, reason: IgnoreReason) -> AnswerOutcome {
        debug!(
            session_id = %self.id,
            question_id = %question_id,
            %reason,
            "Ignoring answer"
        );
        AnswerOutcome::Ignored { reason }
    }

    fn replace(&mut self, index: usize, option_id: &OptionId) -> AnswerOutcome {
        let question = &self.questions[index];
        let previous = match self.answers.get(&question.id) {
            Some(Selection::Single(previous)) => Some(previous.clone()),
            _ => None,
        };
        if previous.as_ref() == Some(option_id) {
            return AnswerOutcome::Unchanged;
        }

        self.answers
            .set(question.id.clone(), Selection::Single(option_id.clone()));
        self.rebuild_vector();

        match previous {
            Some(previous) => AnswerOutcome::Replaced { previous },
            None => AnswerOutcome::Selected,
        }
    }

    fn toggle(&mut self, index: usize, option_id: &OptionId) -> AnswerOutcome {
        let question = &self.questions[index];
        if question.option(option_id).is_none() {
            return AnswerOutcome::Ignored {
                reason: IgnoreReason::UnknownOption,
            };
        }
        let mut selected: Vec<OptionId> = self
            .answers
            .get(&question.id)
            .map(|s| s.option_ids().to_vec())
            .unwrap_or_default();

        let outcome = if let Some(position) = selected.iter().position(|id| id == option_id) {
            selected.remove(position);
            AnswerOutcome::Deselected
        } else if question.max_select.is_some_and(|max| selected.len() >= max) {
            debug!(
                session_id = %self.id,
                question_id = %question.id,
                max_select = ?question.max_select,
                "Ignoring answer: maximum selections reached"
            );
            return AnswerOutcome::Ignored {
                reason: IgnoreReason::MaxSelectReached,
            };
        } else {
            selected.push(option_id.clone());
            AnswerOutcome::Selected
        };

        self.answers
            .set(question.id.clone(), Selection::Multiple(selected));
        self.rebuild_vector();
        outcome
    }

    /// Sums the selected options' weights from zero, in presentation order.
    fn rebuild_vector(&mut self) {
        let mut vector = PreferenceVector::empty();
        for question in &self.questions {
            let Some(selection) = self.answers.get(&question.id) else {
                continue;
            };
            for option in selection.option_ids().iter().filter_map(|id| question.option(id)) {
                vector = VectorScorer::apply_weights(&vector, &option.weights, Sign::Apply);
            }
        }
        self.vector = vector;
    }

    /// Continuous-rating questions start on their default option the first
    /// time they are shown, so finishing never requires touching a slider.
    fn show_current(&mut self) {
        let Some(question) = self.current_question() else {
            return;
        };
        if question.question_type != QuestionType::ContinuousRating || self.is_answered(&question.id)
        {
            return;
        }
        let Some(default) = question.default_option() else {
            return;
        };

        let question_id = question.id.clone();
        let option_id = default.id.clone();
        debug!(
            session_id = %self.id,
            question_id = %question_id,
            option_id = %option_id,
            "Registering default rating"
        );
        self.answer(&question_id, &option_id);
    }

    fn clear(&mut self) {
        self.current_index = 0;
        self.answers.clear();
        self.vector = PreferenceVector::empty();
        self.completed_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{OptionRole, QuizOption, RatingScale};
    use crate::domain::filter::{DealbreakerTrait, HardFilter};
    use crate::domain::foundation::CareerId;
    use crate::domain::vector::{Dimension, Weights};

    fn qid(s: &str) -> QuestionId {
        QuestionId::new(s).unwrap()
    }

    fn oid(s: &str) -> OptionId {
        OptionId::new(s).unwrap()
    }

    fn w(d: Dimension, v: f64) -> Weights {
        Weights::new().with(d, v)
    }

    fn single() -> Question {
        Question::new(
            qid("setting"),
            "Where do you want to work?",
            QuestionType::SingleSelect,
            vec![
                QuizOption::new(oid("hospital"), "Hospital", w(Dimension::ClinicalSetting, 2.0)),
                QuizOption::new(oid("lab"), "Lab", w(Dimension::LabResearch, 3.0)),
            ],
        )
        .with_order(1)
    }

    fn multi() -> Question {
        Question::new(
            qid("likes"),
            "Pick up to two",
            QuestionType::MultiSelect,
            vec![
                QuizOption::new(oid("a"), "People", w(Dimension::PatientFacing, 1.0)),
                QuizOption::new(oid("b"), "Machines", w(Dimension::TechnologyFocus, 2.0)),
                QuizOption::new(oid("c"), "Speed", w(Dimension::FastPaced, 3.0)),
            ],
        )
        .with_max_select(2)
        .with_order(2)
    }

    fn boolean() -> Question {
        Question::new(
            qid("needles"),
            "OK with needles?",
            QuestionType::Boolean,
            vec![
                QuizOption::new(oid("needles-yes"), "Yes", Weights::new()).with_role(OptionRole::Yes),
                QuizOption::new(oid("needles-no"), "No", Weights::new())
                    .with_role(OptionRole::No)
                    .with_filter(HardFilter::Dealbreaker {
                        dealbreaker: DealbreakerTrait::BloodNeedles,
                    }),
            ],
        )
        .with_order(3)
    }

    fn slider() -> Question {
        let options = (1..=5)
            .map(|i| {
                QuizOption::new(
                    oid(&format!("pace-{}", i)),
                    i.to_string(),
                    w(Dimension::FastPaced, f64::from(i - 3)),
                )
                .with_value(f64::from(i))
            })
            .collect();
        Question::new(qid("pace"), "Preferred pace", QuestionType::ContinuousRating, options)
            .with_scale(RatingScale::new(1.0, 5.0))
            .with_order(4)
    }

    fn started(questions: Vec<Question>) -> QuizSession {
        let mut session = QuizSession::new(QuizSessionId::new(), questions, None);
        assert!(session.start());
        session
    }

    /// Vector rebuilt from scratch out of the current selections.
    fn recomputed(session: &QuizSession) -> PreferenceVector {
        let mut vector = PreferenceVector::empty();
        for question in session.questions() {
            let Some(selection) = session.answers().get(&question.id) else {
                continue;
            };
            for option_id in selection.option_ids() {
                vector.apply(&question.option(option_id).unwrap().weights, Sign::Apply);
            }
        }
        vector
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn new_session_is_not_started_and_rejects_answers() {
        let mut session = QuizSession::new(QuizSessionId::new(), vec![single()], None);
        assert_eq!(session.status(), QuizStatus::NotStarted);
        assert_eq!(
            session.answer(&qid("setting"), &oid("lab")),
            AnswerOutcome::Ignored {
                reason: IgnoreReason::NotInProgress
            }
        );
        assert!(session.vector().is_zero());
    }

    #[test]
    fn questions_are_sorted_by_order_with_unordered_last() {
        let unordered = Question::new(
            qid("free"),
            "?",
            QuestionType::SingleSelect,
            vec![QuizOption::new(oid("any"), "Any", Weights::new())],
        );
        let session = QuizSession::new(
            QuizSessionId::new(),
            vec![unordered, multi(), single()],
            None,
        );
        let ids: Vec<&str> = session.questions().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["setting", "likes", "free"]);
    }

    #[test]
    fn questions_without_options_do_not_block_finishing() {
        let empty = Question::new(qid("blank"), "?", QuestionType::SingleSelect, vec![]).with_order(2);
        let mut session = started(vec![single(), empty]);
        assert_eq!(session.questions().len(), 1);

        session.answer(&qid("setting"), &oid("lab"));
        assert!(session.can_finish());
        assert!(session.finish(&[]).is_some());
    }

    #[test]
    fn start_twice_is_ignored() {
        let mut session = started(vec![single()]);
        session.answer(&qid("setting"), &oid("lab"));
        assert!(!session.start());
        assert!(session.is_answered(&qid("setting")));
    }

    #[test]
    fn finish_before_start_is_ignored() {
        let mut session = QuizSession::new(QuizSessionId::new(), vec![], None);
        assert!(session.finish(&[]).is_none());
        assert_eq!(session.status(), QuizStatus::NotStarted);
    }

    #[test]
    fn finish_requires_every_question_answered() {
        let mut session = started(vec![single(), multi()]);
        session.answer(&qid("setting"), &oid("lab"));
        assert!(!session.can_finish());
        assert!(session.finish(&[]).is_none());
        assert_eq!(session.status(), QuizStatus::InProgress);

        session.answer(&qid("likes"), &oid("a"));
        assert!(session.finish(&[]).is_some());
        assert_eq!(session.status(), QuizStatus::Completed);
        assert!(session.completed_at().is_some());
    }

    #[test]
    fn completed_session_rejects_answers_until_restarted() {
        let mut session = started(vec![single()]);
        session.answer(&qid("setting"), &oid("lab"));
        session.finish(&[]).unwrap();

        assert!(session
            .answer(&qid("setting"), &oid("hospital"))
            .is_ignored());

        assert!(session.start());
        assert_eq!(session.status(), QuizStatus::InProgress);
        assert!(session.answers().is_empty());
        assert!(session.vector().is_zero());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn reset_returns_to_not_started_from_any_state() {
        let mut session = started(vec![single()]);
        session.answer(&qid("setting"), &oid("lab"));
        session.reset();
        assert_eq!(session.status(), QuizStatus::NotStarted);
        assert!(session.answers().is_empty());
        assert!(session.vector().is_zero());
        assert!(session.started_at().is_none());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Single select
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn single_select_replace_leaves_no_residue() {
        let mut session = started(vec![single()]);
        assert_eq!(session.answer(&qid("setting"), &oid("hospital")), AnswerOutcome::Selected);
        assert_eq!(
            session.answer(&qid("setting"), &oid("lab")),
            AnswerOutcome::Replaced {
                previous: oid("hospital")
            }
        );

        let mut only_second = started(vec![single()]);
        only_second.answer(&qid("setting"), &oid("lab"));

        assert_eq!(session.vector(), only_second.vector());
        assert_eq!(session.vector().get(Dimension::ClinicalSetting), 0.0);
        assert_eq!(session.vector().get(Dimension::LabResearch), 3.0);
    }

    #[test]
    fn reselecting_same_option_is_unchanged() {
        let mut session = started(vec![single()]);
        session.answer(&qid("setting"), &oid("lab"));
        assert_eq!(session.answer(&qid("setting"), &oid("lab")), AnswerOutcome::Unchanged);
        assert_eq!(session.vector().get(Dimension::LabResearch), 3.0);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut session = started(vec![single()]);
        assert_eq!(
            session.answer(&qid("nope"), &oid("lab")),
            AnswerOutcome::Ignored {
                reason: IgnoreReason::UnknownQuestion
            }
        );
        assert_eq!(
            session.answer(&qid("setting"), &oid("nope")),
            AnswerOutcome::Ignored {
                reason: IgnoreReason::UnknownOption
            }
        );
        assert!(session.answers().is_empty());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Multi select
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn multi_select_respects_max_select() {
        let mut session = started(vec![multi()]);
        session.answer(&qid("likes"), &oid("a"));
        session.answer(&qid("likes"), &oid("b"));
        let before = *session.vector();

        assert_eq!(
            session.answer(&qid("likes"), &oid("c")),
            AnswerOutcome::Ignored {
                reason: IgnoreReason::MaxSelectReached
            }
        );
        assert_eq!(*session.vector(), before);
        assert_eq!(
            session.answers().get(&qid("likes")),
            Some(&Selection::Multiple(vec![oid("a"), oid("b")]))
        );

        assert_eq!(session.answer(&qid("likes"), &oid("a")), AnswerOutcome::Deselected);
        assert_eq!(session.answer(&qid("likes"), &oid("c")), AnswerOutcome::Selected);
        assert_eq!(
            session.answers().get(&qid("likes")),
            Some(&Selection::Multiple(vec![oid("b"), oid("c")]))
        );
    }

    #[test]
    fn deselecting_everything_unanswers_the_question() {
        let mut session = started(vec![multi()]);
        session.answer(&qid("likes"), &oid("b"));
        session.answer(&qid("likes"), &oid("b"));
        assert!(!session.is_answered(&qid("likes")));
        assert!(session.vector().is_zero());
    }

    #[test]
    fn repeated_toggling_does_not_drift() {
        let mut session = started(vec![single(), multi()]);
        for round in 0..25 {
            session.answer(&qid("likes"), &oid("a"));
            session.answer(&qid("likes"), &oid(if round % 2 == 0 { "b" } else { "c" }));
            session.answer(&qid("setting"), &oid(if round % 3 == 0 { "lab" } else { "hospital" }));
            assert_eq!(*session.vector(), recomputed(&session));
        }
    }

    #[test]
    fn fractional_weights_leave_no_residue() {
        let tenth = Question::new(
            qid("setting"),
            "Where?",
            QuestionType::SingleSelect,
            vec![
                QuizOption::new(oid("bench"), "Bench", w(Dimension::LabResearch, 0.1)),
                QuizOption::new(oid("none"), "Anywhere", Weights::new()),
            ],
        )
        .with_order(1);
        let fifth = Question::new(
            qid("likes"),
            "Pick any",
            QuestionType::MultiSelect,
            vec![
                QuizOption::new(oid("samples"), "Samples", w(Dimension::LabResearch, 0.2)),
                QuizOption::new(oid("people"), "People", w(Dimension::Teamwork, 1.0)),
            ],
        )
        .with_order(2);
        let mut session = started(vec![tenth, fifth]);

        session.answer(&qid("setting"), &oid("bench"));
        session.answer(&qid("likes"), &oid("samples"));
        session.answer(&qid("setting"), &oid("none"));
        session.answer(&qid("likes"), &oid("samples"));
        session.answer(&qid("likes"), &oid("people"));

        assert_eq!(*session.vector(), recomputed(&session));
        assert_eq!(session.vector().get(Dimension::LabResearch), 0.0);

        let catalog = vec![CareerRecord::new(
            CareerId::new("lab").unwrap(),
            "Lab Scientist",
            PreferenceVector::from_weights(&w(Dimension::LabResearch, 1.0)),
        )];
        let results = session.finish(&catalog).unwrap();
        assert!(results.ranked.is_empty(), "zero alignment never ranks");
    }

    // ─────────────────────────────────────────────────────────────────────
    // Boolean and continuous
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn answer_boolean_resolves_by_role() {
        let mut session = started(vec![boolean()]);
        session.answer_boolean(&qid("needles"), false);
        assert_eq!(
            session.answers().get(&qid("needles")),
            Some(&Selection::Single(oid("needles-no")))
        );
        assert_eq!(session.active_filters().len(), 1);

        session.answer_boolean(&qid("needles"), true);
        assert!(session.active_filters().is_empty());
    }

    #[test]
    fn answer_boolean_without_roles_is_ignored() {
        let mut untagged = boolean();
        for option in &mut untagged.options {
            option.role = None;
        }
        let mut session = started(vec![untagged]);
        assert_eq!(
            session.answer_boolean(&qid("needles"), true),
            AnswerOutcome::Ignored {
                reason: IgnoreReason::NoOptionForRole
            }
        );
    }

    #[test]
    fn rating_question_registers_default_when_first_shown() {
        let session = started(vec![slider()]);
        assert_eq!(
            session.answers().get(&qid("pace")),
            Some(&Selection::Single(oid("pace-3")))
        );
        assert!(session.can_finish());
    }

    #[test]
    fn rating_default_is_registered_on_navigation() {
        let mut session = started(vec![single(), slider()]);
        assert!(!session.is_answered(&qid("pace")));
        session.answer(&qid("setting"), &oid("hospital"));
        assert!(session.next());
        assert!(session.is_answered(&qid("pace")));
    }

    #[test]
    fn rating_change_replaces_default() {
        let mut session = started(vec![slider()]);
        session.answer_rating(&qid("pace"), 4.8);
        assert_eq!(
            session.answers().get(&qid("pace")),
            Some(&Selection::Single(oid("pace-5")))
        );
        assert_eq!(session.vector().get(Dimension::FastPaced), 2.0);
    }

    #[test]
    fn revisiting_rating_keeps_explicit_choice() {
        let mut session = started(vec![single(), slider()]);
        session.answer(&qid("setting"), &oid("lab"));
        assert!(session.next());
        session.answer_rating(&qid("pace"), 1.0);
        assert!(session.previous());
        assert!(session.next());
        assert_eq!(
            session.answers().get(&qid("pace")),
            Some(&Selection::Single(oid("pace-1")))
        );
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation and progress
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn next_is_gated_on_answer_and_clamped() {
        let mut session = started(vec![single(), multi()]);
        assert!(!session.next());
        assert_eq!(session.current_index(), 0);

        session.answer(&qid("setting"), &oid("lab"));
        assert!(session.next());
        assert_eq!(session.current_index(), 1);

        session.answer(&qid("likes"), &oid("a"));
        assert!(!session.next());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn previous_is_clamped_at_first_question() {
        let mut session = started(vec![single(), multi()]);
        assert!(!session.previous());
        session.answer(&qid("setting"), &oid("lab"));
        session.next();
        assert!(session.previous());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn progress_reports_answered_state() {
        let mut session = started(vec![single(), multi()]);
        session.answer(&qid("setting"), &oid("hospital"));

        let progress = session.progress();
        assert_eq!(progress.total_questions, 2);
        assert_eq!(progress.answered_count, 1);
        assert!(progress.questions[0].answered);
        assert!(!progress.questions[1].answered);
        assert_eq!(progress.current_question_id, Some(qid("setting")));
        assert!(progress.can_advance);
        assert!(!progress.can_finish);
        assert_eq!(progress.vector.get(Dimension::ClinicalSetting), 2.0);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Finish
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn finish_ranks_with_final_vector_and_filters() {
        let mut session = started(vec![single(), boolean()]);
        session.answer(&qid("setting"), &oid("hospital"));
        session.answer(&qid("setting"), &oid("lab"));
        session.answer_boolean(&qid("needles"), false);

        let catalog = vec![
            CareerRecord::new(
                CareerId::new("phleb").unwrap(),
                "Phlebotomist",
                PreferenceVector::from_weights(&w(Dimension::LabResearch, 5.0)),
            )
            .with_trait(DealbreakerTrait::BloodNeedles),
            CareerRecord::new(
                CareerId::new("medlab").unwrap(),
                "Medical Lab Tech",
                PreferenceVector::from_weights(&w(Dimension::LabResearch, 2.0)),
            ),
            CareerRecord::new(
                CareerId::new("ward").unwrap(),
                "Ward Clerk",
                PreferenceVector::from_weights(&w(Dimension::ClinicalSetting, 4.0)),
            ),
        ];

        let results = session.finish(&catalog).unwrap();
        let ids: Vec<&str> = results.ranked.iter().map(|r| r.career.id.as_str()).collect();
        assert_eq!(ids, vec!["medlab"]);
        assert_eq!(results.ranked[0].dot_score, 6.0);
        assert_eq!(results.vector, *session.vector());
        assert_eq!(results.filters.len(), 1);
    }
}
