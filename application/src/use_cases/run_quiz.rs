//! Run Quiz use case
//!
//! Orchestrates a full quiz: loading the questions, page navigation,
//! submission and result retrieval, with every visible change pushed
//! through the [`PresentationBridge`].

use crate::ports::presentation::{ErrorKind, PresentationBridge};
use crate::ports::scoring_gateway::ScoringGateway;
use crate::use_cases::result_controller::{ResultController, ResultError, SubmitOutcome};
use compass_domain::{
    DomainError, InterpretedAxis, LikertValue, QuizResult, QuizSession, ResultKey, SessionState,
    Transition,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while running the quiz
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Could not load questions: {0}")]
    LoadFailed(String),

    #[error("Malformed question set: {0}")]
    MalformedQuestionSet(#[source] DomainError),

    #[error("{0}")]
    InvalidAnswer(#[source] DomainError),

    #[error("No question {0} on this page")]
    NoSuchQuestion(usize),

    #[error("No page is open (quiz is {0})")]
    NotAnswering(&'static str),

    #[error(transparent)]
    Result(#[from] ResultError),
}

impl QuizError {
    /// User-facing category, for errors that belong to the shared taxonomy
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            QuizError::LoadFailed(_) | QuizError::MalformedQuestionSet(_) => {
                Some(ErrorKind::MalformedQuestionSet)
            }
            QuizError::Result(e) => Some(e.kind()),
            QuizError::InvalidAnswer(_)
            | QuizError::NoSuchQuestion(_)
            | QuizError::NotAnswering(_) => None,
        }
    }
}

/// Use case for running the quiz
pub struct RunQuizUseCase<G: ScoringGateway + 'static> {
    session: QuizSession,
    results: ResultController<G>,
    bridge: Arc<dyn PresentationBridge>,
}

impl<G: ScoringGateway + 'static> RunQuizUseCase<G> {
    pub fn new(results: ResultController<G>, bridge: Arc<dyn PresentationBridge>) -> Self {
        Self {
            session: QuizSession::new(),
            results,
            bridge,
        }
    }

    /// Fetch and load the question set, then show the first page.
    ///
    /// Any failure here is fatal for the session.
    pub async fn start(&mut self) -> Result<(), QuizError> {
        let raw = match self.results.fetch_questions().await {
            Ok(raw) => raw,
            Err(e) => {
                let err = QuizError::LoadFailed(e.to_string());
                self.report(&err);
                return Err(err);
            }
        };

        if let Err(e) = self.session.load_json(&raw) {
            let err = QuizError::MalformedQuestionSet(e);
            self.report(&err);
            return Err(err);
        }

        info!(
            "Loaded {} questions on {} pages",
            self.session.questions().len(),
            self.session.page_count()
        );
        self.render_current();
        Ok(())
    }

    /// Record an answer by question id.
    pub fn answer(&mut self, question_id: &str, value: i64) -> Result<LikertValue, QuizError> {
        let value = self
            .session
            .record_answer(question_id, value)
            .map_err(QuizError::InvalidAnswer)?;
        debug!("Answered {} = {}", question_id, value);
        Ok(value)
    }

    /// Record an answer for the 1-based `position` on the current page.
    pub fn answer_on_page(&mut self, position: usize, value: i64) -> Result<LikertValue, QuizError> {
        let page = self
            .session
            .current_page()
            .ok_or(QuizError::NotAnswering(self.session.state().as_str()))?;
        let id = page
            .question_at(position)
            .ok_or(QuizError::NoSuchQuestion(position))?
            .id()
            .to_string();
        self.answer(&id, value)
    }

    /// Move to the next page, or submit from the last one.
    ///
    /// A failed submission returns the session to the last page with every
    /// answer kept.
    pub async fn next(&mut self) -> Result<Transition, QuizError> {
        match self.session.advance() {
            Transition::Page(index) => {
                debug!("Moved to page {}", index);
                self.render_current();
                Ok(Transition::Page(index))
            }
            Transition::BeganSubmission => {
                let answers = self.session.answers().clone();
                match self.results.submit(&answers).await {
                    Ok(outcome) => {
                        self.session.complete();
                        self.show_outcome(&outcome);
                        Ok(Transition::BeganSubmission)
                    }
                    Err(e) => {
                        self.session.submission_failed();
                        let err = QuizError::Result(e);
                        self.report(&err);
                        self.render_current();
                        Err(err)
                    }
                }
            }
            Transition::Blocked => Ok(Transition::Blocked),
        }
    }

    /// Move to the previous page.
    pub fn back(&mut self) -> Transition {
        let transition = self.session.retreat();
        if let Transition::Page(_) = transition {
            self.render_current();
        }
        transition
    }

    /// Retrieve a stored result and show it.
    ///
    /// The retrieved answers replace whatever was recorded locally.
    pub async fn retrieve(&mut self, raw_key: &str) -> Result<ResultKey, QuizError> {
        let stored = match self.results.retrieve(raw_key).await {
            Ok(stored) => stored,
            Err(e) => {
                let err = QuizError::Result(e);
                self.report(&err);
                return Err(err);
            }
        };

        self.session.replace_answers(stored.result.answers.clone());
        self.show_result(&stored.result);
        self.bridge.render_result_key(Some(&stored.key));
        Ok(stored.key)
    }

    /// Clear answers and the displayed result, and go back to page 1.
    pub fn reset(&mut self) {
        self.session.reset();
        self.results.reset();
        self.bridge.clear_result();
        info!("Quiz reset");
        self.render_current();
    }

    /// Re-render the current page, if one is open.
    pub fn render_current(&self) {
        let Some((index, count)) = self.session.progress() else {
            return;
        };
        if let Some(page) = self.session.current_page() {
            self.bridge.render_progress(index, count);
            self.bridge.render_question_page(page, self.session.answers());
        }
    }

    /// Interpreted axes of the result on display, in display order.
    pub fn interpret_axes(&self) -> Vec<InterpretedAxis> {
        self.results
            .latest_result()
            .map(|r| r.interpreted_axes())
            .unwrap_or_default()
    }

    pub fn latest_result(&self) -> Option<QuizResult> {
        self.results.latest_result()
    }

    pub fn latest_result_key(&self) -> Option<ResultKey> {
        self.results.latest_result_key()
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn is_completed(&self) -> bool {
        self.session.state() == SessionState::Completed
    }

    fn show_outcome(&self, outcome: &SubmitOutcome) {
        self.show_result(&outcome.result);
        self.bridge.render_result_key(outcome.key.as_ref());
        if let Some(e) = &outcome.persistence_error {
            warn!("Result shown without a key: {}", e);
            self.bridge.render_error(e.kind(), &e.to_string());
        }
    }

    fn show_result(&self, result: &QuizResult) {
        if result.profile.is_inconclusive() {
            debug!("Inconclusive profile");
        }
        self.bridge
            .render_result(&result.interpreted_axes(), &result.profile);
    }

    fn report(&self, err: &QuizError) {
        if let Some(kind) = err.kind() {
            self.bridge.render_error(kind, &err.to_string());
        }
    }
}
