//! Quiz session state machine.
//!
//! ```text
//! Loading --load--> Ready(0) --advance--> Ready(1) ... Ready(last)
//!                      ^                                  |
//!                      |                              advance
//!                    reset                                v
//!                      |        submission_failed    Submitting
//!                 Completed <--complete-- Submitting -----> Ready(last)
//! ```
//!
//! The session never suspends; network work happens in the application
//! layer between `advance` returning [`Transition::BeganSubmission`] and the
//! matching `complete` / `submission_failed` call.

use super::answer::{AnswerMap, LikertValue};
use super::page::{Page, build_pages};
use super::question::{Question, QuestionSet};
use crate::core::error::DomainError;
use serde_json::Value;

/// Current state of a [`QuizSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No question set loaded yet
    Loading,
    /// Showing the page at the given index
    Ready(usize),
    /// Answers handed to the scoring service
    Submitting,
    /// A result is on display
    Completed,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Loading => "loading",
            SessionState::Ready(_) => "ready",
            SessionState::Submitting => "submitting",
            SessionState::Completed => "completed",
        }
    }
}

/// Outcome of a navigation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved to the page at this index
    Page(usize),
    /// Left the last page; the caller must submit the answers
    BeganSubmission,
    /// Nothing changed (boundary reached or call not valid in this state)
    Blocked,
}

/// Owns the paginated questions, the page pointer and the answers
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    pages: Vec<Page>,
    answers: AnswerMap,
    state: SessionState,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            pages: Vec::new(),
            answers: AnswerMap::new(),
            state: SessionState::Loading,
        }
    }

    /// Load a validated question set and move to the first page.
    ///
    /// Answers for questions that are still part of the set are kept.
    pub fn load(&mut self, set: QuestionSet) {
        let questions = set.into_questions();
        self.answers
            .retain(|id| questions.iter().any(|q| q.id() == id));
        self.pages = build_pages(&questions);
        self.questions = questions;
        self.state = SessionState::Ready(0);
    }

    /// Parse and load a question set from JSON.
    ///
    /// On failure the session is left untouched.
    pub fn load_json(&mut self, value: &Value) -> Result<(), DomainError> {
        let set = QuestionSet::from_json(value)?;
        self.load(set);
        Ok(())
    }

    /// Record (or overwrite) an answer. Never changes the state.
    pub fn record_answer(&mut self, question_id: &str, value: i64) -> Result<LikertValue, DomainError> {
        let value = LikertValue::new(value)?;
        self.answers.record(question_id, value);
        Ok(value)
    }

    pub fn advance(&mut self) -> Transition {
        match self.state {
            SessionState::Ready(index) if index + 1 < self.pages.len() => {
                self.state = SessionState::Ready(index + 1);
                Transition::Page(index + 1)
            }
            SessionState::Ready(_) => {
                self.state = SessionState::Submitting;
                Transition::BeganSubmission
            }
            _ => Transition::Blocked,
        }
    }

    pub fn retreat(&mut self) -> Transition {
        match self.state {
            SessionState::Ready(index) if index > 0 => {
                self.state = SessionState::Ready(index - 1);
                Transition::Page(index - 1)
            }
            _ => Transition::Blocked,
        }
    }

    /// Return to the last page after a failed submission. Answers are kept.
    pub fn submission_failed(&mut self) -> Transition {
        if self.state != SessionState::Submitting {
            return Transition::Blocked;
        }
        let last = self.pages.len().saturating_sub(1);
        self.state = SessionState::Ready(last);
        Transition::Page(last)
    }

    /// Mark the submission as scored.
    pub fn complete(&mut self) -> bool {
        if self.state == SessionState::Submitting {
            self.state = SessionState::Completed;
            true
        } else {
            false
        }
    }

    /// Overwrite all answers with those of a retrieved result.
    ///
    /// Retrieval always wins over local edits made while it was in flight.
    pub fn replace_answers(&mut self, answers: AnswerMap) {
        self.answers = answers;
        self.state = SessionState::Completed;
    }

    /// Clear answers and go back to the first page (or `Loading` when no
    /// questions were ever loaded).
    pub fn reset(&mut self) {
        self.answers.clear();
        self.state = if self.pages.is_empty() {
            SessionState::Loading
        } else {
            SessionState::Ready(0)
        };
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_page(&self) -> Option<&Page> {
        match self.state {
            SessionState::Ready(index) => self.pages.get(index),
            _ => None,
        }
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// `(page_index, page_count)` while a page is shown
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self.state {
            SessionState::Ready(index) => Some((index, self.pages.len())),
            _ => None,
        }
    }

    /// Number of answered questions on the current page
    pub fn answered_on_page(&self) -> usize {
        self.current_page()
            .map(|page| {
                page.questions
                    .iter()
                    .filter(|q| self.answers.contains(q.id()))
                    .count()
            })
            .unwrap_or(0)
    }

    /// Number of loaded questions without an answer
    pub fn unanswered_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| !self.answers.contains(q.id()))
            .count()
    }
}
