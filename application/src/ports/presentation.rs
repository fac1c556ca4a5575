//! Presentation bridge port.
//!
//! [`PresentationBridge`] is an **output port** that the presentation layer
//! implements to show the quiz. The use cases call it after every state
//! change they want reflected on screen; implementations only display and
//! never call back into the session.
//!
//! # Example Implementation
//!
//! ```ignore
//! use compass_application::ports::presentation::{ErrorKind, PresentationBridge};
//!
//! struct LogBridge;
//!
//! impl PresentationBridge for LogBridge {
//!     fn render_progress(&self, page_index: usize, page_count: usize) {
//!         println!("page {}/{}", page_index + 1, page_count);
//!     }
//!     // ...
//! }
//! ```

use compass_domain::{AnswerMap, InterpretedAxis, Page, Profile, ResultKey};

/// User-facing error taxonomy
///
/// Every failure shown to the user is one of these; transport errors are
/// translated before they reach a bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The quiz could not be initialized; the user should reload.
    MalformedQuestionSet,
    /// Scoring failed; answers are kept and the user may submit again.
    Submission,
    /// The result is shown but could not be saved; no key is available.
    Persistence,
    /// The key entered does not look like `IDEO-XXXX-YYYY`.
    InvalidKeyFormat,
    /// No result could be retrieved for the key.
    NotFound,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedQuestionSet => "malformed_question_set",
            ErrorKind::Submission => "submission",
            ErrorKind::Persistence => "persistence",
            ErrorKind::InvalidKeyFormat => "invalid_key_format",
            ErrorKind::NotFound => "not_found",
        }
    }

    /// Whether this is a warning next to a displayed result rather than a failure
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorKind::Persistence)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rendering contract required by the quiz core.
///
/// Implementations must be cheap to call and must not mutate session state.
pub trait PresentationBridge: Send + Sync {
    /// Show the questions of a page with the answers recorded so far
    fn render_question_page(&self, page: &Page, answers: &AnswerMap);

    /// Show the page position (`page_index` is 0-based)
    fn render_progress(&self, page_index: usize, page_count: usize);

    /// Show a scored result
    fn render_result(&self, axes: &[InterpretedAxis], profile: &Profile);

    /// Show the retrieval key, or that none is available
    fn render_result_key(&self, key: Option<&ResultKey>);

    /// Show a failure or warning
    fn render_error(&self, kind: ErrorKind, message: &str);

    /// Called when the session is reset; release anything tied to the last
    /// displayed result (charts, panels).
    fn clear_result(&self) {}
}

/// Bridge that renders nothing (headless runs)
pub struct NoPresentation;

impl PresentationBridge for NoPresentation {
    fn render_question_page(&self, _page: &Page, _answers: &AnswerMap) {}
    fn render_progress(&self, _page_index: usize, _page_count: usize) {}
    fn render_result(&self, _axes: &[InterpretedAxis], _profile: &Profile) {}
    fn render_result_key(&self, _key: Option<&ResultKey>) {}
    fn render_error(&self, _kind: ErrorKind, _message: &str) {}
}
