//! Domain layer for ideo-compass
//!
//! This crate contains the quiz state machine, the axis catalog, score
//! interpretation and the result value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Axes
//!
//! Answers are scored by an external service along five canonical axes
//! (economic, social, community, method, pragmatism). Each score is centered
//! at zero; the sign selects a pole of the axis and the magnitude selects an
//! interpretation band (strong, moderate, neutral).
//!
//! ## Quiz Session
//!
//! Questions are grouped into one page per axis. A [`QuizSession`] walks the
//! pages (`Loading -> Ready(page) -> Submitting -> Completed`) and owns the
//! [`AnswerMap`].
//!
//! ## Result Keys
//!
//! A saved result is identified by a [`ResultKey`] of the form `IDEO-XXXX-YYYY`.

pub mod axis;
pub mod config;
pub mod core;
pub mod quiz;
pub mod result;

// Re-export commonly used types
pub use axis::{
    catalog::{Axis, AxisCatalog, OTHER_AXIS},
    interpretation::{Band, ScoreInterpreter},
};
pub use config::OutputFormat;
pub use core::{
    client::{ClientMetadata, DeviceClass},
    error::DomainError,
};
pub use quiz::{
    answer::{AnswerMap, LikertValue},
    page::{Page, build_pages},
    question::{Question, QuestionSet},
    session::{QuizSession, SessionState, Transition},
};
pub use result::{
    entities::{AxisScoreSet, InterpretedAxis, QuizResult, SaveRequest, StoredResult},
    key::ResultKey,
    profile::{LongDescription, Profile, Reference},
};
