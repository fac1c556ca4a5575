//! Scoring gateway port
//!
//! Defines the interface to the external scoring and persistence service.

use async_trait::async_trait;
use compass_domain::{AnswerMap, AxisScoreSet, Profile, ResultKey, SaveRequest, StoredResult};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to the scoring service
///
/// These never reach the presentation layer; use cases translate them into
/// the user-facing taxonomy.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Service returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Not found")]
    NotFound,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// What the scoring service made of a set of answers
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResponse {
    pub axes: AxisScoreSet,
    pub profile: Profile,
}

/// Gateway to the scoring service
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ScoringGateway: Send + Sync {
    /// Fetch the raw question set (`GET /api/questions`).
    ///
    /// The JSON is returned untouched; the domain decides whether it is a
    /// usable question set.
    async fn fetch_questions(&self) -> Result<Value, GatewayError>;

    /// Score a set of answers (`POST /api/submit`).
    async fn submit(&self, answers: &AnswerMap) -> Result<ScoreResponse, GatewayError>;

    /// Persist a scored result and obtain its key (`POST /api/save_result`).
    async fn save_result(&self, request: &SaveRequest) -> Result<ResultKey, GatewayError>;

    /// Fetch a stored result (`GET /api/result/{id}`).
    ///
    /// Returns [`GatewayError::NotFound`] when the service has no such key.
    async fn fetch_result(&self, key: &ResultKey) -> Result<StoredResult, GatewayError>;
}
