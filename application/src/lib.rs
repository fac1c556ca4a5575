//! Application layer for ideo-compass
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    activity::{ActivityNotifier, NoActivity, RequestKind},
    device::{DeviceClassifier, FixedDevice},
    presentation::{ErrorKind, NoPresentation, PresentationBridge},
    scoring_gateway::{GatewayError, ScoreResponse, ScoringGateway},
};
pub use use_cases::result_controller::{ResultController, ResultError, SubmitOutcome};
pub use use_cases::run_quiz::{QuizError, RunQuizUseCase};
