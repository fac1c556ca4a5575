//! Infrastructure layer for ideo-compass
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileApiConfig, FileClientConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat, Severity, detect_locale,
};
pub use http::{DEFAULT_BASE_URL, HttpError, HttpScoringGateway};
