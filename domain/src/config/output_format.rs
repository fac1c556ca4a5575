//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for quiz results
///
/// This is a domain concept representing how a result should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Profile, every axis with interpretation, charts and references (default)
    Full,
    /// Profile label, short description and axis scores
    Summary,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Full
    }
}
