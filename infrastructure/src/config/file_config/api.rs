//! Scoring service configuration from TOML (`[api]` section)

use crate::http::DEFAULT_BASE_URL;
use compass_application::config::DEFAULT_TIMEOUT;
use serde::{Deserialize, Serialize};

/// Raw scoring service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the scoring service
    pub base_url: String,
    /// Bound on every service call, in seconds
    pub timeout_seconds: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl FileApiConfig {
    pub fn has_http_scheme(&self) -> bool {
        self.base_url.starts_with("http://") || self.base_url.starts_with("https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.has_http_scheme());
    }

    #[test]
    fn test_scheme_check() {
        let config = FileApiConfig {
            base_url: "localhost:8000".to_string(),
            ..Default::default()
        };
        assert!(!config.has_http_scheme());
    }
}
