//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod client;
mod logging;
mod output;

pub use api::FileApiConfig;
pub use client::{FALLBACK_LOCALE, FileClientConfig, detect_locale};
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work at all.
    Error,
    /// The configuration works but a value was ignored.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `api.base_url` is not an http(s) URL
    InvalidUrl { value: String },
    /// `api.timeout_seconds` is zero
    ZeroTimeout,
    /// A string field holds a value outside its allowed set
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Scoring service settings
    pub api: FileApiConfig,
    /// Client identity reported with saved results
    pub client: FileClientConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !self.api.has_http_scheme() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidUrl {
                    value: self.api.base_url.clone(),
                },
                message: format!(
                    "api.base_url: '{}' must start with http:// or https://",
                    self.api.base_url
                ),
            });
        }

        if self.api.timeout_seconds == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ZeroTimeout,
                message: "api.timeout_seconds cannot be 0".to_string(),
            });
        }

        issues.extend(self.client.parse_device().1);

        issues
    }

    /// Whether any issue prevents the client from running
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
base_url = "https://compass.example.org"
timeout_seconds = 5

[client]
locale = "en-US"
device = "mobile"

[output]
format = "json"
color = false

[logging]
dir = "/tmp/ideo-compass"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "https://compass.example.org");
        assert_eq!(config.api.timeout_seconds, 5);
        assert_eq!(config.client.locale.as_deref(), Some("en-US"));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.logging.dir.is_some());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[api]
timeout_seconds = 30
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.timeout_seconds, 30);
        // Defaults should apply
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.output.color);
        assert!(config.output.charts);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.api.base_url = "ftp://compass".to_string();
        config.api.timeout_seconds = 0;
        config.client.device = Some("watch".to_string());

        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(FileConfig::has_errors(&issues));
        assert!(matches!(issues[0].code, ConfigIssueCode::InvalidUrl { .. }));
        assert_eq!(issues[1].code, ConfigIssueCode::ZeroTimeout);
        assert_eq!(issues[2].severity, Severity::Warning);
    }
}
