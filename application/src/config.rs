//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the bound on scoring-service calls.

use std::time::Duration;

/// Default bound on every scoring-service call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Application behavior configuration.
///
/// Controls runtime behavior of use cases like timeout limits for service calls
/// and the client version reported with saved results.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Maximum time to wait for a service response before giving up.
    pub timeout: Option<Duration>,
    /// Client version sent with saved results.
    pub client_version: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            client_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
            ..Self::default()
        }
    }

    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
            ..Self::default()
        }
    }

    pub fn with_client_version(mut self, version: impl Into<String>) -> Self {
        self.client_version = version.into();
        self
    }
}
