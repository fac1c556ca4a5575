//! Configuration file loading for ideo-compass
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `IDEO_COMPASS_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./compass.toml` or `./.compass.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ideo-compass/config.toml`
//! 5. Fallback: `~/.config/ideo-compass/config.toml`
//! 6. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, FALLBACK_LOCALE, FileApiConfig, FileClientConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat, Severity, detect_locale,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
