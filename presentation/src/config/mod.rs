//! Presentation-level configuration
//!
//! Configuration for result rendering and REPL behavior, resolved by the
//! binary from config files and flags.

use compass_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// How results are rendered
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Draw the quadrant chart and axis bars
    pub charts: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
            charts: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Show spinners while waiting on the scoring service
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: dirs::data_dir().map(|p| p.join("ideo-compass").join("history.txt")),
        }
    }
}
