//! Presentation layer for ideo-compass
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive quiz interface.

pub mod cli;
pub mod config;
pub mod device;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use device::{TerminalDeviceClassifier, terminal_width};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ActivityReporter, SimpleActivity};
pub use quiz::{ConsolePresentation, QuizRepl};
