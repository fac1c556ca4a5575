//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for quiz results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Profile, every axis with its interpretation, charts and references
    Full,
    /// Profile label, short description and axis scores
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for compass_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => compass_domain::OutputFormat::Full,
            OutputFormat::Summary => compass_domain::OutputFormat::Summary,
            OutputFormat::Json => compass_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for ideo-compass
#[derive(Parser, Debug)]
#[command(name = "ideo-compass")]
#[command(author, version, about = "Political orientation quiz - find where you stand on five axes")]
#[command(long_about = r#"
ideo-compass asks a series of agree/disagree statements grouped by theme,
sends your answers to a scoring service, and shows where you stand on five
axes: economy, social order, community, method of change and pragmatism.

Each result is saved under a key such as IDEO-AB12-CD34 that can be used to
look the result up again later.

Configuration files are loaded from (in priority order):
1. IDEO_COMPASS_*      Environment variables (e.g. IDEO_COMPASS_API__BASE_URL)
2. --config <path>     Explicit config file
3. ./compass.toml      Project-level config
4. ~/.config/ideo-compass/config.toml   Global config

Example:
  ideo-compass
  ideo-compass --api-url https://compass.example.org
  ideo-compass --key IDEO-AB12-CD34 -o json
"#)]
pub struct Cli {
    /// Retrieve and print a saved result instead of taking the quiz
    #[arg(short, long, value_name = "KEY")]
    pub key: Option<String>,

    /// Base URL of the scoring service
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Timeout in seconds for each service call
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Locale reported with saved results (e.g. pt-BR)
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Do not draw charts
    #[arg(long)]
    pub no_charts: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
