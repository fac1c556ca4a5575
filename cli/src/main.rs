//! CLI entrypoint for ideo-compass
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use compass_application::{
    ActivityNotifier, BehaviorConfig, DeviceClassifier, FixedDevice, NoActivity, ResultController,
    RunQuizUseCase,
};
use compass_infrastructure::{ConfigLoader, FileConfig, HttpScoringGateway, Severity};
use compass_presentation::{
    ActivityReporter, Cli, ConsolePresentation, OutputConfig, QuizRepl, ReplConfig, SimpleActivity,
    TerminalDeviceClassifier, terminal_width,
};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        let config = load_config(&cli)?;
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = load_config(&cli)?;

    // CLI flags override file and environment values
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.api.timeout_seconds = timeout;
    }
    if let Some(locale) = &cli.locale {
        config.client.locale = Some(locale.clone());
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
    if cli.no_charts {
        config.output.charts = false;
    }

    let _log_guard = init_logging(&cli, &config);
    info!("Starting ideo-compass");

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("Config error: {}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Invalid configuration");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let gateway = Arc::new(
        HttpScoringGateway::with_config(&config.api.base_url, None)
            .context("Failed to create the HTTP client")?,
    );
    info!("Scoring service: {}", gateway.base_url());

    let device: Arc<dyn DeviceClassifier> = match config.client.parse_device().0 {
        Some(device) => Arc::new(FixedDevice(device)),
        None => Arc::new(TerminalDeviceClassifier),
    };
    let repl_config = ReplConfig {
        show_progress: !cli.quiet,
        ..ReplConfig::default()
    };
    let activity: Arc<dyn ActivityNotifier> = if !repl_config.show_progress {
        Arc::new(NoActivity)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ActivityReporter::new())
    } else {
        // Spinners make no sense in a redirected stream
        Arc::new(SimpleActivity)
    };

    let results = ResultController::new(gateway)
        .with_behavior(BehaviorConfig::with_timeout_seconds(config.api.timeout_seconds))
        .with_locale(config.client.resolve_locale())
        .with_device_classifier(device)
        .with_activity(activity);

    let output = OutputConfig {
        format: config.output.format.unwrap_or_default(),
        color: config.output.color,
        charts: config.output.charts,
    };
    let mut presentation = ConsolePresentation::new(output);
    if let Some(width) = terminal_width() {
        presentation = presentation.with_width(width);
    }

    let mut use_case = RunQuizUseCase::new(results, Arc::new(presentation));

    // Retrieval mode
    if let Some(key) = &cli.key {
        // Failures are already reported through the presentation
        return Ok(match use_case.retrieve(key).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        });
    }

    if use_case.start().await.is_err() {
        return Ok(ExitCode::FAILURE);
    }

    let mut repl = QuizRepl::new(use_case).with_config(repl_config);
    repl.run().await?;

    Ok(ExitCode::SUCCESS)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!("{}", e))
}

/// Log to stderr, or to a daily file when `logging.dir` is set.
///
/// The returned guard flushes the file writer when dropped.
fn init_logging(cli: &Cli, config: &FileConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    match config.logging.resolved_dir() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "ideo-compass.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            None
        }
    }
}
