//! Progress reporting for scoring-service calls

use colored::Colorize;
use compass_application::ports::activity::{ActivityNotifier, RequestKind};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports in-flight service calls with a spinner
pub struct ActivityReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ActivityReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn done_message(kind: RequestKind, success: bool) -> String {
        let what = match kind {
            RequestKind::LoadQuestions => "Questions loaded",
            RequestKind::Submit => "Answers scored",
            RequestKind::Save => "Result saved",
            RequestKind::Retrieve => "Result found",
        };
        if success {
            format!("{} {}", "v".green(), what)
        } else {
            format!("{} {}", "x".red(), kind.pending_message().trim_end_matches("..."))
        }
    }
}

impl Default for ActivityReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityNotifier for ActivityReporter {
    fn on_request_start(&self, kind: RequestKind) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(kind.pending_message());
        pb.enable_steady_tick(Duration::from_millis(100));

        let mut slot = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.replace(pb) {
            previous.finish_and_clear();
        }
    }

    fn on_request_complete(&self, kind: RequestKind, success: bool) {
        let taken = self
            .spinner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(pb) = taken {
            if success {
                pb.finish_and_clear();
            } else {
                pb.finish_with_message(Self::done_message(kind, false));
            }
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleActivity;

impl ActivityNotifier for SimpleActivity {
    fn on_request_start(&self, kind: RequestKind) {
        eprintln!("{} {}", "->".cyan(), kind.pending_message());
    }

    fn on_request_complete(&self, kind: RequestKind, success: bool) {
        eprintln!("  {}", ActivityReporter::done_message(kind, success));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_done_message() {
        colored::control::set_override(false);
        assert_eq!(
            ActivityReporter::done_message(RequestKind::Save, true),
            "v Result saved"
        );
        assert_eq!(
            ActivityReporter::done_message(RequestKind::Submit, false),
            "x Scoring your answers"
        );
    }

    #[test]
    fn test_complete_without_start_is_harmless() {
        let reporter = ActivityReporter::new();
        reporter.on_request_complete(RequestKind::Retrieve, false);
        reporter.on_request_start(RequestKind::Retrieve);
        reporter.on_request_complete(RequestKind::Retrieve, true);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
