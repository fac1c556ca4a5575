//! REPL (Read-Eval-Print Loop) for taking the quiz interactively

use crate::config::ReplConfig;
use crate::quiz::command::{Command, ParseError, parse_command};
use colored::Colorize;
use compass_application::{QuizError, RunQuizUseCase, ScoringGateway};
use compass_domain::{QuizSession, Transition};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 500;

/// What the loop should do after a command
enum Flow {
    Continue,
    Quit,
}

/// Interactive quiz REPL
pub struct QuizRepl<G: ScoringGateway + 'static> {
    use_case: RunQuizUseCase<G>,
    config: ReplConfig,
}

impl<G: ScoringGateway + 'static> QuizRepl<G> {
    pub fn new(use_case: RunQuizUseCase<G>) -> Self {
        Self {
            use_case,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL until the user quits or input ends
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("ideo-compass".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();
        self.use_case.render_current();

        loop {
            match line_editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    if let Flow::Quit = self.handle_line(&line).await {
                        println!("Bye!");
                        break;
                    }
                }
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(_) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    return Err(err);
                }
            }
        }

        Ok(())
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.config.history_file else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("History disabled ({}): {}", path.display(), e);
                editor
            }
        }
    }

    async fn handle_line(&mut self, line: &str) -> Flow {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(ParseError::Empty) => return Flow::Continue,
            Err(e) => {
                println!("{}", e);
                return Flow::Continue;
            }
        };
        debug!("Command: {:?}", command);

        match command {
            Command::Answer { position, value } => {
                match self.use_case.answer_on_page(position, value) {
                    Ok(value) => println!("{} {} = {}", "v".green(), position, value),
                    Err(e) => self.print_error(&e),
                }
            }
            Command::Next => {
                for note in advance_notes(self.use_case.session()) {
                    println!("{} {}", "Note:".yellow().bold(), note);
                }
                self.next().await;
            }
            Command::Back => {
                if let Transition::Blocked = self.use_case.back() {
                    println!("Already on the first page.");
                }
            }
            Command::Page => {
                if self.use_case.session().current_page().is_some() {
                    self.use_case.render_current();
                } else {
                    println!("No page is open. Type /reset to take the quiz again.");
                }
            }
            Command::Key(key) => {
                if let Err(e) = self.use_case.retrieve(&key).await {
                    self.print_error(&e);
                }
            }
            Command::Reset => self.use_case.reset(),
            Command::Help => self.print_help(),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    async fn next(&mut self) {
        match self.use_case.next().await {
            Ok(Transition::Blocked) if self.use_case.is_completed() => {
                println!("The quiz is finished. Type /reset to take it again.");
            }
            Ok(Transition::Blocked) => println!("Nothing to move to."),
            Ok(_) => {}
            Err(e) => self.print_error(&e),
        }
    }

    /// Errors with a kind are already shown through the presentation bridge
    fn print_error(&self, error: &QuizError) {
        if error.kind().is_none() {
            println!("{} {}", "Error:".red().bold(), error);
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Ideo Compass - Orientation Quiz       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Answer each statement from -2 (strongly disagree) to +2 (strongly agree).");
        self.print_help();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  <n> <value>      - Answer question n on this page, e.g. `3 +1`");
        println!("  next, n          - Next page (submits on the last page)");
        println!("  back, b          - Previous page");
        println!("  page, p          - Show the current page again");
        println!("  /key <KEY>       - Look up a saved result");
        println!("  /reset           - Clear answers and start over");
        println!("  /help, /h, /?    - Show this help");
        println!("  /quit, /exit, /q - Exit");
        println!();
    }
}

/// Non-blocking remarks shown before leaving the current page
fn advance_notes(session: &QuizSession) -> Vec<String> {
    let mut notes = Vec::new();
    let (Some((index, count)), Some(page)) = (session.progress(), session.current_page()) else {
        return notes;
    };

    let open_on_page = page.questions.len() - session.answered_on_page();
    if index + 1 < count {
        if open_on_page > 0 {
            notes.push(format!("{} question(s) on this page left unanswered.", open_on_page));
        }
        return notes;
    }

    let unanswered = session.unanswered_count();
    if unanswered > 0 {
        notes.push(format!(
            "Submitting with {} unanswered question(s). Type `back` to review them.",
            unanswered
        ));
    }
    if session.answers().is_uniform() {
        notes.push(
            "Every answer is the same. The result will most likely be inconclusive.".to_string(),
        );
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session() -> QuizSession {
        let mut session = QuizSession::new();
        session
            .load_json(&json!({
                "questions": [
                    {"id": "e1", "axis": "economic", "text": "e1"},
                    {"id": "e2", "axis": "economic", "text": "e2"},
                    {"id": "s1", "axis": "social", "text": "s1"}
                ]
            }))
            .unwrap();
        session
    }

    #[test]
    fn test_notes_for_unfinished_page() {
        let mut session = session();
        session.record_answer("e1", 1).unwrap();
        assert_eq!(
            advance_notes(&session),
            vec!["1 question(s) on this page left unanswered.".to_string()]
        );

        session.record_answer("e2", -1).unwrap();
        assert!(advance_notes(&session).is_empty());
    }

    #[test]
    fn test_last_page_reports_unanswered_and_uniform_answers() {
        let mut session = session();
        session.record_answer("e1", 2).unwrap();
        session.record_answer("s1", 2).unwrap();
        session.advance();

        let notes = advance_notes(&session);
        assert_eq!(notes.len(), 2);
        assert!(notes[0].contains("1 unanswered question(s)"));
        assert!(notes[1].contains("inconclusive"));

        session.record_answer("e2", 0).unwrap();
        assert!(advance_notes(&session).is_empty());
    }

    #[test]
    fn test_no_notes_without_open_page() {
        assert!(advance_notes(&QuizSession::new()).is_empty());
    }
}
