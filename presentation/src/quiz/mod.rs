//! Interactive quiz: console bridge, input parsing and the REPL

pub mod bridge;
pub mod command;
pub mod repl;

pub use bridge::ConsolePresentation;
pub use command::{Command, ParseError, parse_command};
pub use repl::QuizRepl;
