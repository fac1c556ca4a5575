//! Parsing of REPL input lines

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Answer question `position` (1-based) of the current page
    Answer { position: usize, value: i64 },
    Next,
    Back,
    /// Redraw the current page
    Page,
    /// Retrieve a saved result
    Key(String),
    Reset,
    Help,
    Quit,
}

/// Why a line could not be understood
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    UnknownCommand(String),
    MissingKey,
    BadAnswer(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Nothing to do"),
            ParseError::UnknownCommand(cmd) => {
                write!(f, "Unknown command: {}. Type /help for available commands", cmd)
            }
            ParseError::MissingKey => write!(f, "Usage: /key IDEO-XXXX-YYYY"),
            ParseError::BadAnswer(input) => write!(
                f,
                "Could not read '{}'. Answer with <question number> <value>, e.g. `2 -1`",
                input
            ),
        }
    }
}

/// Parse one line of REPL input.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    if line.starts_with('/') {
        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        return match cmd {
            "/quit" | "/exit" | "/q" => Ok(Command::Quit),
            "/help" | "/h" | "/?" => Ok(Command::Help),
            "/reset" => Ok(Command::Reset),
            "/key" => parts
                .next()
                .map(|key| Command::Key(key.to_string()))
                .ok_or(ParseError::MissingKey),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        };
    }

    match line.to_lowercase().as_str() {
        "n" | "next" => return Ok(Command::Next),
        "b" | "back" => return Ok(Command::Back),
        "p" | "page" => return Ok(Command::Page),
        _ => {}
    }

    let mut parts = line.split_whitespace();
    let (Some(position), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::BadAnswer(line.to_string()));
    };
    let position = position
        .parse::<usize>()
        .map_err(|_| ParseError::BadAnswer(line.to_string()))?;
    let value = value
        .strip_prefix('+')
        .unwrap_or(value)
        .parse::<i64>()
        .map_err(|_| ParseError::BadAnswer(line.to_string()))?;

    Ok(Command::Answer { position, value })
}
