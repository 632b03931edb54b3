//! Named commands typed at the `:` prompt
//!
//! ## command_line/ Invariants
//!
//! - Parsing never mutates editor state; it only names the action to run.
//! - Exact names and aliases win over prefix matches.
//! - A prefix shared by several commands is reported, never guessed.

use crate::action::Action;
use std::path::PathBuf;

/// Command definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDef {
    /// Canonical command name
    pub name: &'static str,
    pub alias: &'static str,
    pub action: Action,
    /// Whether a path argument is accepted
    pub takes_path: bool,
}

/// Every named command, in match priority order
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "writeclose",
        alias: "z",
        action: Action::WriteClose,
        takes_path: true,
    },
    CommandDef {
        name: "write",
        alias: "w",
        action: Action::Write,
        takes_path: true,
    },
    CommandDef {
        name: "close",
        alias: "c",
        action: Action::Close,
        takes_path: false,
    },
    CommandDef {
        name: "quit",
        alias: "q",
        action: Action::Kill,
        takes_path: false,
    },
];

/// Result of matching a command name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// Command name or alias
    Exact(&'static CommandDef),
    /// Only one command starts with the input
    Prefix(&'static CommandDef),
    Ambiguous(Vec<&'static str>),
    Unknown,
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Run {
        action: Action,
        path: Option<PathBuf>,
    },
    /// Nothing was typed
    Empty,
    Unknown {
        name: String,
    },
    Ambiguous {
        prefix: String,
        matches: Vec<&'static str>,
    },
    /// The command takes no argument but one was given
    UnexpectedArgument {
        name: &'static str,
    },
}

pub fn match_command(input: &str) -> MatchResult {
    if input.is_empty() {
        return MatchResult::Unknown;
    }
    if let Some(def) = COMMANDS
        .iter()
        .find(|def| def.name == input || def.alias == input)
    {
        return MatchResult::Exact(def);
    }

    let matches: Vec<&'static CommandDef> = COMMANDS
        .iter()
        .filter(|def| def.name.starts_with(input))
        .collect();
    match matches.as_slice() {
        [] => MatchResult::Unknown,
        [def] => MatchResult::Prefix(*def),
        _ => MatchResult::Ambiguous(matches.iter().map(|def| def.name).collect()),
    }
}

/// Parse a command line.
///
/// Input format: `command [path]`; a leading colon is accepted. The path is
/// the rest of the line, so it may contain spaces.
#[must_use]
pub fn parse(input: &str) -> ParsedCommand {
    let input = input.trim();
    let input = input.strip_prefix(':').unwrap_or(input).trim_start();
    if input.is_empty() {
        return ParsedCommand::Empty;
    }

    let (name, rest) = match input.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (input, ""),
    };

    let def = match match_command(name) {
        MatchResult::Exact(def) | MatchResult::Prefix(def) => def,
        MatchResult::Ambiguous(matches) => {
            return ParsedCommand::Ambiguous {
                prefix: name.to_string(),
                matches,
            }
        }
        MatchResult::Unknown => {
            return ParsedCommand::Unknown {
                name: name.to_string(),
            }
        }
    };

    if rest.is_empty() {
        return ParsedCommand::Run {
            action: def.action,
            path: None,
        };
    }
    if !def.takes_path {
        return ParsedCommand::UnexpectedArgument { name: def.name };
    }
    ParsedCommand::Run {
        action: def.action,
        path: Some(PathBuf::from(rest)),
    }
}
