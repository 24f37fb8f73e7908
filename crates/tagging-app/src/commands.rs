//! Terminal command parsing and help.

use tagging_core::{TagId, Zone};

use crate::AppError;

/// A command typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place(TagId),
    Remove(TagId),
    Toggle(TagId),
    Click(TagId),
    Drag(TagId),
    Drop(Zone),
    Check,
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Tag ids may contain spaces.
    pub fn parse(line: &str) -> Result<Self, AppError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let tag = || {
            if rest.is_empty() {
                Err(AppError::MissingArgument(verb.to_string()))
            } else {
                Ok(TagId::new(rest))
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "place" | "p" => Ok(Self::Place(tag()?)),
            "remove" | "r" => Ok(Self::Remove(tag()?)),
            "toggle" | "t" => Ok(Self::Toggle(tag()?)),
            "click" => Ok(Self::Click(tag()?)),
            "drag" => Ok(Self::Drag(tag()?)),
            "drop" => match rest.to_ascii_lowercase().as_str() {
                "answer" | "a" => Ok(Self::Drop(Zone::AnswerArea)),
                "pool" => Ok(Self::Drop(Zone::Pool)),
                "" => Err(AppError::MissingArgument(verb.to_string())),
                other => Err(AppError::UnknownCommand(format!("drop {other}"))),
            },
            "check" | "c" => Ok(Self::Check),
            "reset" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => Err(AppError::UnknownCommand(line.to_string())),
        }
    }
}

/// Help entry for a command.
#[derive(Debug, Clone)]
pub struct CommandHelp {
    pub usage: &'static str,
    pub description: &'static str,
}

impl CommandHelp {
    pub const fn new(usage: &'static str, description: &'static str) -> Self {
        Self { usage, description }
    }
}

/// Registry of all terminal commands.
pub struct CommandRegistry;

impl CommandRegistry {
    /// Get all registered commands.
    pub fn all() -> Vec<CommandHelp> {
        vec![
            CommandHelp::new("place <tag>", "Move a tag into the answer area"),
            CommandHelp::new("remove <tag>", "Move a tag back to the pool"),
            CommandHelp::new("toggle <tag>", "Move a tag to the other area"),
            CommandHelp::new("click <tag>", "Click a tag where it sits"),
            CommandHelp::new("drag <tag>", "Start dragging a tag"),
            CommandHelp::new("drop answer|pool", "Drop the dragged tag"),
            CommandHelp::new("check", "Check the answer"),
            CommandHelp::new("reset", "Shuffle and start over"),
            CommandHelp::new("help", "Show this list"),
            CommandHelp::new("quit", "Leave"),
        ]
    }

    /// Format the command list.
    pub fn format_all() -> String {
        let mut out = String::from("\n=== Commands ===\n");
        for help in Self::all() {
            out.push_str(&format!("  {:20} {}\n", help.usage, help.description));
        }
        out
    }
}
