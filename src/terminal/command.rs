//! Parsing of terminal input lines.

use crate::domain::Field;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  name <text>       set your full name
  email <text>      set your email address
  phone <text>      set your phone/WhatsApp number (optional)
  message <text>    describe your project
  submit            send the request
  show              redraw the form
  whatsapp          print the WhatsApp link
  stats             print submission counters
  help              print this help
  quit              exit
";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Submit,
    Show,
    WhatsApp,
    Stats,
    Help,
    Quit,
    Empty,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type 'help' for the list)")]
    Unknown(String),

    #[error("'{0}' does not take a value")]
    UnexpectedValue(String),
}

impl Command {
    /// Parse a line. Field values are trimmed; a field command with no value
    /// clears that field.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let field = match keyword.to_ascii_lowercase().as_str() {
            "" => return Ok(Self::Empty),
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "phone" => Some(Field::Phone),
            "message" => Some(Field::Message),
            _ => None,
        };

        if let Some(field) = field {
            return Ok(Self::Set(field, rest.to_string()));
        }

        let command = match keyword.to_ascii_lowercase().as_str() {
            "submit" | "send" => Self::Submit,
            "show" => Self::Show,
            "whatsapp" => Self::WhatsApp,
            "stats" => Self::Stats,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };

        if !rest.is_empty() {
            return Err(CommandError::UnexpectedValue(keyword.to_string()));
        }

        Ok(command)
    }
}
