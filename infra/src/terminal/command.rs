//! Terminal command parsing

use std::str::FromStr;
use thiserror::Error;

use vc_core::domain::entities::CODE_LENGTH;

pub const HELP: &str = "\
Commands:
  <text>             type characters into the focused cell
  type <1-6> <char>  type into a specific cell (no char clears it)
  bs                 backspace in the focused cell
  paste <text>       paste text into the cells
  submit             send the code for verification
  show               redraw the form
  help               show this help
  quit               exit";

/// One user event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Text typed into a specific cell (0-based)
    Type { cell: usize, text: String },
    /// Keystrokes at the focused cell
    Keys(String),
    Backspace,
    Paste(String),
    Submit,
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Cell must be a number from 1 to {max}, got {value:?}")]
    InvalidCell { value: String, max: usize },

    #[error("Missing argument for `{command}`")]
    MissingArgument { command: &'static str },
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, Some(rest)),
            None => (line, None),
        };

        match word {
            "type" | "t" => {
                let rest = rest.ok_or(ParseError::MissingArgument { command: "type" })?;
                let (cell, text) = rest.split_once(' ').unwrap_or((rest, ""));
                let cell = cell
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=CODE_LENGTH).contains(n))
                    .ok_or_else(|| ParseError::InvalidCell {
                        value: cell.to_string(),
                        max: CODE_LENGTH,
                    })?;
                Ok(Command::Type {
                    cell: cell - 1,
                    text: text.to_string(),
                })
            }
            // Pasted text is taken verbatim so bad pastes reach the form
            "paste" | "p" => Ok(Command::Paste(rest.unwrap_or_default().to_string())),
            "bs" | "backspace" => Ok(Command::Backspace),
            "submit" | "s" => Ok(Command::Submit),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Ok(Command::Keys(line.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type() {
        assert_eq!(
            "type 3 5".parse::<Command>(),
            Ok(Command::Type {
                cell: 2,
                text: "5".to_string()
            })
        );
        assert_eq!(
            "t 6".parse::<Command>(),
            Ok(Command::Type {
                cell: 5,
                text: String::new()
            })
        );
    }

    #[test]
    fn test_parse_type_bad_cell() {
        assert!(matches!(
            "type 0 5".parse::<Command>(),
            Err(ParseError::InvalidCell { .. })
        ));
        assert!(matches!(
            "type 7 5".parse::<Command>(),
            Err(ParseError::InvalidCell { .. })
        ));
        assert_eq!(
            "type".parse::<Command>(),
            Err(ParseError::MissingArgument { command: "type" })
        );
    }

    #[test]
    fn test_parse_paste_keeps_text_verbatim() {
        assert_eq!(
            "paste 12a45".parse::<Command>(),
            Ok(Command::Paste("12a45".to_string()))
        );
        assert_eq!(
            "paste  123".parse::<Command>(),
            Ok(Command::Paste(" 123".to_string()))
        );
        assert_eq!("paste".parse::<Command>(), Ok(Command::Paste(String::new())));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("bs".parse::<Command>(), Ok(Command::Backspace));
        assert_eq!("submit\n".parse::<Command>(), Ok(Command::Submit));
        assert_eq!("".parse::<Command>(), Ok(Command::Show));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_bare_text_is_keys() {
        assert_eq!("1234".parse::<Command>(), Ok(Command::Keys("1234".to_string())));
    }
}
