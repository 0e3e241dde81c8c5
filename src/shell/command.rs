//! User gestures forwarded into the calculator.

use crate::core::{Operator, OperatorError};
use std::fmt;
use thiserror::Error;

/// A single user gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// A digit key or button
    Digit(char),
    /// An operator button
    Operator(Operator),
    /// The batch width field
    DigitCount(usize),
    /// Shift pressed (`true`) or released (`false`)
    Shift(bool),
    /// The on-screen shift button
    ToggleShift,
    Undo,
    Clear,
    /// The result field was edited by hand
    SetResult(f64),
}

/// Errors that can occur while reading commands from text
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("Invalid digit count '{0}'")]
    InvalidDigitCount(String),

    #[error("Invalid result value '{0}'")]
    InvalidResult(String),

    #[error(transparent)]
    Operator(#[from] OperatorError),
}

impl Command {
    /// Parse one line of whitespace-separated tokens.
    ///
    /// | token            | command                      |
    /// |------------------|------------------------------|
    /// | `123`            | one `Digit` per character    |
    /// | `+ - * / % **`   | `Operator`                   |
    /// | `hold`/`release` | `Shift(true)`/`Shift(false)` |
    /// | `shift`          | `ToggleShift`                |
    /// | `undo`, `u`      | `Undo`                       |
    /// | `clear`, `c`     | `Clear`                      |
    /// | `digits=N`       | `DigitCount(N)`              |
    /// | `=X`             | `SetResult(X)`               |
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::Operator;
    /// use tally::shell::Command;
    ///
    /// let commands = Command::parse_line("12 * 3 undo").unwrap();
    /// assert_eq!(
    ///     commands,
    ///     vec![
    ///         Command::Digit('1'),
    ///         Command::Digit('2'),
    ///         Command::Operator(Operator::Multiply),
    ///         Command::Digit('3'),
    ///         Command::Undo,
    ///     ]
    /// );
    /// ```
    pub fn parse_line(line: &str) -> Result<Vec<Command>, CommandError> {
        let mut commands = Vec::new();
        for token in line.split_whitespace() {
            Self::parse_token(token, &mut commands)?;
        }
        Ok(commands)
    }

    fn parse_token(token: &str, out: &mut Vec<Command>) -> Result<(), CommandError> {
        if token.chars().all(|c| c.is_ascii_digit()) {
            out.extend(token.chars().map(Command::Digit));
            return Ok(());
        }

        if let Some(count) = token.strip_prefix("digits=") {
            let count = count
                .parse()
                .map_err(|_| CommandError::InvalidDigitCount(count.to_string()))?;
            out.push(Command::DigitCount(count));
            return Ok(());
        }

        if let Some(value) = token.strip_prefix('=') {
            let value = value
                .parse()
                .map_err(|_| CommandError::InvalidResult(value.to_string()))?;
            out.push(Command::SetResult(value));
            return Ok(());
        }

        let command = match token {
            "hold" => Command::Shift(true),
            "release" => Command::Shift(false),
            "shift" => Command::ToggleShift,
            "undo" | "u" => Command::Undo,
            "clear" | "c" => Command::Clear,
            "+" | "-" | "*" | "/" | "%" | "**" => Command::Operator(token.parse()?),
            _ => return Err(CommandError::Unknown(token.to_string())),
        };
        out.push(command);
        Ok(())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Digit(digit) => write!(f, "{digit}"),
            Command::Operator(op) => write!(f, "{op}"),
            Command::DigitCount(count) => write!(f, "digits={count}"),
            Command::Shift(true) => write!(f, "hold"),
            Command::Shift(false) => write!(f, "release"),
            Command::ToggleShift => write!(f, "shift"),
            Command::Undo => write!(f, "undo"),
            Command::Clear => write!(f, "clear"),
            Command::SetResult(value) => write!(f, "={value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs_expand_per_character() {
        assert_eq!(
            Command::parse_line("307").unwrap(),
            vec![
                Command::Digit('3'),
                Command::Digit('0'),
                Command::Digit('7')
            ]
        );
    }

    #[test]
    fn every_operator_symbol_parses() {
        let commands = Command::parse_line("+ - * / % **").unwrap();
        let operators: Vec<Operator> = commands
            .into_iter()
            .map(|c| match c {
                Command::Operator(op) => op,
                other => panic!("Expected operator, got {other:?}"),
            })
            .collect();
        assert_eq!(operators, Operator::ALL.to_vec());
    }

    #[test]
    fn keywords_parse() {
        assert_eq!(
            Command::parse_line("hold release shift undo u clear c").unwrap(),
            vec![
                Command::Shift(true),
                Command::Shift(false),
                Command::ToggleShift,
                Command::Undo,
                Command::Undo,
                Command::Clear,
                Command::Clear,
            ]
        );
    }

    #[test]
    fn digit_count_and_result_take_values() {
        assert_eq!(
            Command::parse_line("digits=3 =-12.5").unwrap(),
            vec![Command::DigitCount(3), Command::SetResult(-12.5)]
        );
    }

    #[test]
    fn bad_values_are_reported_with_token() {
        assert_eq!(
            Command::parse_line("digits=many"),
            Err(CommandError::InvalidDigitCount("many".to_string()))
        );
        assert_eq!(
            Command::parse_line("=abc"),
            Err(CommandError::InvalidResult("abc".to_string()))
        );
        assert_eq!(
            Command::parse_line("1 ^ 2"),
            Err(CommandError::Unknown("^".to_string()))
        );
    }

    #[test]
    fn blank_line_has_no_commands() {
        assert!(Command::parse_line("   ").unwrap().is_empty());
    }

    #[test]
    fn display_round_trips_through_parser() {
        let commands = vec![
            Command::Digit('4'),
            Command::Operator(Operator::Power),
            Command::DigitCount(2),
            Command::Shift(true),
            Command::Shift(false),
            Command::ToggleShift,
            Command::Undo,
            Command::Clear,
            Command::SetResult(2.5),
        ];
        let line = commands
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        assert_eq!(Command::parse_line(&line).unwrap(), commands);
    }
}
