//! Move input parsing.

use std::io::{self, BufRead};
use std::str::FromStr;

use common::Square;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-h][1-8])[- ]?([a-h][1-8])q?$").expect("COORD_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("end of input")]
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    Coordinate { from: Square, to: Square },
    UseEngine,
    Quit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    /// Accepts coordinate moves (`e2e4`, `e2-e4`, `e7e8q`), `engine` to let
    /// the computer move, and `q`/`quit`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        match trimmed.as_str() {
            "q" | "quit" | "exit" => return Ok(MoveInput::Quit),
            "engine" | "e" => return Ok(MoveInput::UseEngine),
            _ => {}
        }

        let invalid = || InputError::InvalidInput {
            input: input.to_string(),
        };
        let caps = COORD_RE.captures(&trimmed).ok_or_else(invalid)?;
        let from = Square::from_algebraic(&caps[1]).ok_or_else(invalid)?;
        let to = Square::from_algebraic(&caps[2]).ok_or_else(invalid)?;
        Ok(MoveInput::Coordinate { from, to })
    }
}

/// Reads one line from stdin and parses it as a move.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;
    if read == 0 {
        return Err(InputError::EndOfInput);
    }
    input.parse()
}
