use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a puzzle was rejected.
///
/// `Display` renders the exact message reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleError {
    /// The puzzle string is not exactly 81 characters long
    InvalidLength,
    /// The puzzle string contains a character other than 1-9 or `.`
    InvalidCharacters,
    /// The search exhausted every branch without completing the grid
    Unsolvable,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::InvalidLength => write!(f, "Expected puzzle to be 81 characters long"),
            PuzzleError::InvalidCharacters => write!(f, "Invalid characters in puzzle"),
            PuzzleError::Unsolvable => write!(f, "Puzzle cannot be solved"),
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Validate the shape of a puzzle string.
///
/// Length is checked before content: a short string with a stray letter in
/// it reports the length error. The string is taken exactly as given — no
/// trimming.
pub fn validate_puzzle(puzzle: &str) -> Result<(), PuzzleError> {
    if puzzle.chars().count() != 81 {
        return Err(PuzzleError::InvalidLength);
    }
    if !puzzle.chars().all(|c| c == '.' || ('1'..='9').contains(&c)) {
        return Err(PuzzleError::InvalidCharacters);
    }
    Ok(())
}
