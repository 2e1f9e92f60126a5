//! Request handling for the Sudoku check and solve operations.
//!
//! This crate owns everything the core engine treats as the caller's
//! responsibility: field-presence checks, coordinate-letter parsing
//! (`A1`-`I9`), candidate-value parsing, and shaping results into the
//! JSON objects reported to clients. The core only ever sees a parsed
//! grid, zero-based row/col, and a digit already known to be in range.

use serde::{Deserialize, Serialize};
use sudoku_core::{
    placement_conflicts, solve_puzzle, validate_puzzle, Conflict, Grid, Position, PuzzleError,
};

const MISSING_FIELDS: &str = "Required field(s) missing";
const MISSING_FIELD: &str = "Required field missing";
const INVALID_COORDINATE: &str = "Invalid coordinate";
const INVALID_VALUE: &str = "Invalid value";

/// A placement-check request: puzzle string, coordinate such as `A2`,
/// and candidate value `1`-`9`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckRequest {
    pub puzzle: Option<String>,
    pub coordinate: Option<String>,
    pub value: Option<String>,
}

/// A solve request carrying the puzzle string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveRequest {
    pub puzzle: Option<String>,
}

/// Response to a check request.
///
/// Serializes to exactly one of `{"valid": true}`,
/// `{"valid": false, "conflict": [..]}`, or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {
    Valid { valid: bool },
    Invalid { valid: bool, conflict: Vec<Conflict> },
    Error { error: String },
}

impl CheckResponse {
    fn valid() -> Self {
        CheckResponse::Valid { valid: true }
    }

    fn invalid(conflict: Vec<Conflict>) -> Self {
        CheckResponse::Invalid {
            valid: false,
            conflict,
        }
    }

    fn error<S: Into<String>>(message: S) -> Self {
        CheckResponse::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CheckResponse::Error { .. })
    }
}

/// Response to a solve request: `{"solution": "..."}` or
/// `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SolveResponse {
    Solution { solution: String },
    Error { error: String },
}

impl SolveResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, SolveResponse::Error { .. })
    }
}

/// Parse a board coordinate: a row letter `A`-`I` followed by a column
/// digit `1`-`9`, nothing else. Returns the zero-based position.
pub fn parse_coordinate(coordinate: &str) -> Option<Position> {
    let mut chars = coordinate.chars();
    let row_letter = chars.next()?;
    let col_digit = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !('A'..='I').contains(&row_letter) || !('1'..='9').contains(&col_digit) {
        return None;
    }

    let row = row_letter as usize - 'A' as usize;
    let col = col_digit as usize - '1' as usize;
    Some(Position::new(row, col))
}

/// Parse a candidate value: a single digit `1`-`9`
pub fn parse_value(value: &str) -> Option<u8> {
    let mut chars = value.chars();
    let digit = chars.next()?;
    if chars.next().is_some() || !('1'..='9').contains(&digit) {
        return None;
    }
    Some(digit as u8 - b'0')
}

// A missing field and an empty field are treated alike
fn field(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Handle a check request: report whether the value may legally occupy
/// the coordinate, and if not, which constraints it violates.
pub fn check(req: &CheckRequest) -> CheckResponse {
    let (puzzle, coordinate, value) = match (
        field(&req.puzzle),
        field(&req.coordinate),
        field(&req.value),
    ) {
        (Some(p), Some(c), Some(v)) => (p, c, v),
        _ => return CheckResponse::error(MISSING_FIELDS),
    };

    if let Err(e) = validate_puzzle(puzzle) {
        return CheckResponse::error(e.to_string());
    }

    let pos = match parse_coordinate(coordinate) {
        Some(pos) => pos,
        None => return CheckResponse::error(INVALID_COORDINATE),
    };

    let value = match parse_value(value) {
        Some(v) => v,
        None => return CheckResponse::error(INVALID_VALUE),
    };

    let grid = match Grid::from_string(puzzle) {
        Some(g) => g,
        None => return CheckResponse::error(PuzzleError::InvalidLength.to_string()),
    };

    let conflicts = placement_conflicts(&grid, pos, value);
    if conflicts.is_empty() {
        CheckResponse::valid()
    } else {
        CheckResponse::invalid(conflicts)
    }
}

/// Handle a solve request
pub fn solve(req: &SolveRequest) -> SolveResponse {
    let puzzle = match field(&req.puzzle) {
        Some(p) => p,
        None => {
            return SolveResponse::Error {
                error: MISSING_FIELD.to_string(),
            }
        }
    };

    match solve_puzzle(puzzle) {
        Ok(solution) => SolveResponse::Solution { solution },
        Err(e) => SolveResponse::Error {
            error: e.to_string(),
        },
    }
}
