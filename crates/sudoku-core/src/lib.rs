//! Core Sudoku engine.
//!
//! Puzzles are exchanged as flat 81-character strings (digits `1`-`9`,
//! `.` for an empty cell, row-major order). The engine validates puzzle
//! strings, answers whether a digit may legally occupy a cell, and
//! completes partial grids with a backtracking search.

mod checker;
mod grid;
mod solver;
mod validate;

pub use checker::{
    check_col_placement, check_region_placement, check_row_placement, placement_conflicts,
    Conflict,
};
pub use grid::{Grid, Position};
pub use solver::{solve_puzzle, Solver};
pub use validate::{validate_puzzle, PuzzleError};
