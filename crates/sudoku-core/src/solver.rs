use crate::checker::{check_col_placement, check_region_placement, check_row_placement};
use crate::grid::Grid;
use crate::validate::{validate_puzzle, PuzzleError};

/// Backtracking Sudoku solver.
///
/// The search is deterministic: cells are visited in row-major order and
/// digits tried in ascending order, so a puzzle with more than one
/// completion always yields the same solution. Plain recursion with
/// undo-on-failure; depth is bounded by the 81 cells of the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver;

impl Solver {
    /// Create a new solver
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the completed grid if the search
    /// succeeds.
    ///
    /// Only cells the solver itself fills are checked against the
    /// constraints; cells already filled in the input are taken as given.
    /// A grid with no empty cells is therefore returned unchanged.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if self.solve_recursive(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    fn solve_recursive(&self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            // No empty cell left: solved
            None => return true,
        };

        for value in 1..=9 {
            if check_row_placement(grid, pos, value)
                && check_col_placement(grid, pos, value)
                && check_region_placement(grid, pos, value)
            {
                grid.set(pos, Some(value));
                if self.solve_recursive(grid) {
                    return true;
                }
                grid.set(pos, None);
            }
        }

        // Every digit exhausted at this cell: backtrack
        false
    }
}

/// Validate and solve an 81-character puzzle string.
///
/// All search failures collapse to a single outcome,
/// `PuzzleError::Unsolvable` — a contradictory board and a structurally
/// unsatisfiable one are not distinguished.
pub fn solve_puzzle(puzzle: &str) -> Result<String, PuzzleError> {
    validate_puzzle(puzzle)?;
    let grid = Grid::from_string(puzzle).ok_or(PuzzleError::InvalidLength)?;
    let solution = Solver::new().solve(&grid).ok_or(PuzzleError::Unsolvable)?;
    Ok(solution.to_string_compact())
}
