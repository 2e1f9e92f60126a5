use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Position};

/// A uniqueness constraint violated by a candidate placement.
///
/// Serialized as `"row"`, `"column"`, `"region"` — the names reported to
/// callers in the conflict array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conflict {
    Row,
    Column,
    Region,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::Row => write!(f, "row"),
            Conflict::Column => write!(f, "column"),
            Conflict::Region => write!(f, "region"),
        }
    }
}

/// Check that `value` does not already occur elsewhere in the row.
///
/// The target cell's own current value never counts as a conflict with
/// itself, so the same predicate answers both "may this digit be placed
/// here" and "is the digit already at exactly this cell consistent".
pub fn check_row_placement(grid: &Grid, pos: Position, value: u8) -> bool {
    (0..9)
        .filter(|&col| col != pos.col)
        .all(|col| grid.get(Position::new(pos.row, col)) != Some(value))
}

/// Check that `value` does not already occur elsewhere in the column
pub fn check_col_placement(grid: &Grid, pos: Position, value: u8) -> bool {
    (0..9)
        .filter(|&row| row != pos.row)
        .all(|row| grid.get(Position::new(row, pos.col)) != Some(value))
}

/// Check that `value` does not already occur elsewhere in the 3x3 region
pub fn check_region_placement(grid: &Grid, pos: Position, value: u8) -> bool {
    let start_row = (pos.row / 3) * 3;
    let start_col = (pos.col / 3) * 3;
    for row in start_row..start_row + 3 {
        for col in start_col..start_col + 3 {
            if (row, col) == (pos.row, pos.col) {
                continue;
            }
            if grid.get(Position::new(row, col)) == Some(value) {
                return false;
            }
        }
    }
    true
}

/// Evaluate all three constraints and report every one that fails, in
/// row / column / region order. An empty result means the placement is
/// legal. The checks are independent — zero to three conflicts are
/// possible and none short-circuits the others.
///
/// Row/col are trusted to be in `[0, 8]` and value in `[1, 9]`; coordinate
/// syntax is the caller's responsibility.
pub fn placement_conflicts(grid: &Grid, pos: Position, value: u8) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    if !check_row_placement(grid, pos, value) {
        conflicts.push(Conflict::Row);
    }
    if !check_col_placement(grid, pos, value) {
        conflicts.push(Conflict::Column);
    }
    if !check_region_placement(grid, pos, value) {
        conflicts.push(Conflict::Region);
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "1.5..2.84..63.12.7.2..5.....9.1...2.8....3..9...5.73..2..1.4....8.2.3674.3....5..";
    const INCOMPLETE: &str =
        "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
    const SOLVED: &str =
        "769235418851496372432178956174569283395842761628713549283657194516924837947381625";

    fn grid(s: &str) -> Grid {
        Grid::from_string(s).unwrap()
    }

    #[test]
    fn test_row_placement() {
        let grid = grid(PUZZLE);
        assert!(check_row_placement(&grid, Position::new(0, 1), 3));
        // Row 0 already contains a 5
        assert!(!check_row_placement(&grid, Position::new(0, 1), 5));
    }

    #[test]
    fn test_col_placement() {
        let grid = grid(PUZZLE);
        assert!(check_col_placement(&grid, Position::new(0, 1), 1));
        // Column 1 already contains an 8
        assert!(!check_col_placement(&grid, Position::new(0, 1), 8));
    }

    #[test]
    fn test_region_placement() {
        let grid = grid(PUZZLE);
        assert!(check_region_placement(&grid, Position::new(0, 1), 3));
        // The top-left region already contains a 2
        assert!(!check_region_placement(&grid, Position::new(0, 1), 2));
    }

    #[test]
    fn test_single_conflict() {
        let grid = grid(INCOMPLETE);
        assert_eq!(
            placement_conflicts(&grid, Position::new(0, 3), 7),
            vec![Conflict::Column]
        );
    }

    #[test]
    fn test_double_conflict() {
        let grid = grid(INCOMPLETE);
        assert_eq!(
            placement_conflicts(&grid, Position::new(0, 1), 2),
            vec![Conflict::Column, Conflict::Region]
        );
    }

    #[test]
    fn test_triple_conflict() {
        let grid = grid(SOLVED);
        assert_eq!(
            placement_conflicts(&grid, Position::new(0, 1), 2),
            vec![Conflict::Row, Conflict::Column, Conflict::Region]
        );
    }

    #[test]
    fn test_no_self_conflict_on_filled_cell() {
        // (0, 1) of the solved grid already holds a 6; asking about 6 at
        // that exact cell reports no conflicts
        let grid = grid(SOLVED);
        assert_eq!(placement_conflicts(&grid, Position::new(0, 1), 6), vec![]);
    }

    #[test]
    fn test_legal_placement_stays_legal_after_writing() {
        let mut grid = grid(INCOMPLETE);
        let pos = Position::new(0, 0);
        let candidate = (1..=9)
            .find(|&v| placement_conflicts(&grid, pos, v).is_empty())
            .unwrap();

        grid.set(pos, Some(candidate));
        assert_eq!(placement_conflicts(&grid, pos, candidate), vec![]);
    }

    #[test]
    fn test_conflict_serialization() {
        let conflicts = vec![Conflict::Row, Conflict::Column, Conflict::Region];
        assert_eq!(
            serde_json::to_value(&conflicts).unwrap(),
            serde_json::json!(["row", "column", "region"])
        );
    }
}
