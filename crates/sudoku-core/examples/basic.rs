//! Basic example of using the Sudoku engine

use sudoku_core::{placement_conflicts, solve_puzzle, Grid, Position, Solver};

fn main() {
    let puzzle_string =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";

    // Parse a puzzle from a string
    let grid = Grid::from_string(puzzle_string).expect("81-character puzzle string");
    println!("Puzzle:");
    println!("{}", grid);
    println!("Empty cells: {}\n", grid.empty_count());

    // Ask whether a digit may be placed at a cell
    let pos = Position::new(0, 1);
    let conflicts = placement_conflicts(&grid, pos, 3);
    if conflicts.is_empty() {
        println!("3 may be placed at row 0, column 1\n");
    } else {
        println!("3 conflicts at row 0, column 1: {:?}\n", conflicts);
    }

    // Solve it
    let solver = Solver::new();
    if let Some(solution) = solver.solve(&grid) {
        println!("Solution:");
        println!("{}", solution);
    } else {
        println!("No solution found");
    }

    // The string-level operation does validation, solving, and
    // serialization in one step
    match solve_puzzle(puzzle_string) {
        Ok(solution) => println!("Solution string: {}", solution),
        Err(e) => println!("Error: {}", e),
    }
}
