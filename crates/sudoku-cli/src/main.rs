//! Command-line interface for the Sudoku engine.
//!
//! Prints the same JSON objects the check/solve operations report to any
//! other caller, one per invocation.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sudoku_api::{CheckRequest, SolveRequest};
use sudoku_core::Grid;

#[derive(Parser)]
#[command(name = "sudoku", about = "Validate, check, and solve 9x9 Sudoku puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle given as an 81-character string (1-9, `.` for empty)
    Solve {
        /// The puzzle string
        puzzle: String,
    },
    /// Check whether a value may be placed at a coordinate
    Check {
        /// The puzzle string
        puzzle: String,
        /// Coordinate: row letter A-I followed by column digit 1-9
        coordinate: String,
        /// Candidate value 1-9
        value: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let (output, is_error) = match cli.command {
        Command::Solve { puzzle } => {
            if let Some(grid) = Grid::from_string(&puzzle) {
                log::debug!("solving puzzle with {} empty cells", grid.empty_count());
            }
            let response = sudoku_api::solve(&SolveRequest {
                puzzle: Some(puzzle),
            });
            (serde_json::to_string(&response).unwrap(), response.is_error())
        }
        Command::Check {
            puzzle,
            coordinate,
            value,
        } => {
            log::debug!("checking {} at {}", value, coordinate);
            let response = sudoku_api::check(&CheckRequest {
                puzzle: Some(puzzle),
                coordinate: Some(coordinate),
                value: Some(value),
            });
            (serde_json::to_string(&response).unwrap(), response.is_error())
        }
    };

    println!("{}", output);
    if is_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
