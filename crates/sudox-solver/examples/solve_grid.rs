//! Solves a grid from the command line and prints the result.
//!
//! ```console
//! $ cargo run --example solve_grid -- \
//!     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3"
//! ```

use clap::Parser;
use sudox_core::{Board, Variant};
use sudox_solver::{AssignmentRecorder, Solver, SolverError};

/// The classic diagonal-variant example grid.
const DEFAULT_GRID: &str =
    "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";

#[derive(Debug, Parser)]
struct Args {
    /// 81-character grid in row-major order ('1'-'9' given, '.' unknown).
    #[arg(default_value = DEFAULT_GRID)]
    grid: String,

    /// Solve as a classic sudoku instead of the diagonal variant.
    #[arg(long)]
    classic: bool,

    /// Print every recorded assignment snapshot.
    #[arg(long)]
    trace_assignments: bool,
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let args = Args::parse();

    let variant = if args.classic {
        Variant::Classic
    } else {
        Variant::Diagonal
    };
    let solver = Solver::new(variant);
    let mut recorder = AssignmentRecorder::new();

    let puzzle: Board = args.grid.parse()?;
    println!("{puzzle}");

    match solver.solve_recorded(&args.grid, &mut recorder) {
        Ok(solved) => {
            println!("{solved}");
            println!("solved in {} recorded assignments", recorder.len());
            if args.trace_assignments {
                for (i, snapshot) in recorder.snapshots().iter().enumerate() {
                    println!("--- assignment {i} ---");
                    println!("{snapshot}");
                }
            }
            Ok(())
        }
        Err(SolverError::Unsolvable) => {
            println!("no solution exists for this grid");
            Ok(())
        }
        Err(err) => Err(err),
    }
}
