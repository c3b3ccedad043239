//! Constraint-propagation and backtracking search for (diagonal) sudoku.
//!
//! The solver alternates two mechanisms:
//!
//! 1. A [`Reducer`] drives a family of elimination [`rule`]s to a fixpoint,
//!    shrinking candidate sets until no rule makes further progress or a
//!    contradiction (an empty candidate set) is detected.
//! 2. A [`Solver`] performs depth-first backtracking on top of the reducer,
//!    branching on the least-constrained undecided cell and recursing on an
//!    isolated copy of the board for each candidate.
//!
//! Every assignment that decides a cell is snapshot into an
//! [`AssignmentRecorder`], a one-way observation channel for external
//! visualization.
//!
//! # Examples
//!
//! ```
//! use sudox_core::Variant;
//! use sudox_solver::Solver;
//!
//! let solver = Solver::new(Variant::Diagonal);
//! let grid =
//!     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";
//! let solved = solver.solve(grid)?;
//! assert!(solved.is_solved());
//! # Ok::<(), sudox_solver::SolverError>(())
//! ```

pub use self::{error::*, recorder::*, reduce::*, search::*};

mod error;
mod recorder;
mod reduce;
pub mod rule;
mod search;

#[cfg(test)]
mod testing;
