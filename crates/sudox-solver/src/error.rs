use derive_more::{Display, Error, From};
use sudox_core::ParseGridError;

/// A board state reached an empty candidate set during reduction.
///
/// This is a recoverable signal, not a fatal error: the search engine treats
/// it as "this branch is dead" and backtracks.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("candidate set became empty")]
pub struct Contradiction;

/// Error returned by the solve entry points.
#[derive(Debug, Display, Error, From, PartialEq, Eq)]
pub enum SolverError {
    /// Every branch at the root failed: the grid has no solution.
    ///
    /// This is a normal, expected outcome for over-constrained grids.
    #[display("no solution exists for this grid")]
    Unsolvable,
    /// The grid string could not be parsed.
    #[display("invalid grid: {_0}")]
    #[from]
    Parse(ParseGridError),
}
