use log::debug;
use sudox_core::{Board, DigitSet, Position, Topology, Variant};

use crate::{AssignmentRecorder, Reducer, SolverError, rule::ReduceState};

/// Depth-first backtracking solver with propagation-driven pruning.
///
/// Each search node first reduces the board to a fixpoint, then branches on
/// the undecided cell with the fewest remaining candidates (ties broken by
/// the fixed row-major position order). Every branch operates on its own copy
/// of the board, taken before the branch assignment, so sibling branches
/// never observe each other's mutations. The first solved board found wins;
/// exhausting every branch at the root means the grid is unsolvable.
///
/// # Examples
///
/// ```
/// use sudox_core::Variant;
/// use sudox_solver::Solver;
///
/// let solver = Solver::new(Variant::Diagonal);
/// let solved = solver.solve(&".".repeat(81))?;
/// assert!(solved.is_solved());
/// # Ok::<(), sudox_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    topology: Topology,
    reducer: Reducer,
}

impl Solver {
    /// Creates a solver for a variant with the standard reduction policy.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self::with_reducer(variant, Reducer::standard())
    }

    /// Creates a solver with a custom reducer.
    #[must_use]
    pub fn with_reducer(variant: Variant, reducer: Reducer) -> Self {
        Self {
            topology: Topology::new(variant),
            reducer,
        }
    }

    /// Returns the board topology the solver searches over.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Solves a grid string.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Parse`] for a malformed grid and
    /// [`SolverError::Unsolvable`] when the search exhausts every branch.
    pub fn solve(&self, grid: &str) -> Result<Board, SolverError> {
        let mut recorder = AssignmentRecorder::new();
        self.solve_recorded(grid, &mut recorder)
    }

    /// Solves a grid string, recording every singleton assignment into the
    /// caller's recorder.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Parse`] for a malformed grid and
    /// [`SolverError::Unsolvable`] when the search exhausts every branch.
    pub fn solve_recorded(
        &self,
        grid: &str,
        recorder: &mut AssignmentRecorder,
    ) -> Result<Board, SolverError> {
        let board: Board = grid.parse()?;
        self.solve_board(board, recorder).ok_or(SolverError::Unsolvable)
    }

    /// Runs the search from an existing board state.
    ///
    /// Returns the first solved board found in the deterministic search
    /// order, or `None` when no solution is reachable from `board`.
    pub fn solve_board(
        &self,
        mut board: Board,
        recorder: &mut AssignmentRecorder,
    ) -> Option<Board> {
        if self
            .reducer
            .reduce(&self.topology, &mut board, recorder)
            .is_err()
        {
            // Dead branch; the caller tries the next candidate.
            return None;
        }
        if board.is_solved() {
            return Some(board);
        }

        let pos = Self::branch_position(&board);
        let candidates = board.candidates(pos);
        debug!("branching on {pos} over {candidates}");
        for digit in candidates.iter() {
            // Copy-on-branch isolation: the assignment happens on the copy.
            let mut branch = board.clone();
            ReduceState::new(&mut branch, recorder).restrict(pos, DigitSet::from_elem(digit));
            if let Some(solved) = self.solve_board(branch, recorder) {
                return Some(solved);
            }
        }
        None
    }

    /// Selects the undecided cell with the fewest candidates, breaking ties
    /// by the row-major position order (minimum-remaining-values heuristic).
    fn branch_position(board: &Board) -> Position {
        Position::ALL
            .into_iter()
            .filter(|&pos| board.candidates(pos).len() > 1)
            .min_by_key(|&pos| board.candidates(pos).len())
            .expect("an unsolved board has an undecided cell")
    }
}
