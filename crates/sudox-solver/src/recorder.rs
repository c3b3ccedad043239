use sudox_core::Board;

/// An ordered, append-only log of board snapshots.
///
/// A snapshot is taken at the moment a cell becomes a decided singleton,
/// whether by an elimination rule or by a search branch assignment. The log
/// is owned by the caller and passed by reference through the solve pipeline;
/// the solving logic never consults it. It exists purely for diagnostic and
/// visualization collaborators.
///
/// # Examples
///
/// ```
/// use sudox_core::Variant;
/// use sudox_solver::{AssignmentRecorder, Solver};
///
/// let solver = Solver::new(Variant::Classic);
/// let mut recorder = AssignmentRecorder::new();
/// let solved = solver.solve_recorded(&".".repeat(81), &mut recorder)?;
/// assert!(solved.is_solved());
/// assert!(!recorder.is_empty());
/// # Ok::<(), sudox_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssignmentRecorder {
    snapshots: Vec<Board>,
}

impl AssignmentRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot of the board.
    pub fn record(&mut self, board: &Board) {
        self.snapshots.push(board.clone());
    }

    /// Returns the recorded snapshots in assignment order.
    #[must_use]
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
