use sudox_core::{Board, DigitSet, Position};

use crate::AssignmentRecorder;

/// Mutable solver state for one reduction pass.
///
/// `ReduceState` bundles the board with the assignment recorder and is the
/// only surface rules use to mutate candidates. Centralizing mutation here
/// keeps rule logic focused on finding eliminations while guaranteeing that
/// every transition to a singleton is snapshot into the recorder, the single
/// integration point between solving logic and the audit trail.
#[derive(Debug)]
pub struct ReduceState<'a> {
    board: &'a mut Board,
    recorder: &'a mut AssignmentRecorder,
}

impl<'a> ReduceState<'a> {
    /// Creates a state over a board and recorder.
    pub fn new(board: &'a mut Board, recorder: &'a mut AssignmentRecorder) -> Self {
        Self { board, recorder }
    }

    /// Returns the underlying board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.board
    }

    /// Returns the candidate set at a position.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        self.board.candidates(pos)
    }

    /// Intersects a cell's candidates with `allowed`.
    ///
    /// Returns `true` if the cell changed. Records a snapshot when the cell
    /// becomes a singleton.
    pub fn restrict(&mut self, pos: Position, allowed: DigitSet) -> bool {
        self.write(pos, self.board.candidates(pos) & allowed)
    }

    /// Removes `digits` from a cell's candidates.
    ///
    /// Returns `true` if the cell changed. Records a snapshot when the cell
    /// becomes a singleton.
    pub fn eliminate(&mut self, pos: Position, digits: DigitSet) -> bool {
        self.write(pos, self.board.candidates(pos).difference(digits))
    }

    fn write(&mut self, pos: Position, after: DigitSet) -> bool {
        let before = self.board.candidates(pos);
        if after == before {
            return false;
        }
        self.board.set_candidates(pos, after);
        if after.len() == 1 {
            self.recorder.record(self.board);
        }
        true
    }
}
