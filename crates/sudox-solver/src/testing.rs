//! Test harness for elimination rules.
//!
//! [`RuleTester`] tracks the initial and current state of a board, applies
//! rules through the same [`ReduceState`] surface the reducer uses, and
//! offers chained assertions with `#[track_caller]` locations.

use sudox_core::{Board, Digit, DigitSet, Position, Topology, Variant};

use crate::{
    AssignmentRecorder,
    rule::{ReduceState, Rule},
};

/// A fluent test harness for verifying rule implementations.
#[derive(Debug)]
pub struct RuleTester {
    topology: Topology,
    initial: Board,
    current: Board,
    recorder: AssignmentRecorder,
}

impl RuleTester {
    /// Creates a tester over an initial board state.
    pub fn new(variant: Variant, initial: Board) -> Self {
        let current = initial.clone();
        Self {
            topology: Topology::new(variant),
            initial,
            current,
            recorder: AssignmentRecorder::new(),
        }
    }

    /// Creates a tester from a grid string.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a grid.
    #[track_caller]
    pub fn from_grid(variant: Variant, grid: &str) -> Self {
        Self::new(variant, grid.parse().unwrap())
    }

    /// Applies the rule once and returns self for chaining.
    #[track_caller]
    pub fn apply_once<R>(mut self, rule: &R) -> Self
    where
        R: Rule,
    {
        let mut state = ReduceState::new(&mut self.current, &mut self.recorder);
        rule.apply(&self.topology, &mut state);
        self
    }

    /// Applies the rule repeatedly until it makes no more progress.
    #[track_caller]
    pub fn apply_until_stuck<R>(mut self, rule: &R) -> Self
    where
        R: Rule,
    {
        loop {
            let mut state = ReduceState::new(&mut self.current, &mut self.recorder);
            if !rule.apply(&self.topology, &mut state) {
                break;
            }
        }
        self
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.current
    }

    /// Returns the recorder accumulated across applications.
    pub fn recorder(&self) -> &AssignmentRecorder {
        &self.recorder
    }

    /// Returns `true` if any cell differs from the initial state.
    pub fn changed(&self) -> bool {
        self.initial != self.current
    }

    /// Asserts that a cell was reduced to the given singleton.
    ///
    /// # Panics
    ///
    /// Panics if the cell was already decided initially or is not decided to
    /// `digit` now.
    #[track_caller]
    pub fn assert_assigned(self, pos: Position, digit: Digit) -> Self {
        let initial = self.initial.candidates(pos);
        let current = self.current.candidates(pos);
        assert!(
            initial.len() > 1,
            "Expected {pos} to start undecided, but candidates were {initial}"
        );
        assert_eq!(
            current.as_single(),
            Some(digit),
            "Expected {pos} to be decided to {digit}, but candidates are {current}"
        );
        self
    }

    /// Asserts that all of `digits` were removed from a cell.
    ///
    /// Other candidates may have been removed as well.
    ///
    /// # Panics
    ///
    /// Panics if any of `digits` was initially absent or is still present.
    #[track_caller]
    pub fn assert_removed_includes<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(pos);
        let current = self.current.candidates(pos);
        assert_eq!(
            initial & digits,
            digits,
            "Expected initial candidates at {pos} to include {digits}, but they were {initial}"
        );
        assert!(
            (current & digits).is_empty(),
            "Expected all of {digits} to be removed from {pos}, but {current} remains"
        );
        self
    }

    /// Asserts that exactly `digits` were removed from a cell.
    ///
    /// # Panics
    ///
    /// Panics if the removed set differs from `digits`.
    #[track_caller]
    pub fn assert_removed_exact<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(pos);
        let current = self.current.candidates(pos);
        let removed = initial.difference(current);
        assert_eq!(
            removed, digits,
            "Expected exactly {digits} removed from {pos}, but {removed} was \
             (initial {initial}, current {current})"
        );
        self
    }

    /// Asserts that a cell's candidates have not changed.
    ///
    /// # Panics
    ///
    /// Panics if the cell differs from the initial state.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        let initial = self.initial.candidates(pos);
        let current = self.current.candidates(pos);
        assert_eq!(
            initial, current,
            "Expected no change at {pos}, but candidates went from {initial} to {current}"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::SingleElimination;

    #[test]
    fn test_from_grid_and_chaining() {
        let grid = format!("5{}", ".".repeat(80));
        RuleTester::from_grid(Variant::Classic, &grid)
            .apply_once(&SingleElimination::new())
            .assert_removed_includes(Position::new(1, 0), [Digit::D5])
            .assert_no_change(Position::new(4, 4));
    }

    #[test]
    fn test_apply_until_stuck_terminates() {
        let tester = RuleTester::new(Variant::Classic, Board::new())
            .apply_until_stuck(&SingleElimination::new());
        assert!(!tester.changed());
        assert!(tester.recorder().is_empty());
    }

    #[test]
    #[should_panic(expected = "Expected no change at")]
    fn test_assert_no_change_fails_when_changed() {
        let grid = format!("5{}", ".".repeat(80));
        RuleTester::from_grid(Variant::Classic, &grid)
            .apply_once(&SingleElimination::new())
            .assert_no_change(Position::new(1, 0));
    }
}
