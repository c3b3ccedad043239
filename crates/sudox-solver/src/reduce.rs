use log::trace;
use sudox_core::{Board, Topology};

use crate::{
    AssignmentRecorder, Contradiction,
    rule::{BoxedRule, ReduceState, standard_rules},
};

/// Drives a set of elimination rules to a fixpoint.
///
/// A `Reducer` applies its rules in order, one full pass at a time, until a
/// pass decides no new cell (the board is *stalled*) or a contradiction is
/// detected. The rule list is a tunable policy: [`Reducer::standard`]
/// reproduces the default pass order, [`Reducer::new`] accepts any other.
///
/// # Examples
///
/// ```
/// use sudox_core::{Board, Topology, Variant};
/// use sudox_solver::{AssignmentRecorder, Reducer};
///
/// let topology = Topology::new(Variant::Diagonal);
/// let reducer = Reducer::standard();
/// let mut board: Board =
///     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3"
///         .parse()
///         .unwrap();
/// let mut recorder = AssignmentRecorder::new();
///
/// reducer.reduce(&topology, &mut board, &mut recorder).unwrap();
/// assert!(board.solved_count() > 17);
/// ```
#[derive(Debug, Clone)]
pub struct Reducer {
    rules: Vec<BoxedRule>,
}

impl Default for Reducer {
    fn default() -> Self {
        Self::standard()
    }
}

impl Reducer {
    /// Creates a reducer with a custom rule policy, applied in order within
    /// each pass.
    #[must_use]
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Creates a reducer with the standard rule policy
    /// ([`standard_rules`]).
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_rules())
    }

    /// Returns the configured rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Reduces the board until no rule makes further progress.
    ///
    /// Progress is measured by the number of decided cells before and after a
    /// full pass; the loop halts when that count is unchanged. Candidate sets
    /// only ever shrink.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] as soon as a pass leaves any cell with an
    /// empty candidate set. Callers must treat this as "no solution reachable
    /// from this state", not as a fatal error.
    pub fn reduce(
        &self,
        topology: &Topology,
        board: &mut Board,
        recorder: &mut AssignmentRecorder,
    ) -> Result<(), Contradiction> {
        loop {
            let solved_before = board.solved_count();
            let mut state = ReduceState::new(board, recorder);
            for rule in &self.rules {
                rule.apply(topology, &mut state);
            }
            if board.has_contradiction() {
                trace!("reduction hit a contradiction");
                return Err(Contradiction);
            }
            let solved_after = board.solved_count();
            trace!("reduction pass: {solved_before} -> {solved_after} decided");
            if solved_after == solved_before {
                return Ok(());
            }
        }
    }
}
