use log::trace;
use sudox_core::{DigitSet, Position, PositionSet, Topology};

use crate::rule::{BoxedRule, ReduceState, Rule};

const NAME: &str = "single elimination";

/// Removes every decided cell's digit from all of its peers.
///
/// This is the degenerate size-1 naked elimination, applied globally through
/// the peer relation rather than per unit. It runs first in each reduction
/// pass because it is cheap and high-yield.
///
/// The rule works through a worklist: cells decided by its own eliminations
/// are propagated within the same application, so a second consecutive
/// application never changes the board.
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleElimination {}

impl SingleElimination {
    /// Creates a new `SingleElimination` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for SingleElimination {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, topology: &Topology, state: &mut ReduceState<'_>) -> bool {
        let mut changed = false;
        let mut queue: Vec<Position> = state.board().decided_cells().iter().collect();
        let mut processed = PositionSet::EMPTY;

        while let Some(pos) = queue.pop() {
            if processed.contains(pos) {
                continue;
            }
            processed.insert(pos);
            // A queued cell may have lost its last candidate to a conflicting
            // singleton in the meantime.
            let Some(digit) = state.candidates(pos).as_single() else {
                continue;
            };
            trace!("eliminating {digit} from peers of {pos}");
            for peer in topology.peers(pos).iter() {
                if state.eliminate(peer, DigitSet::from_elem(digit)) {
                    changed = true;
                    if state.candidates(peer).len() == 1 {
                        queue.push(peer);
                    }
                }
            }
        }
        changed
    }
}
