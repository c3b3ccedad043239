use log::debug;
use sudox_core::{DigitSet, Topology};
use tinyvec::ArrayVec;

use crate::rule::{BoxedRule, ReduceState, Rule};

const NAME: &str = "naked locked choice";

/// Eliminates naked locked choices of a given subset size.
///
/// A naked locked choice of size k in a unit is a set of k cells whose
/// candidate sets are all identical and of size k: those k digits are locked
/// to those cells and can be removed from every other cell of the unit. Size
/// 2 is the classic "naked twins" rule. The relationship is unit-scoped, so
/// the scan runs per unit, never globally.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedLockedChoice {
    size: Option<usize>,
}

impl NakedLockedChoice {
    /// Creates a rule that only fires on locked choices of exactly `size`
    /// digits.
    #[must_use]
    pub const fn of_size(size: usize) -> Self {
        Self { size: Some(size) }
    }

    /// Creates a rule that fires on locked choices of every size.
    #[must_use]
    pub const fn all_sizes() -> Self {
        Self { size: None }
    }
}

impl Rule for NakedLockedChoice {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, topology: &Topology, state: &mut ReduceState<'_>) -> bool {
        let mut changed = false;
        for unit in topology.units() {
            let cells = unit.positions();

            // Count occurrences of each undecided candidate set in the unit,
            // reading a stable snapshot before any elimination is applied.
            let mut groups: ArrayVec<[(DigitSet, usize); 9]> = ArrayVec::new();
            for pos in cells {
                let candidates = state.candidates(pos);
                if candidates.len() <= 1 {
                    continue;
                }
                if self.size.is_some_and(|size| size != candidates.len()) {
                    continue;
                }
                match groups.iter_mut().find(|(set, _)| *set == candidates) {
                    Some((_, count)) => *count += 1,
                    None => groups.push((candidates, 1)),
                }
            }

            for (locked, count) in groups {
                // k cells sharing the same k-digit candidate set lock those
                // digits; more than k sharing cells is a latent contradiction
                // left for the search to expose.
                if locked.len() != count {
                    continue;
                }
                debug!("{NAME} {locked} in {unit:?}");
                for pos in cells {
                    if state.candidates(pos) != locked {
                        changed |= state.eliminate(pos, locked);
                    }
                }
            }
        }
        changed
    }
}
