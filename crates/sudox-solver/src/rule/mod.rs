//! Candidate elimination rules.
//!
//! Each rule implements the [`Rule`] trait and removes impossible candidates
//! from a board through a [`ReduceState`]. Rules never detect or report
//! contradictions themselves; empty candidate sets are the
//! [`Reducer`](crate::Reducer)'s responsibility.

use std::fmt::Debug;

use sudox_core::Topology;

pub use self::{
    hidden::HiddenLockedChoice, naked::NakedLockedChoice,
    single_elimination::SingleElimination, state::ReduceState,
};

mod hidden;
mod naked;
mod single_elimination;
mod state;

/// The standard rule policy, in application order.
///
/// This reproduces the pass order of the reduction loop: cheap high-yield
/// single elimination first, then the classic only-choice rule (hidden locked
/// choice of size 1), naked twins (size 2), and finally hidden locked choices
/// of every size. The order is a convergence-speed policy, not a correctness
/// contract; the fixpoint loop makes intra-pass ordering immaterial to the
/// final state.
#[must_use]
pub fn standard_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(SingleElimination::new()),
        Box::new(HiddenLockedChoice::of_size(1)),
        Box::new(NakedLockedChoice::of_size(2)),
        Box::new(HiddenLockedChoice::all_sizes()),
    ]
}

/// A candidate elimination rule.
///
/// Rules mutate the board in place through the [`ReduceState`] surface and
/// report whether they removed any candidate.
pub trait Rule: Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the rule.
    fn clone_box(&self) -> BoxedRule;

    /// Applies the rule once.
    ///
    /// Returns `true` if any candidate was removed.
    fn apply(&self, topology: &Topology, state: &mut ReduceState<'_>) -> bool;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
