use log::debug;
use sudox_core::{Digit, DigitSet, PositionSet, Topology};
use tinyvec::ArrayVec;

use crate::rule::{BoxedRule, ReduceState, Rule};

const NAME: &str = "hidden locked choice";

/// Eliminates hidden locked choices of a given subset size.
///
/// A hidden locked choice of size k in a unit is a set of k digits that only
/// ever appear among exactly k cells of the unit: those cells can be
/// restricted to exactly those k digits. Size 1 is the classic only-choice
/// rule (a digit with a single legal cell in a unit is assigned there); size
/// 2 is "hidden twins".
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenLockedChoice {
    size: Option<usize>,
}

impl HiddenLockedChoice {
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

impl Rule for HiddenLockedChoice {
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

            // Invert the unit: group digits by the exact set of cells that
            // still admit them, from a stable snapshot of the unit.
            let mut groups: ArrayVec<[(PositionSet, DigitSet); 9]> = ArrayVec::new();
            for digit in Digit::ALL {
                let places: PositionSet = cells
                    .into_iter()
                    .filter(|&pos| state.candidates(pos).contains(digit))
                    .collect();
                if places.is_empty() {
                    continue;
                }
                if self.size.is_some_and(|size| size != places.len()) {
                    continue;
                }
                match groups.iter_mut().find(|(set, _)| *set == places) {
                    Some((_, digits)) => digits.insert(digit),
                    None => groups.push((places, DigitSet::from_elem(digit))),
                }
            }

            for (places, locked) in groups {
                // k digits confined to exactly k cells lock those cells.
                if locked.len() != places.len() {
                    continue;
                }
                debug!("{NAME} {locked} in {unit:?}");
                for pos in cells {
                    if places.contains(pos) {
                        changed |= state.restrict(pos, locked);
                    } else {
                        // By construction the locked digits appear nowhere
                        // else in the unit; kept for symmetry with the naked
                        // form.
                        changed |= state.eliminate(pos, locked);
                    }
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use sudox_core::{Board, Position, Variant};

    use super::*;
    use crate::testing::RuleTester;

    #[test]
    fn test_only_choice_assigns_sole_place() {
        // Remove D5 from every cell of row 0 except (3, 0).
        let mut board = Board::new();
        for x in 0..9 {
            if x != 3 {
                board.remove_candidate(Position::new(x, 0), Digit::D5);
            }
        }

        RuleTester::new(Variant::Classic, board)
            .apply_once(&HiddenLockedChoice::of_size(1))
            .assert_assigned(Position::new(3, 0), Digit::D5);
    }

    #[test]
    fn test_only_choice_on_diagonal_unit() {
        let mut board = Board::new();
        for i in 0..9 {
            if i != 4 {
                board.remove_candidate(Position::new(i, i), Digit::D8);
            }
        }

        RuleTester::new(Variant::Diagonal, board.clone())
            .apply_once(&HiddenLockedChoice::of_size(1))
            .assert_assigned(Position::new(4, 4), Digit::D8);

        // Without the diagonal unit there is nothing to conclude.
        let tester =
            RuleTester::new(Variant::Classic, board).apply_once(&HiddenLockedChoice::of_size(1));
        assert!(!tester.changed());
    }

    #[test]
    fn test_hidden_twins_restrict_their_cells() {
        // D1 and D2 appear only at (0, 0) and (4, 0) in row 0.
        let mut board = Board::new();
        for x in 1..9 {
            if x != 4 {
                board.remove_candidate(Position::new(x, 0), Digit::D1);
                board.remove_candidate(Position::new(x, 0), Digit::D2);
            }
        }

        RuleTester::new(Variant::Classic, board)
            .apply_once(&HiddenLockedChoice::of_size(2))
            .assert_removed_exact(
                Position::new(0, 0),
                [
                    Digit::D3,
                    Digit::D4,
                    Digit::D5,
                    Digit::D6,
                    Digit::D7,
                    Digit::D8,
                    Digit::D9,
                ],
            )
            .assert_removed_exact(
                Position::new(4, 0),
                [
                    Digit::D3,
                    Digit::D4,
                    Digit::D5,
                    Digit::D6,
                    Digit::D7,
                    Digit::D8,
                    Digit::D9,
                ],
            );
    }

    #[test]
    fn test_size_filter_excludes_other_sizes() {
        let mut board = Board::new();
        for x in 1..9 {
            if x != 4 {
                board.remove_candidate(Position::new(x, 0), Digit::D1);
                board.remove_candidate(Position::new(x, 0), Digit::D2);
            }
        }

        let tester = RuleTester::new(Variant::Classic, board)
            .apply_once(&HiddenLockedChoice::of_size(1));
        assert!(!tester.changed());
    }

    #[test]
    fn test_two_digits_confined_to_one_cell_do_not_fire() {
        // Both D1 and D2 can only go at (0, 0) in row 0. Two digits cannot
        // share one cell; the rule must leave this latent contradiction for
        // the search to expose rather than assign either digit.
        let mut board = Board::new();
        for x in 1..9 {
            board.remove_candidate(Position::new(x, 0), Digit::D1);
            board.remove_candidate(Position::new(x, 0), Digit::D2);
        }

        let tester = RuleTester::new(Variant::Classic, board)
            .apply_once(&HiddenLockedChoice::of_size(1));
        assert!(!tester.changed());
    }

    #[test]
    fn test_no_change_on_fresh_board() {
        let tester = RuleTester::new(Variant::Classic, Board::new())
            .apply_once(&HiddenLockedChoice::all_sizes());
        assert!(!tester.changed());
    }
}
