//! The candidate board and its textual forms.
//!
//! A [`Board`] maps every position to its current candidate set. It is the
//! mutable state the propagation rules and the search operate on: created
//! from a grid string, mutated in place during reduction, and cloned before
//! every search branch so sibling branches never observe each other's
//! mutations.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{
    digit::Digit,
    digit_set::DigitSet,
    position::{Position, PositionSet},
};

/// Error returned when a grid string cannot be parsed.
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ParseGridError {
    /// The string does not contain exactly 81 significant characters.
    #[display("expected 81 cells, found {found}")]
    InvalidLength {
        /// Number of significant characters found.
        found: usize,
    },
    /// The string contains a character that is not a digit or a placeholder.
    #[display("invalid character {ch:?} in grid")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
}

/// A mapping from every position to its candidate set.
///
/// A cell is *decided* (a singleton) when exactly one candidate remains. The
/// board is *contradictory* when any candidate set is empty, and *solved*
/// when every cell is a singleton.
///
/// # Examples
///
/// ```
/// use sudox_core::{Board, Digit, Position};
///
/// let mut board = Board::new();
/// board.assign(Position::new(0, 0), Digit::D2);
/// board.remove_candidate(Position::new(1, 0), Digit::D2);
///
/// assert_eq!(board.solved_count(), 1);
/// assert_eq!(board.candidates(Position::new(1, 0)).len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [DigitSet; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with every candidate available at every cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Returns the candidate set at a position.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        self.cells[pos.index()]
    }

    /// Replaces the candidate set at a position.
    pub fn set_candidates(&mut self, pos: Position, candidates: DigitSet) {
        self.cells[pos.index()] = candidates;
    }

    /// Removes a candidate digit at a position.
    ///
    /// Returns `true` if the digit was present.
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        let cell = &mut self.cells[pos.index()];
        let present = cell.contains(digit);
        cell.remove(digit);
        present
    }

    /// Fixes a cell to a single digit.
    pub fn assign(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = DigitSet::from_elem(digit);
    }

    /// Returns `true` if every cell is a singleton.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.len() == 1)
    }

    /// Returns `true` if any cell has an empty candidate set.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(DigitSet::is_empty)
    }

    /// Returns the number of decided cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.len() == 1).count()
    }

    /// Returns the set of decided cells.
    #[must_use]
    pub fn decided_cells(&self) -> PositionSet {
        Position::ALL
            .into_iter()
            .filter(|pos| self.cells[pos.index()].len() == 1)
            .collect()
    }

    /// Returns the 81-character single-line form of the board, using `.` for
    /// undecided cells.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell.as_single() {
                Some(digit) => char::from(b'0' + digit.value()),
                None => '.',
            })
            .collect()
    }
}

impl FromStr for Board {
    type Err = ParseGridError;

    /// Parses a grid from a string of 81 cells in row-major order.
    ///
    /// Digits `1`-`9` are fixed givens; `.`, `_`, or `0` mark unknown cells
    /// (all nine candidates). ASCII whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::new();
        let mut count = 0;
        for ch in s.chars().filter(|ch| !ch.is_ascii_whitespace()) {
            if count >= 81 {
                count += 1;
                continue;
            }
            match ch {
                '.' | '_' | '0' => {}
                '1'..='9' => {
                    let digit = Digit::from_value(ch as u8 - b'0');
                    board.assign(Position::from_index(count), digit);
                }
                _ => return Err(ParseGridError::InvalidCharacter { ch }),
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::InvalidLength { found: count });
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Renders the board as a 9x9 grid with 3x3 block separators.
    ///
    /// Each cell shows its remaining candidates; cell width adapts to the
    /// widest candidate set on the board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 1 + self.cells.iter().map(DigitSet::len).max().unwrap_or(1);
        let line = vec!["-".repeat(width * 3); 3].join("+");
        for y in 0..9 {
            for x in 0..9 {
                let cell = self.candidates(Position::new(x, y)).to_string();
                write!(f, "{cell:^width$}")?;
                if x == 2 || x == 5 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if y == 2 || y == 5 {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const DIAGONAL_GRID: &str =
        "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";

    #[test]
    fn test_parse_grid() {
        let board: Board = DIAGONAL_GRID.parse().unwrap();
        assert_eq!(
            board.candidates(Position::new(0, 0)),
            DigitSet::from_elem(Digit::D2)
        );
        assert_eq!(board.candidates(Position::new(1, 0)), DigitSet::FULL);
        assert_eq!(
            board.candidates(Position::new(8, 8)),
            DigitSet::from_elem(Digit::D3)
        );
        assert_eq!(board.solved_count(), 17);
    }

    #[test]
    fn test_parse_ignores_whitespace_and_accepts_placeholders() {
        let board: Board = "
            53_ _7_ ___
            6__ 195 ___
            098 000 060
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();
        assert_eq!(
            board.candidates(Position::new(0, 0)),
            DigitSet::from_elem(Digit::D5)
        );
        assert_eq!(board.candidates(Position::new(2, 0)), DigitSet::FULL);
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert_eq!(
            "123".parse::<Board>(),
            Err(ParseGridError::InvalidLength { found: 3 })
        );
        let too_long = ".".repeat(82);
        assert_eq!(
            too_long.parse::<Board>(),
            Err(ParseGridError::InvalidLength { found: 82 })
        );
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let grid = format!("x{}", ".".repeat(80));
        assert_eq!(
            grid.parse::<Board>(),
            Err(ParseGridError::InvalidCharacter { ch: 'x' })
        );
    }

    #[test]
    fn test_to_line_round_trip() {
        let board: Board = DIAGONAL_GRID.parse().unwrap();
        assert_eq!(board.to_line(), DIAGONAL_GRID);
    }

    #[test]
    fn test_assign_and_query() {
        let mut board = Board::new();
        assert!(!board.is_solved());
        assert!(!board.has_contradiction());

        board.assign(Position::new(3, 2), Digit::D8);
        assert_eq!(board.solved_count(), 1);
        assert!(board.decided_cells().contains(Position::new(3, 2)));

        board.set_candidates(Position::new(3, 2), DigitSet::EMPTY);
        assert!(board.has_contradiction());
    }

    #[test]
    fn test_display_contains_separators() {
        let board: Board = DIAGONAL_GRID.parse().unwrap();
        let rendered = board.to_string();
        assert_eq!(rendered.lines().count(), 11);
        assert!(rendered.contains('+'));
    }

    proptest! {
        #[test]
        fn prop_parse_to_line_round_trip(cells in proptest::collection::vec(0_u8..=9, 81)) {
            let grid: String = cells
                .iter()
                .map(|&v| if v == 0 { '.' } else { char::from(b'0' + v) })
                .collect();
            let board: Board = grid.parse().unwrap();
            prop_assert_eq!(board.to_line(), grid);
        }
    }
}
