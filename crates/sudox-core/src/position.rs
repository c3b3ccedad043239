//! Board positions and position sets.
//!
//! A [`Position`] identifies one of the 81 cells by its `(x, y)` coordinate
//! (x = column, y = row). [`PositionSet`] packs a subset of the 81 cells into
//! a `u128` bitset, indexed in row-major order.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

const CELLS: usize = 81;
const ROW_LABELS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// A position on the 9x9 board.
///
/// Positions order by row-major index; this ordering is the deterministic
/// tie-break used when the solver selects a branching cell.
///
/// # Examples
///
/// ```
/// use sudox_core::Position;
///
/// let pos = Position::new(3, 0);
/// assert_eq!(pos.index(), 3);
/// assert_eq!(pos.to_string(), "A4"); // row A, column 4
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from `(x, y)` coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below 81.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < CELLS);
        Self {
            x: (index % 9) as u8,
            y: (index / 9) as u8,
        }
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn x(&self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn y(&self) -> u8 {
        self.y
    }

    /// Returns the row-major index (0-80).
    #[must_use]
    pub const fn index(&self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index of the 3x3 box containing this position (0-8,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn box_index(&self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }

    /// Returns the `i`-th position of the given box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `i` is not below 9.
    #[must_use]
    pub const fn from_box(box_index: u8, i: u8) -> Self {
        assert!(box_index < 9 && i < 9);
        Self {
            x: box_index % 3 * 3 + i % 3,
            y: box_index / 3 * 3 + i / 3,
        }
    }
}

// The derived ordering would compare `x` first; ordering must follow the
// row-major index.
impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ROW_LABELS[self.y as usize], self.x + 1)
    }
}

/// A set of board positions, represented as an 81-bit bitset.
///
/// Bit `i` corresponds to `Position::from_index(i)`. Iteration yields
/// positions in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSet(u128);

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing all 81 positions.
    pub const FULL: Self = Self((1 << CELLS) - 1);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a position into the set.
    pub const fn insert(&mut self, pos: Position) {
        self.0 |= 1 << pos.index();
    }

    /// Removes a position from the set.
    pub const fn remove(&mut self, pos: Position) {
        self.0 &= !(1 << pos.index());
    }

    /// Returns `true` if the set contains the position.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        self.0 & (1 << pos.index()) != 0
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the sole position if the set is a singleton, `None` otherwise.
    #[must_use]
    pub fn as_single(&self) -> Option<Position> {
        if self.len() == 1 {
            Some(Position::from_index(self.0.trailing_zeros() as usize))
        } else {
            None
        }
    }

    /// Returns an iterator over the positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + use<> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            #[expect(clippy::cast_possible_truncation)]
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(Position::from_index(index))
        })
    }
}

impl Default for PositionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut set = Self::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl BitAnd for PositionSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for PositionSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for PositionSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PositionSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
