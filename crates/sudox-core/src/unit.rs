//! Constraint units and the board topology.
//!
//! A [`Unit`] is a group of nine positions that must collectively hold each
//! digit 1-9 exactly once: the nine rows, nine columns, nine 3x3 boxes, and
//! (for the diagonal variant) the two main diagonals.
//!
//! [`Topology`] fixes the unit list for a [`Variant`] and precomputes, for
//! every position, the set of peers sharing at least one unit with it. It is
//! built once and read-only afterwards.

use crate::position::{Position, PositionSet};

/// A sudoku constraint unit (row, column, 3x3 box, or diagonal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3x3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
    /// The top-left to bottom-right diagonal (cells where x == y).
    MainDiagonal,
    /// The top-right to bottom-left diagonal (cells where x + y == 8).
    AntiDiagonal,
}

impl Unit {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// The two diagonal units of the diagonal variant.
    pub const DIAGONALS: [Self; 2] = [Self::MainDiagonal, Self::AntiDiagonal];

    /// The 27 classic units in row, column, box order.
    pub const CLASSIC: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the nine positions of this unit, in a fixed order.
    #[must_use]
    pub const fn positions(self) -> [Position; 9] {
        let mut positions = [Position::new(0, 0); 9];
        let mut i = 0;
        while i < 9 {
            #[expect(clippy::cast_possible_truncation)]
            let n = i as u8;
            positions[i] = match self {
                Self::Row { y } => Position::new(n, y),
                Self::Column { x } => Position::new(x, n),
                Self::Box { index } => Position::from_box(index, n),
                Self::MainDiagonal => Position::new(n, n),
                Self::AntiDiagonal => Position::new(8 - n, n),
            };
            i += 1;
        }
        positions
    }

    /// Returns the positions of this unit as a bitset.
    #[must_use]
    pub fn position_set(self) -> PositionSet {
        self.positions().into_iter().collect()
    }
}

/// The board variant being solved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Classic sudoku: 27 units (rows, columns, boxes).
    Classic,
    /// Diagonal sudoku: the two main diagonals are additional units.
    #[default]
    Diagonal,
}

impl Variant {
    /// Returns the units of this variant.
    #[must_use]
    pub fn units(self) -> Vec<Unit> {
        let mut units = Unit::CLASSIC.to_vec();
        if self == Self::Diagonal {
            units.extend(Unit::DIAGONALS);
        }
        units
    }
}

/// The static constraint structure of a board.
///
/// Owns the unit list of a [`Variant`] and the precomputed peer set of every
/// position (the union of the other members of every unit containing it).
/// Pure and deterministic; computed once, then read-only.
///
/// # Examples
///
/// ```
/// use sudox_core::{Position, Topology, Variant};
///
/// let topology = Topology::new(Variant::Classic);
/// assert_eq!(topology.units().len(), 27);
/// assert_eq!(topology.peers(Position::new(0, 0)).len(), 20);
///
/// let diagonal = Topology::new(Variant::Diagonal);
/// assert_eq!(diagonal.units().len(), 29);
/// // (0, 0) lies on the main diagonal, gaining the other diagonal cells.
/// assert_eq!(diagonal.peers(Position::new(0, 0)).len(), 26);
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    variant: Variant,
    units: Vec<Unit>,
    peers: [PositionSet; 81],
}

impl Topology {
    /// Builds the topology for a variant.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let units = variant.units();
        let mut peers = [PositionSet::EMPTY; 81];
        for unit in &units {
            for pos in unit.positions() {
                let mut others = unit.position_set();
                others.remove(pos);
                peers[pos.index()] |= others;
            }
        }
        Self {
            variant,
            units,
            peers,
        }
    }

    /// Returns the variant this topology was built for.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the units of the board.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns the peers of a position (every position sharing at least one
    /// unit with it, excluding itself).
    #[must_use]
    pub fn peers(&self, pos: Position) -> PositionSet {
        self.peers[pos.index()]
    }
}
