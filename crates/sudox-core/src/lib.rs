//! Core data structures for the sudox solver.
//!
//! This crate provides the static description of a (diagonal) sudoku board
//! and the mutable candidate state the solver operates on:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: A 9-bit candidate set per cell
//! - [`position`]: Board positions and 81-bit position sets
//! - [`unit`]: Constraint units (rows, columns, boxes, diagonals), variants,
//!   and the precomputed peer topology
//! - [`board`]: The candidate board, grid parsing, and display
//!
//! # Examples
//!
//! ```
//! use sudox_core::{Board, Digit, Position, Topology, Variant};
//!
//! let topology = Topology::new(Variant::Diagonal);
//! let mut board = Board::new();
//! board.assign(Position::new(4, 4), Digit::D5);
//!
//! assert_eq!(board.candidates(Position::new(4, 4)).len(), 1);
//! assert!(topology.peers(Position::new(4, 4)).contains(Position::new(0, 0)));
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod position;
pub mod unit;

pub use self::{
    board::{Board, ParseGridError},
    digit::Digit,
    digit_set::DigitSet,
    position::{Position, PositionSet},
    unit::{Topology, Unit, Variant},
};
