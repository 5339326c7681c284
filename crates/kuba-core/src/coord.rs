//! Board coordinates.

use crate::Direction;
use std::fmt;

/// A (row, column) position on or around the 7x7 board.
///
/// Components are signed so that the one-cell ring just outside the board
/// (the "apron") is representable. Apron cells read as empty, which lets the
/// push algorithm treat the board edge like any other empty cell. Anything
/// beyond the apron is an invalid read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    /// Creates a coordinate.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Coord { row, col }
    }

    /// Returns true if both components are in 0..=6.
    #[inline]
    pub const fn on_board(self) -> bool {
        self.row >= 0 && self.row <= 6 && self.col >= 0 && self.col <= 6
    }

    /// Returns true if the coordinate is on the board or in the apron ring
    /// (both components in -1..=7).
    #[inline]
    pub const fn in_apron(self) -> bool {
        self.row >= -1 && self.row <= 7 && self.col >= -1 && self.col <= 7
    }

    /// The neighboring coordinate one step in the given direction.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Coord {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl From<(i8, i8)> for Coord {
    fn from((row, col): (i8, i8)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
