//! The 7x7 Kuba board.

use crate::{Cell, Coord};
use std::fmt;
use thiserror::Error;

/// Board side length.
pub const BOARD_SIZE: usize = 7;

/// Errors that can occur when parsing a text board layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected {BOARD_SIZE} rows, got {0}")]
    RowCount(usize),

    #[error("row {row}: expected {BOARD_SIZE} cells, got {len}")]
    RowLength { row: usize, len: usize },

    #[error("row {row}, column {col}: invalid cell character '{ch}'")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// The 7x7 grid of cells.
///
/// A board is a plain value: candidate positions produced during move
/// evaluation are fresh `Board` values, and a committed position is only
/// ever replaced wholesale. Reads one step outside the grid (the apron)
/// return [`Cell::Empty`] so the push algorithm can treat the edge like any
/// other empty cell.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with the canonical Kuba starting layout.
    ///
    /// White occupies the top-left and bottom-right corners, black the other
    /// two, with thirteen red marbles in a cross at the center.
    pub fn new() -> Self {
        use Cell::{Black as B, Empty as E, Red as R, White as W};
        Board {
            cells: [
                [W, W, E, E, E, B, B],
                [W, W, E, R, E, B, B],
                [E, E, R, R, R, E, E],
                [E, R, R, R, R, R, E],
                [E, E, R, R, R, E, E],
                [B, B, E, R, E, W, W],
                [B, B, E, E, E, W, W],
            ],
        }
    }

    /// Reads the cell at a coordinate.
    ///
    /// On-board coordinates return the stored value; apron coordinates read
    /// as empty. Reads beyond the apron are a caller bug.
    #[inline]
    pub fn get(&self, at: Coord) -> Cell {
        debug_assert!(at.in_apron(), "cell read outside the board apron: {at}");
        if at.on_board() {
            self.cells[at.row as usize][at.col as usize]
        } else {
            Cell::Empty
        }
    }

    /// Writes the cell at an on-board coordinate.
    #[inline]
    pub fn set(&mut self, at: Coord, cell: Cell) {
        debug_assert!(at.on_board(), "cell write off the board: {at}");
        self.cells[at.row as usize][at.col as usize] = cell;
    }

    /// Tallies the marbles on the board as (white, black, red).
    pub fn marble_count(&self) -> (u8, u8, u8) {
        let mut counts = (0, 0, 0);
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::White => counts.0 += 1,
                    Cell::Black => counts.1 += 1,
                    Cell::Red => counts.2 += 1,
                    Cell::Empty => {}
                }
            }
        }
        counts
    }

    /// Parses the text layout format: seven rows of seven cell characters
    /// (`W`, `B`, `R`, `.`), with any whitespace between cells ignored.
    pub fn from_layout(s: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(LayoutError::RowCount(rows.len()));
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != BOARD_SIZE {
                return Err(LayoutError::RowLength {
                    row,
                    len: chars.len(),
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                cells[row][col] =
                    Cell::from_char(ch).ok_or(LayoutError::InvalidCell { row, col, ch })?;
            }
        }
        Ok(Board { cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(")?;
        writeln!(f, "{}", self)?;
        write!(f, ")")
    }
}
