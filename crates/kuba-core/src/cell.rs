//! Board cell contents.

use crate::Color;

/// Contents of a single board cell.
///
/// `Red` is the neutral marble color: expelling a red marble off the board
/// counts toward the moving player's capture total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    White = 0,
    Black = 1,
    Red = 2,
    Empty = 3,
}

impl Cell {
    /// Returns true if the cell holds no marble.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true if the cell holds a marble of any color.
    #[inline]
    pub const fn is_marble(self) -> bool {
        !self.is_empty()
    }

    /// Returns the owning player color for a white or black marble.
    ///
    /// Red marbles are neutral and empty cells hold nothing, so both
    /// return `None`.
    #[inline]
    pub const fn owner(self) -> Option<Color> {
        match self {
            Cell::White => Some(Color::White),
            Cell::Black => Some(Color::Black),
            Cell::Red | Cell::Empty => None,
        }
    }

    /// Returns the layout character for this cell.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Cell::White => 'W',
            Cell::Black => 'B',
            Cell::Red => 'R',
            Cell::Empty => '.',
        }
    }

    /// Parses a layout character into a cell.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'W' => Some(Cell::White),
            'B' => Some(Cell::Black),
            'R' => Some(Cell::Red),
            '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Cell::White,
            Color::Black => Cell::Black,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner() {
        assert_eq!(Cell::White.owner(), Some(Color::White));
        assert_eq!(Cell::Black.owner(), Some(Color::Black));
        assert_eq!(Cell::Red.owner(), None);
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn marble_predicates() {
        assert!(Cell::Red.is_marble());
        assert!(!Cell::Red.is_empty());
        assert!(Cell::Empty.is_empty());
        assert!(!Cell::Empty.is_marble());
    }

    #[test]
    fn char_conversion() {
        for cell in [Cell::White, Cell::Black, Cell::Red, Cell::Empty] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('x'), None);
        assert_eq!(Cell::from_char('w'), None);
    }

    #[test]
    fn from_color() {
        assert_eq!(Cell::from(Color::White), Cell::White);
        assert_eq!(Cell::from(Color::Black), Cell::Black);
    }
}
