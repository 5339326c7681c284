//! Push directions.

/// The four push directions.
///
/// Kuba names the vertical pair from the pusher's perspective: `Forward`
/// pushes toward row 0 (token `F`) and `Backward` toward row 6 (token `B`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Forward = 2,
    Backward = 3,
}

impl Direction {
    /// All directions in order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    /// Parses a direction token (`L`, `R`, `F`, or `B`, case-insensitive).
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            'F' => Some(Direction::Forward),
            'B' => Some(Direction::Backward),
            _ => None,
        }
    }

    /// Returns the direction token.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Forward => 'F',
            Direction::Backward => 'B',
        }
    }

    /// Unit (row, col) step in the push direction.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Forward => (-1, 0),
            Direction::Backward => (1, 0),
        }
    }

    /// Returns the opposite direction.
    ///
    /// The back-side neighbor of a pushed marble lies one step in the
    /// opposite direction.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
