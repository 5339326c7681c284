//! Positional-repetition guard (the ko rule).
//!
//! Kuba forbids a move whose resulting board exactly reproduces the board
//! from two plies earlier: without it, a player could endlessly undo the
//! opponent's last push. Repeating a position from *one* ply back is
//! impossible anyway (a push always changes the board), and older
//! repetitions are allowed.
//!
//! Two slots indexed by ply parity are enough: the slot an upcoming ply is
//! about to overwrite always holds the board committed exactly two plies
//! earlier.

use kuba_core::Board;

/// Two-slot ring buffer of committed boards, indexed by ply parity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepetitionGuard {
    slots: [Board; 2],
}

impl RepetitionGuard {
    /// Creates a guard for a game starting from `initial`.
    ///
    /// Both slots start as the initial board, so a second move that exactly
    /// restores the opening position already counts as a repetition.
    pub fn new(initial: &Board) -> Self {
        RepetitionGuard {
            slots: [initial.clone(), initial.clone()],
        }
    }

    /// Returns true if committing `candidate` as ply `ply` would recreate
    /// the board from two plies back. Ply 0 is never a repetition.
    pub fn is_repetition(&self, ply: u32, candidate: &Board) -> bool {
        ply > 0 && self.slots[(ply % 2) as usize] == *candidate
    }

    /// Records the board committed at ply `ply`.
    pub fn record(&mut self, ply: u32, board: &Board) {
        self.slots[(ply % 2) as usize] = board.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuba_core::{Cell, Coord};

    fn altered(board: &Board, row: i8, col: i8, cell: Cell) -> Board {
        let mut next = board.clone();
        next.set(Coord::new(row, col), cell);
        next
    }

    #[test]
    fn ply_zero_never_repeats() {
        let initial = Board::new();
        let guard = RepetitionGuard::new(&initial);
        assert!(!guard.is_repetition(0, &initial));
    }

    #[test]
    fn restoring_the_opening_position_is_a_repetition() {
        let initial = Board::new();
        let mut guard = RepetitionGuard::new(&initial);
        guard.record(0, &altered(&initial, 0, 2, Cell::White));
        assert!(guard.is_repetition(1, &initial));
    }

    #[test]
    fn compares_against_two_plies_back() {
        let initial = Board::new();
        let mut guard = RepetitionGuard::new(&initial);
        let after_ply0 = altered(&initial, 0, 2, Cell::White);
        let after_ply1 = altered(&after_ply0, 6, 2, Cell::Black);
        guard.record(0, &after_ply0);
        guard.record(1, &after_ply1);

        // Ply 2 may not recreate the board committed at ply 0, but the
        // board from ply 1 is not checked against even parity.
        assert!(guard.is_repetition(2, &after_ply0));
        assert!(!guard.is_repetition(2, &after_ply1));
        assert!(!guard.is_repetition(2, &initial));
    }

    #[test]
    fn record_overwrites_the_parity_slot() {
        let initial = Board::new();
        let mut guard = RepetitionGuard::new(&initial);
        let after_ply0 = altered(&initial, 0, 2, Cell::White);
        let after_ply2 = altered(&initial, 0, 3, Cell::White);
        guard.record(0, &after_ply0);
        guard.record(2, &after_ply2);

        assert!(!guard.is_repetition(4, &after_ply0));
        assert!(guard.is_repetition(4, &after_ply2));
    }
}
