//! The line-push algorithm.
//!
//! A push moves the selected marble one cell in the chosen direction,
//! carrying the contiguous run of marbles ahead of it. A marble carried past
//! the board edge is expelled and reported to the caller. This module knows
//! only geometry; turn order and legality live in [`Game`](crate::Game).

use kuba_core::{Board, Cell, Coord, Direction};

/// Result of pushing a line: the candidate board and the marble expelled off
/// the edge, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOutcome {
    /// The board after the push. The input board is never modified.
    pub board: Board,
    /// The marble that fell off the far edge, if the run reached it.
    pub expelled: Option<Cell>,
}

/// Pushes the marble at `target` one cell in `dir`.
///
/// The run of occupied cells starting at `target` and extending in the push
/// direction shifts one step as a block: it either compacts into the first
/// empty cell along the line, or, if the run reaches the edge, drops its
/// far-end marble off the board.
///
/// Callers must ensure `target` holds a marble and that its back-side
/// neighbor (one step opposite `dir`) is empty; that check is the move
/// validator's job.
pub fn push(board: &Board, target: Coord, dir: Direction) -> PushOutcome {
    debug_assert!(target.on_board(), "push target off the board: {target}");
    debug_assert!(board.get(target).is_marble(), "push target is empty");

    // Find the far end of the contiguous run of marbles starting at target.
    let mut run_end = target;
    loop {
        let ahead = run_end.step(dir);
        if !ahead.on_board() || board.get(ahead).is_empty() {
            break;
        }
        run_end = ahead;
    }

    let expelled = if run_end.step(dir).on_board() {
        None
    } else {
        Some(board.get(run_end))
    };

    // Shift the run one step. Reads come from the input board, so write
    // order is irrelevant.
    let mut next = board.clone();
    let mut cur = run_end;
    loop {
        let dest = cur.step(dir);
        if dest.on_board() {
            next.set(dest, board.get(cur));
        }
        if cur == target {
            break;
        }
        cur = cur.step(dir.opposite());
    }
    next.set(target, Cell::Empty);

    PushOutcome {
        board: next,
        expelled,
    }
}
