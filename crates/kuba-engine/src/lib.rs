//! Rules engine for the Kuba marble game.
//!
//! Kuba is a two-player game on a 7x7 grid of marbles in three colors: one
//! per player plus neutral red. A move pushes a contiguous line of marbles
//! one cell in one of four directions; marbles pushed past the edge are
//! removed, and removing a red marble counts toward the mover's capture
//! total. A player wins by capturing seven red marbles or by clearing the
//! opponent's color from the board.
//!
//! This crate provides:
//! - [`push`] - the pure line-push algorithm
//! - [`RepetitionGuard`] - the ko rule (no recreating the board from two
//!   plies back)
//! - [`Game`] - move validation, atomic state commits, capture accounting,
//!   and win detection
//!
//! Every call to [`Game::try_move`] is transactional: validation and the
//! candidate board are computed against the committed state, and any
//! rejection leaves the game byte-for-byte unchanged. The engine is
//! synchronous and single-threaded; embedders must serialize calls per game.
//!
//! # Example
//!
//! ```
//! use kuba_core::{Color, Coord, Direction};
//! use kuba_engine::{Game, Player};
//!
//! let mut game = Game::new(
//!     Player::new("PlayerA", Color::White),
//!     Player::new("PlayerB", Color::Black),
//! )
//! .unwrap();
//!
//! // Either player may open; pushing the corner marble left slides the
//! // white pair one cell.
//! game.try_move("PlayerA", Coord::new(6, 6), Direction::Left).unwrap();
//! assert_eq!(game.current_turn().unwrap().name(), "PlayerB");
//! assert_eq!(game.marble_count(), (8, 8, 13));
//! ```

mod game;
mod player;
mod push;
mod repetition;

pub use game::{Game, MoveError, SetupError, CAPTURE_TARGET};
pub use player::Player;
pub use push::{push, PushOutcome};
pub use repetition::RepetitionGuard;
