//! Full game management: move validation, atomic commits, capture
//! accounting, turn order, and win detection.

use crate::push::{push, PushOutcome};
use crate::{Player, RepetitionGuard};
use kuba_core::{Board, Cell, Color, Coord, Direction, BOARD_SIZE};
use thiserror::Error;

/// Number of captured red marbles that wins the game.
pub const CAPTURE_TARGET: u8 = 7;

/// Errors from game construction.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("players must hold different colors")]
    SameColor,
    #[error("players must have distinct names")]
    DuplicateName,
}

/// Why a proposed move was rejected.
///
/// Every variant is recoverable: the game state is left untouched and the
/// caller may retry with a different move. Variants are listed in the order
/// the checks run; evaluation short-circuits on the first failure.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("no such player in this game")]
    UnknownPlayer,
    #[error("the game is already over")]
    GameOver,
    #[error("not this player's turn")]
    NotYourTurn,
    #[error("coordinate is off the board")]
    OffBoard,
    #[error("no marble at the selected cell")]
    EmptyCell,
    #[error("the selected marble is not the mover's color")]
    NotYourMarble,
    #[error("the marble is blocked from behind and cannot be pushed")]
    Blocked,
    #[error("the push would expel the mover's own marble")]
    SelfElimination,
    #[error("the move would recreate the board from two plies ago")]
    KoViolation,
}

/// A complete Kuba game.
///
/// Holds the committed board, both players, capture counts, the turn
/// pointer, the ply counter, and the ko guard. All of it mutates only inside
/// an accepted [`try_move`](Game::try_move); rejected moves change nothing.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    board: Board,
    /// Color to move next; `None` until the first move (either player may
    /// open).
    turn: Option<Color>,
    /// Red marbles captured, indexed by [`Color::index`].
    captures: [u8; 2],
    /// Set at most once; never cleared.
    winner: Option<Color>,
    /// Accepted moves so far.
    ply: u32,
    guard: RepetitionGuard,
}

impl Game {
    /// Creates a game on the canonical starting board.
    pub fn new(player1: Player, player2: Player) -> Result<Self, SetupError> {
        Self::with_board(player1, player2, Board::new())
    }

    /// Creates a game on a custom starting board.
    ///
    /// No winner is evaluated at construction; end conditions are only
    /// checked after accepted moves.
    pub fn with_board(player1: Player, player2: Player, board: Board) -> Result<Self, SetupError> {
        if player1.color() == player2.color() {
            return Err(SetupError::SameColor);
        }
        if player1.name() == player2.name() {
            return Err(SetupError::DuplicateName);
        }
        let guard = RepetitionGuard::new(&board);
        Ok(Game {
            players: [player1, player2],
            board,
            turn: None,
            captures: [0, 0],
            winner: None,
            ply: 0,
            guard,
        })
    }

    /// Attempts a move: `player_name` pushes the marble at `at` one cell in
    /// `dir`.
    ///
    /// On success the board, capture counts, ko slots, ply counter, turn
    /// pointer, and winner are all updated as one transaction. On any error
    /// every observable getter returns exactly what it did before the call.
    pub fn try_move(
        &mut self,
        player_name: &str,
        at: Coord,
        dir: Direction,
    ) -> Result<(), MoveError> {
        let mover = self
            .player_by_name(player_name)
            .ok_or(MoveError::UnknownPlayer)?
            .color();
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.turn.is_some_and(|t| t != mover) {
            return Err(MoveError::NotYourTurn);
        }
        if !at.on_board() {
            return Err(MoveError::OffBoard);
        }
        let cell = self.board.get(at);
        if cell.is_empty() {
            return Err(MoveError::EmptyCell);
        }
        if cell.owner() != Some(mover) {
            return Err(MoveError::NotYourMarble);
        }
        // A marble can only be pushed with an open cell behind it.
        if !self.board.get(at.step(dir.opposite())).is_empty() {
            return Err(MoveError::Blocked);
        }

        let outcome = push(&self.board, at, dir);
        if outcome.expelled.is_some_and(|c| c.owner() == Some(mover)) {
            return Err(MoveError::SelfElimination);
        }
        if self.guard.is_repetition(self.ply, &outcome.board) {
            return Err(MoveError::KoViolation);
        }

        self.commit(mover, outcome);
        Ok(())
    }

    /// Boolean move API: parses the `L`/`R`/`F`/`B` direction token and maps
    /// every rejection, including an unrecognized token, to `false`.
    pub fn make_move(&mut self, player_name: &str, at: (i8, i8), dir_token: char) -> bool {
        match Direction::from_char(dir_token) {
            Some(dir) => self
                .try_move(player_name, Coord::new(at.0, at.1), dir)
                .is_ok(),
            None => false,
        }
    }

    /// Applies a validated move. Only called once every check has passed.
    fn commit(&mut self, mover: Color, outcome: PushOutcome) {
        self.board = outcome.board;
        if outcome.expelled == Some(Cell::Red) {
            self.captures[mover.index()] += 1;
        }
        self.guard.record(self.ply, &self.board);
        self.ply += 1;
        self.turn = Some(mover.opposite());
        self.update_winner(mover);
    }

    /// Evaluates end-of-game conditions after a commit by `mover`.
    fn update_winner(&mut self, mover: Color) {
        if self.captures[mover.index()] >= CAPTURE_TARGET {
            self.winner = Some(mover);
            return;
        }
        // A player whose color is gone from the board has nothing left to
        // move; the other player wins.
        let (white, black, _) = self.board.marble_count();
        if white == 0 {
            self.winner = Some(Color::Black);
        } else if black == 0 {
            self.winner = Some(Color::White);
        }
    }

    /// Enumerates every move the given color could legally make right now,
    /// including the self-elimination and ko screens. Advisory only; ignores
    /// whose turn it is.
    pub fn legal_moves(&self, color: Color) -> Vec<(Coord, Direction)> {
        let mut moves = Vec::new();
        if self.winner.is_some() {
            return moves;
        }
        for row in 0..BOARD_SIZE as i8 {
            for col in 0..BOARD_SIZE as i8 {
                let at = Coord::new(row, col);
                if self.board.get(at).owner() != Some(color) {
                    continue;
                }
                for dir in Direction::ALL {
                    if !self.board.get(at.step(dir.opposite())).is_empty() {
                        continue;
                    }
                    let outcome = push(&self.board, at, dir);
                    if outcome.expelled.is_some_and(|c| c.owner() == Some(color)) {
                        continue;
                    }
                    if self.guard.is_repetition(self.ply, &outcome.board) {
                        continue;
                    }
                    moves.push((at, dir));
                }
            }
        }
        moves
    }

    /// Returns the committed board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Tallies the marbles on the board as (white, black, red).
    pub fn marble_count(&self) -> (u8, u8, u8) {
        self.board.marble_count()
    }

    /// Returns the number of red marbles captured by the named player, or
    /// `None` for an unknown name.
    pub fn captured(&self, player_name: &str) -> Option<u8> {
        self.player_by_name(player_name)
            .map(|p| self.captures[p.color().index()])
    }

    /// Returns the winner's name once the game is over.
    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|color| self.player(color).name())
    }

    /// Returns true if a winner has been decided.
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns the player who must move next, or `None` before the first
    /// move of the game.
    pub fn current_turn(&self) -> Option<&Player> {
        self.turn.map(|color| self.player(color))
    }

    /// Returns the number of accepted moves so far.
    pub fn ply_count(&self) -> u32 {
        self.ply
    }

    /// Returns the player holding the given color.
    pub fn player(&self, color: Color) -> &Player {
        if self.players[0].color() == color {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }

    fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }
}
