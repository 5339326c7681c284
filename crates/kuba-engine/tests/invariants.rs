//! Property tests over random move attempts.
//!
//! Attempts are drawn from the full input space, legal or not, and the
//! engine-wide invariants are checked after every call: marble conservation,
//! monotone per-color counts, turn alternation, and untouched state on
//! rejection.

use kuba_core::{Coord, Direction};
use kuba_engine::{Game, Player};
use proptest::prelude::*;

const NAMES: [&str; 2] = ["PlayerA", "PlayerB"];

#[derive(Debug, Clone, Copy)]
struct Attempt {
    player: usize,
    row: i8,
    col: i8,
    dir: Direction,
}

fn attempt() -> impl Strategy<Value = Attempt> {
    (0..2usize, -1i8..=7, -1i8..=7, 0..4usize).prop_map(|(player, row, col, d)| Attempt {
        player,
        row,
        col,
        dir: Direction::ALL[d],
    })
}

fn observables(game: &Game) -> (String, Option<u8>, Option<u8>, Option<String>, Option<String>, u32) {
    (
        game.board().to_string(),
        game.captured("PlayerA"),
        game.captured("PlayerB"),
        game.winner().map(str::to_owned),
        game.current_turn().map(|p| p.name().to_owned()),
        game.ply_count(),
    )
}

proptest! {
    #[test]
    fn random_attempts_uphold_invariants(attempts in proptest::collection::vec(attempt(), 1..200)) {
        let mut game = Game::new(
            Player::new("PlayerA", kuba_core::Color::White),
            Player::new("PlayerB", kuba_core::Color::Black),
        )
        .unwrap();

        let mut prev_counts = game.marble_count();
        for a in attempts {
            let before = observables(&game);
            let winner_before = before.3.clone();
            let mover = NAMES[a.player];

            let accepted = game
                .try_move(mover, Coord::new(a.row, a.col), a.dir)
                .is_ok();

            let (white, black, red) = game.marble_count();
            let caps_a = game.captured("PlayerA").unwrap();
            let caps_b = game.captured("PlayerB").unwrap();

            // Conservation: reds are either on the board or captured;
            // player colors never come back.
            prop_assert_eq!(red + caps_a + caps_b, 13);
            prop_assert!(white <= prev_counts.0);
            prop_assert!(black <= prev_counts.1);

            if accepted {
                prop_assert_eq!(game.ply_count(), before.5 + 1);
                // The mover never keeps the turn.
                prop_assert_ne!(game.current_turn().unwrap().name(), mover);
                // At most one marble left the board.
                let lost = (prev_counts.0 - white) + (prev_counts.1 - black) + (prev_counts.2 - red);
                prop_assert!(lost <= 1);
            } else {
                // Rejection leaves every observable untouched.
                prop_assert_eq!(observables(&game), before);
            }

            // Winner is final.
            if let Some(w) = winner_before {
                prop_assert_eq!(game.winner(), Some(w.as_str()));
                prop_assert!(!accepted);
            }

            prev_counts = (white, black, red);
        }
    }
}
