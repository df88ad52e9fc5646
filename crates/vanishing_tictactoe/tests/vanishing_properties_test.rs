//! Property tests over random move sequences.

use proptest::prelude::*;
use vanishing_tictactoe::{
    Category, Game, GameRng, InvariantSet, MAX_MARKS, MoveOutcome, Player, Position,
    VanishingInvariants,
};

fn started(seed: u64) -> Game<GameRng> {
    let mut game = Game::seeded(seed);
    game.start_game(Category::Space, Category::Sports)
        .expect("distinct categories");
    game
}

proptest! {
    #[test]
    fn marks_never_exceed_three(seed in any::<u64>(), cells in prop::collection::vec(0usize..12, 0..60)) {
        let mut game = started(seed);
        for cell in cells {
            game.apply_move(cell);
            for player in Player::ALL {
                prop_assert!(game.board().count_owned(player) <= MAX_MARKS);
            }
        }
    }

    #[test]
    fn full_board_implies_winner(seed in any::<u64>(), cells in prop::collection::vec(0usize..9, 0..80)) {
        let mut game = started(seed);
        for cell in cells {
            game.apply_move(cell);
            prop_assert!(!game.board().is_full() || game.winner().is_some());
        }
    }

    #[test]
    fn turn_alternates_on_non_winning_moves(seed in any::<u64>(), cells in prop::collection::vec(0usize..9, 0..60)) {
        let mut game = started(seed);
        for cell in cells {
            let before = game.current_player();
            match game.apply_move(cell) {
                MoveOutcome::Placed { player, .. } => {
                    prop_assert_eq!(player, before);
                    prop_assert_ne!(game.current_player(), before);
                }
                MoveOutcome::Won { player, .. } => {
                    prop_assert_eq!(player, before);
                    prop_assert_eq!(game.current_player(), before);
                }
                MoveOutcome::Ignored(_) => {
                    prop_assert_eq!(game.current_player(), before);
                }
            }
        }
    }

    #[test]
    fn fourth_placement_clears_only_the_oldest(seed in any::<u64>(), cells in prop::collection::vec(0usize..9, 0..60)) {
        let mut game = started(seed);
        for cell in cells {
            let mover = game.current_player();
            let oldest = game.next_to_vanish(mover);
            let before = game.board().clone();

            let outcome = game.apply_move(cell);
            let Some(placement) = outcome.placement() else {
                prop_assert_eq!(game.board(), &before);
                continue;
            };

            prop_assert_eq!(outcome.vanished().map(|p| p.position()), oldest);
            for pos in Position::ALL {
                if pos == placement.position() {
                    prop_assert_eq!(game.board().get(pos).owner(), Some(mover));
                } else if Some(pos) == oldest {
                    prop_assert!(game.board().is_empty(pos));
                } else {
                    prop_assert_eq!(game.board().get(pos), before.get(pos));
                }
            }
        }
    }

    #[test]
    fn every_reachable_state_satisfies_invariants(seed in any::<u64>(), cells in prop::collection::vec(0usize..9, 0..60)) {
        let mut game = started(seed);
        for cell in cells {
            game.apply_move(cell);
            prop_assert!(VanishingInvariants::check_all(game.state()).is_ok());
            if game.winner().is_some() {
                game.rematch();
            }
        }
    }
}
