//! Mark limit invariant: nobody holds more than three squares.

use super::super::queue::MAX_MARKS;
use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: each player has at most [`MAX_MARKS`] marks on the board.
pub struct MarkLimitInvariant;

impl Invariant<GameState> for MarkLimitInvariant {
    fn holds(state: &GameState) -> bool {
        Player::ALL.iter().all(|player| {
            state.board().count_owned(*player) <= MAX_MARKS
                && state.player(*player).placements().len() <= MAX_MARKS
        })
    }

    fn description() -> &'static str {
        "Each player has at most three marks on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Game, Mark, Position, ScriptedDraw, Square};

    #[test]
    fn test_holds_through_vanishing() {
        let mut game = Game::with_draw(ScriptedDraw::new(vec![1]));
        game.start_game(Category::Sports, Category::Space)
            .expect("distinct categories");
        for cell in [0, 8, 1, 7, 5, 3, 6, 2] {
            game.apply_move(cell);
            assert!(MarkLimitInvariant::holds(game.state()));
        }
    }

    #[test]
    fn test_fourth_board_mark_violates() {
        let mut state = GameState::new();
        let symbol = Category::Animals.symbol(0).expect("animals has symbols");
        for pos in [0, 1, 2, 4] {
            let pos = Position::from_index(pos).expect("valid index");
            state
                .board_mut()
                .set(pos, Square::Occupied(Mark::new(Player::One, symbol)));
        }
        assert!(!MarkLimitInvariant::holds(&state));
    }
}
