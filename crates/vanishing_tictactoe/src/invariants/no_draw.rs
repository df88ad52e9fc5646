//! No-draw invariant: a full board always has a winner.

use super::super::GameState;
use super::Invariant;

/// Invariant: if all nine squares are occupied, a winner has been declared.
///
/// With three marks each, only six squares can ever be occupied, so this
/// holds trivially for every reachable state.
pub struct NoDrawInvariant;

impl Invariant<GameState> for NoDrawInvariant {
    fn holds(state: &GameState) -> bool {
        !state.board().is_full() || state.winner().is_some()
    }

    fn description() -> &'static str {
        "A full board always has a winner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Mark, Player, Position, Square};

    #[test]
    fn test_empty_board_holds() {
        assert!(NoDrawInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_full_board_without_winner_violates() {
        let mut state = GameState::new();
        for pos in Position::ALL {
            let owner = if pos.to_index() % 2 == 0 {
                Player::One
            } else {
                Player::Two
            };
            let symbol = Category::default_for(owner)
                .symbol(0)
                .expect("default category has symbols");
            state
                .board_mut()
                .set(pos, Square::Occupied(Mark::new(owner, symbol)));
        }
        assert!(!NoDrawInvariant::holds(&state));
    }
}
