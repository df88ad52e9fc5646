//! Queue/board consistency: the queues are the only source of marks.

use super::super::{GameState, Player, Position, Square};
use super::Invariant;

/// Invariant: every queued placement is on the board with the same symbol
/// and owner, and every occupied square is backed by a queued placement.
pub struct QueueMatchesBoardInvariant;

impl Invariant<GameState> for QueueMatchesBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();

        let queued_on_board = Player::ALL.iter().all(|player| {
            state.player(*player).placements().iter().all(|placement| {
                matches!(
                    board.get(placement.position()),
                    Square::Occupied(mark)
                        if mark.owner() == *player && mark.symbol() == placement.symbol()
                )
            })
        });

        let board_queued = Position::ALL.iter().all(|pos| match board.get(*pos) {
            Square::Empty => true,
            Square::Occupied(mark) => state.player(mark.owner()).placements().contains(*pos),
        });

        queued_on_board && board_queued
    }

    fn description() -> &'static str {
        "Placement queues match the marks on the board"
    }
}
