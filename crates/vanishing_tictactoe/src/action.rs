//! First-class action types for vanishing tic-tac-toe.
//!
//! A move is a cell index chosen by the presentation layer. Applying it
//! yields a [`MoveOutcome`] describing what happened, including the mark
//! that vanished to make room for the new one.

use super::category::Symbol;
use super::position::Position;
use super::rules::Win;
use super::types::Player;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A symbol placed at a position; one entry of a player's placement queue.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, derive_new::new,
)]
pub struct Placement {
    position: Position,
    symbol: Symbol,
}

impl Placement {
    /// Where the symbol sits.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The drawn symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.symbol, self.position)
    }
}

/// Why a move was ignored.
///
/// Rejections are not errors: stale or duplicate clicks are expected and
/// leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// No game has been started.
    #[display("No game in progress")]
    NotStarted,

    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is outside 0-8.
    #[display("Cell {} is off the board", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Result of [`Game::apply_move`](crate::Game::apply_move).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was illegal; nothing changed.
    Ignored(Rejection),
    /// The mark was placed and the turn passed to the opponent.
    Placed {
        /// Who moved.
        player: Player,
        /// The new mark.
        placement: Placement,
        /// The mover's oldest mark, removed to keep three on the board.
        vanished: Option<Placement>,
    },
    /// The mark was placed and completed a line.
    Won {
        /// Who moved.
        player: Player,
        /// The new mark.
        placement: Placement,
        /// The mover's oldest mark, removed before the line was checked.
        vanished: Option<Placement>,
        /// The winning line.
        win: Win,
    },
}

impl MoveOutcome {
    /// Returns true if the move changed the game.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }

    /// The new placement, if the move was applied.
    pub fn placement(&self) -> Option<Placement> {
        match self {
            MoveOutcome::Ignored(_) => None,
            MoveOutcome::Placed { placement, .. } | MoveOutcome::Won { placement, .. } => {
                Some(*placement)
            }
        }
    }

    /// The mark that vanished, if any.
    pub fn vanished(&self) -> Option<Placement> {
        match self {
            MoveOutcome::Ignored(_) => None,
            MoveOutcome::Placed { vanished, .. } | MoveOutcome::Won { vanished, .. } => *vanished,
        }
    }

    /// The win this move produced, if any.
    pub fn win(&self) -> Option<Win> {
        match self {
            MoveOutcome::Won { win, .. } => Some(*win),
            _ => None,
        }
    }

    /// The rejection, if the move was ignored.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Ignored(rejection) => Some(*rejection),
            _ => None,
        }
    }
}
