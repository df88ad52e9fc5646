//! Vanishing tic-tac-toe game logic.
//!
//! Classic 3x3 tic-tac-toe with one twist: each player keeps at most three
//! marks on the board. Placing a fourth removes that player's oldest mark
//! before the board is checked for a win, so the board never fills and the
//! game never ends in a draw.
//!
//! Each player draws their marks at random from a [`Category`] of symbols.
//! Any three symbols of the same category in a row, column or diagonal win.
//!
//! # Example
//!
//! ```
//! use vanishing_tictactoe::{Category, Game, MoveOutcome, Player, ScriptedDraw};
//!
//! let mut game = Game::with_draw(ScriptedDraw::new(vec![0]));
//! game.start_game(Category::Tech, Category::Food)?;
//!
//! for cell in [0, 3, 1, 4] {
//!     game.apply_move(cell);
//! }
//! let outcome = game.apply_move(2);
//!
//! assert!(matches!(outcome, MoveOutcome::Won { .. }));
//! assert_eq!(game.winner(), Some(Player::One));
//! # Ok::<(), vanishing_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod category;
mod contracts;
mod draw;
mod error;
mod game;
pub mod invariants;
mod phases;
mod position;
mod queue;
pub mod rules;
mod snapshot;
mod state;
mod types;

pub use action::{MoveOutcome, Placement, Rejection};
pub use category::{Category, Symbol};
pub use contracts::{Contract, GameIsRunning, MoveContract, SquareIsEmpty};
pub use draw::{GameRng, ScriptedDraw, SymbolDraw};
pub use error::GameError;
pub use game::{Game, ResetPolicy};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, VanishingInvariants};
pub use phases::Stage;
pub use position::Position;
pub use queue::{MAX_MARKS, PlacementQueue};
pub use rules::{Win, WinningLine, check_winner};
pub use snapshot::{CellView, GameSnapshot, PlacementView, PlayerView};
pub use state::{GameState, PlayerRecord};
pub use types::{Board, Mark, Player, Square};
