//! Engine errors.

use super::category::Category;
use derive_more::{Display, Error};

/// Errors returned by engine operations.
///
/// Illegal moves are not errors; see [`Rejection`](crate::Rejection).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Both players asked for the same category.
    #[display("Invalid configuration: players need different categories (player 1: {player1}, player 2: {player2})")]
    InvalidConfiguration {
        /// Category requested for player one.
        player1: Category,
        /// Category requested for player two.
        player2: Category,
    },

    /// A category name did not match the catalog.
    #[display("Unknown category: {name}")]
    UnknownCategory {
        /// The name that failed to parse.
        name: String,
    },
}
