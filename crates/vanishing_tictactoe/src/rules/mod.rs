//! Game rules for vanishing tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The vanishing rule lives
//! with the placement queue; this module only judges lines.

pub mod win;

pub use win::{LINES, Win, WinningLine, check_winner, line_owner};
