//! Win detection logic.

use super::super::{Board, Player, Position, Square};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// The line's positions in ascending index order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The line's board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if the line passes through `position`.
    pub fn contains(&self, position: Position) -> bool {
        self.0.contains(&position)
    }
}

/// The 8 winning lines in scan order: rows, then columns, then diagonals.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinningLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinningLine([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinningLine([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinningLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    player: Player,
    line: WinningLine,
}

impl Win {
    /// The winner.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The completed line.
    pub fn line(&self) -> WinningLine {
        self.line
    }
}

/// Returns the player whose category fills all three squares of `line`.
///
/// Symbols need not match: any three symbols of one category count.
pub fn line_owner(board: &Board, line: &WinningLine) -> Option<Player> {
    let [a, b, c] = line.positions().map(|pos| board.get(pos));
    match (a, b, c) {
        (Square::Occupied(x), Square::Occupied(y), Square::Occupied(z))
            if x.symbol().category() == y.symbol().category()
                && y.symbol().category() == z.symbol().category()
                && x.owner() == y.owner()
                && y.owner() == z.owner() =>
        {
            Some(x.owner())
        }
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`LINES`] order and the first completed one is
/// returned, so a move finishing two lines at once reports only the first.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|line| {
        line_owner(board, line).map(|player| Win {
            player,
            line: *line,
        })
    })
}
