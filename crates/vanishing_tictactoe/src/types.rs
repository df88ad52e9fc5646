//! Core domain types for vanishing tic-tac-toe.

use super::category::Symbol;
use super::position::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Player {
    /// Player one (goes first).
    One,
    /// Player two (goes second).
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based slot of this player in per-player arrays.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// A symbol on the board together with the player who placed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Mark {
    owner: Player,
    symbol: Symbol,
}

impl Mark {
    /// The player who placed this mark.
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// The drawn symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a player's mark.
    Occupied(Mark),
}

impl Square {
    /// The owner of the mark on this square, if any.
    pub fn owner(&self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark.owner()),
        }
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Counts the squares holding `player`'s marks.
    pub fn count_owned(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| s.owner() == Some(player))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 0-based index so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let cell = match self.squares[pos] {
                    Square::Empty => format!(" {pos}"),
                    Square::Occupied(mark) => mark.symbol().glyph().to_string(),
                };
                result.push_str(&cell);
                if col < 2 {
                    result.push_str(" |");
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn mark(owner: Player, category: Category) -> Square {
        Square::Occupied(Mark::new(owner, category.draw(&mut crate::ScriptedDraw::new(vec![0]))))
    }

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().opponent(), Player::Two);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Position::ALL.iter().all(|p| board.is_empty(*p)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_count_owned() {
        let mut board = Board::new();
        board.set(Position::Center, mark(Player::One, Category::Tech));
        board.set(Position::TopLeft, mark(Player::One, Category::Tech));
        board.set(Position::TopRight, mark(Player::Two, Category::Food));
        assert_eq!(board.count_owned(Player::One), 2);
        assert_eq!(board.count_owned(Player::Two), 1);
    }

    #[test]
    fn test_display_shows_indices_and_glyphs() {
        let mut board = Board::new();
        board.set(Position::Center, mark(Player::One, Category::Tech));
        let shown = board.display();
        assert!(shown.contains("💻"));
        assert!(shown.contains(" 0"));
        assert!(!shown.contains(" 4"));
    }
}
