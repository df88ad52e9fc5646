//! The engine-owned game record.

use super::action::Placement;
use super::category::Category;
use super::phases::Stage;
use super::queue::PlacementQueue;
use super::rules::{Win, WinningLine};
use super::types::{Board, Mark, Player, Square};
use serde::{Deserialize, Serialize};

/// A player's bound category and live placements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    category: Category,
    placements: PlacementQueue,
}

impl PlayerRecord {
    fn new(category: Category) -> Self {
        Self {
            category,
            placements: PlacementQueue::new(),
        }
    }

    /// The category this player draws from.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Live placements, oldest first.
    pub fn placements(&self) -> &PlacementQueue {
        &self.placements
    }
}

/// Complete game state.
///
/// Only the engine mutates it; collaborators read it or take a
/// [`GameSnapshot`](crate::GameSnapshot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    players: [PlayerRecord; 2],
    current_player: Player,
    winner: Option<Win>,
    stage: Stage,
}

impl GameState {
    /// Creates a game in setup with the default categories.
    pub fn new() -> Self {
        Self::with_categories(
            Category::default_for(Player::One),
            Category::default_for(Player::Two),
        )
    }

    pub(crate) fn with_categories(player1: Category, player2: Category) -> Self {
        Self {
            board: Board::new(),
            players: [PlayerRecord::new(player1), PlayerRecord::new(player2)],
            current_player: Player::One,
            winner: None,
            stage: Stage::Setup,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the win, once a player has completed a line.
    pub fn win(&self) -> Option<Win> {
        self.winner
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner.map(|w| w.player())
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winner.map(|w| w.line())
    }

    /// Returns the lifecycle stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the record of `player`.
    pub fn player(&self, player: Player) -> &PlayerRecord {
        &self.players[player.index()]
    }

    /// Clears the board, queues and winner and hands the turn to player one.
    pub(crate) fn begin(&mut self) {
        self.board = Board::new();
        for record in &mut self.players {
            record.placements.clear();
        }
        self.current_player = Player::One;
        self.winner = None;
        self.stage = Stage::InProgress;
    }

    pub(crate) fn bind_category(&mut self, player: Player, category: Category) {
        self.players[player.index()].category = category;
    }

    /// Places a mark and applies the vanishing rule in one step.
    ///
    /// Returns the evicted placement whose square was cleared.
    pub(crate) fn place(&mut self, player: Player, placement: Placement) -> Option<Placement> {
        self.board.set(
            placement.position(),
            Square::Occupied(Mark::new(player, placement.symbol())),
        );
        let evicted = self.players[player.index()].placements.push(placement);
        if let Some(old) = evicted {
            self.board.set(old.position(), Square::Empty);
        }
        evicted
    }

    pub(crate) fn finish(&mut self, win: Win) {
        self.winner = Some(win);
        self.stage = Stage::Won;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
