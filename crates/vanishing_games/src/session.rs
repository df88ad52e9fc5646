//! One player-facing session: a game plus the running score.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use vanishing_tictactoe::{
    Category, Game, GameError, GameRng, GameSnapshot, MoveOutcome, Player, SymbolDraw,
};

/// Wins per player across rematches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Scoreboard {
    wins: [u32; 2],
}

impl Scoreboard {
    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    /// Adds one win for `player`.
    pub fn record_win(&mut self, player: Player) {
        self.wins[player.index()] += 1;
    }

    /// Zeroes both tallies.
    pub fn clear(&mut self) {
        self.wins = [0; 2];
    }
}

/// Snapshot of a session: the game plus the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SessionSnapshot {
    /// The game.
    pub game: GameSnapshot,
    /// Wins so far.
    pub scores: Scoreboard,
}

/// A game together with the score the presentation layer keeps for it.
#[derive(Debug, Clone)]
pub struct GameSession<D = GameRng> {
    game: Game<D>,
    scores: Scoreboard,
}

impl<D: SymbolDraw> GameSession<D> {
    /// Wraps a game with an empty scoreboard.
    pub fn new(game: Game<D>) -> Self {
        Self {
            game,
            scores: Scoreboard::default(),
        }
    }

    /// The game.
    pub fn game(&self) -> &Game<D> {
        &self.game
    }

    /// The score.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Starts a game with the given categories.
    pub fn start(&mut self, player1: Category, player2: Category) -> Result<(), GameError> {
        self.game.start_game(player1, player2)
    }

    /// Starts with the currently bound categories.
    pub fn start_with_bound(&mut self) -> Result<(), GameError> {
        self.game.start_game(
            self.game.category(Player::One),
            self.game.category(Player::Two),
        )
    }

    /// Chooses a category during setup.
    pub fn set_category(&mut self, player: Player, category: Category) -> Result<(), GameError> {
        self.game.set_category(player, category)
    }

    /// Plays a cell, scoring the win if the move produced one.
    ///
    /// A win can be scored at most once per game because every move after it
    /// is ignored.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: usize) -> MoveOutcome {
        let outcome = self.game.apply_move(cell);
        if let Some(win) = outcome.win() {
            self.scores.record_win(win.player());
            info!(
                winner = %win.player(),
                player1 = self.scores.wins(Player::One),
                player2 = self.scores.wins(Player::Two),
                "Score updated"
            );
        }
        outcome
    }

    /// Plays again with the same categories, keeping the score.
    pub fn rematch(&mut self) {
        self.game.rematch();
    }

    /// Back to setup with the score cleared.
    pub fn reset(&mut self) {
        self.game.reset_game();
        self.scores.clear();
    }

    /// Captures game and score.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            game: self.game.snapshot(),
            scores: self.scores,
        }
    }
}
