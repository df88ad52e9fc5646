//! The vanishing tic-tac-toe engine.
//!
//! [`Game`] owns the [`GameState`] and the symbol draw source. Every
//! operation runs to completion synchronously; the presentation layer
//! dispatches operations and reads state or snapshots back.

use super::action::{MoveOutcome, Placement, Rejection};
use super::category::Category;
use super::contracts::{Contract, MoveContract};
use super::draw::{GameRng, SymbolDraw};
use super::error::GameError;
use super::phases::Stage;
use super::position::Position;
use super::queue::PlacementQueue;
use super::rules::{WinningLine, check_winner};
use super::snapshot::GameSnapshot;
use super::state::GameState;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What happens to the bound categories on [`Game::reset_game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Rebind both players to [`Category::default_for`].
    #[default]
    RestoreDefaults,
    /// Keep whatever the players last chose.
    KeepSelected,
}

/// Vanishing tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Game<D = GameRng> {
    state: GameState,
    draw: D,
    reset_policy: ResetPolicy,
}

impl Game<GameRng> {
    /// Creates a game in setup, drawing symbols from a fresh random seed.
    #[instrument]
    pub fn new() -> Self {
        Self::with_draw(GameRng::from_entropy())
    }

    /// Creates a game in setup with a deterministic seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_draw(GameRng::new(seed))
    }
}

impl Default for Game<GameRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: SymbolDraw> Game<D> {
    /// Creates a game in setup that draws symbols from `draw`.
    pub fn with_draw(draw: D) -> Self {
        Self {
            state: GameState::new(),
            draw,
            reset_policy: ResetPolicy::default(),
        }
    }

    /// Sets the category policy applied by [`Game::reset_game`].
    pub fn with_reset_policy(mut self, reset_policy: ResetPolicy) -> Self {
        self.reset_policy = reset_policy;
        self
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player to move (the winner, once the game is won).
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state.winning_line()
    }

    /// Returns the lifecycle stage.
    pub fn stage(&self) -> Stage {
        self.state.stage()
    }

    /// Returns true once a game has been started.
    pub fn is_started(&self) -> bool {
        self.state.stage().is_started()
    }

    /// Returns the reset policy.
    pub fn reset_policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    /// Returns the category bound to `player`.
    pub fn category(&self, player: Player) -> Category {
        self.state.player(player).category()
    }

    /// Returns `player`'s live placements, oldest first.
    pub fn placements(&self, player: Player) -> &PlacementQueue {
        self.state.player(player).placements()
    }

    /// The square that will vanish on `player`'s next placement.
    pub fn next_to_vanish(&self, player: Player) -> Option<Position> {
        self.placements(player)
            .next_to_vanish()
            .map(Placement::position)
    }

    /// Empty squares, if moves are being accepted.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.state.stage() == Stage::InProgress {
            Position::valid_moves(self.state.board())
        } else {
            Vec::new()
        }
    }

    /// Starts a game with the given categories.
    ///
    /// Clears the board, both queues and any winner, and gives the first
    /// move to player one. Calling it mid-game starts over.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if the categories are
    /// equal. The game is left untouched.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, player1: Category, player2: Category) -> Result<(), GameError> {
        if player1 == player2 {
            debug!(%player1, "Rejecting identical categories");
            return Err(GameError::InvalidConfiguration { player1, player2 });
        }
        self.state.bind_category(Player::One, player1);
        self.state.bind_category(Player::Two, player2);
        self.state.begin();
        info!(%player1, %player2, "Game started");
        Ok(())
    }

    /// Starts again with the currently bound categories.
    #[instrument(skip(self))]
    pub fn rematch(&mut self) {
        self.state.begin();
        info!(
            player1 = %self.category(Player::One),
            player2 = %self.category(Player::Two),
            "Rematch started"
        );
    }

    /// Returns to setup, discarding the board and turn.
    ///
    /// Categories follow the [`ResetPolicy`].
    #[instrument(skip(self), fields(policy = ?self.reset_policy))]
    pub fn reset_game(&mut self) {
        self.state = match self.reset_policy {
            ResetPolicy::RestoreDefaults => GameState::new(),
            ResetPolicy::KeepSelected => GameState::with_categories(
                self.category(Player::One),
                self.category(Player::Two),
            ),
        };
        info!("Game reset to setup");
    }

    /// Binds `category` to `player` during setup.
    ///
    /// Outside setup the call is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if the other player
    /// already holds `category`.
    #[instrument(skip(self))]
    pub fn set_category(&mut self, player: Player, category: Category) -> Result<(), GameError> {
        if self.state.stage() != Stage::Setup {
            debug!(stage = %self.state.stage(), "Ignoring category change outside setup");
            return Ok(());
        }
        let other = self.category(player.opponent());
        if other == category {
            let (player1, player2) = match player {
                Player::One => (category, other),
                Player::Two => (other, category),
            };
            return Err(GameError::InvalidConfiguration { player1, player2 });
        }
        self.state.bind_category(player, category);
        debug!(%player, %category, "Category bound");
        Ok(())
    }

    /// Places the current player's next symbol at `cell` (0-8).
    ///
    /// Illegal moves (not started, already won, off the board, occupied)
    /// change nothing and come back as [`MoveOutcome::Ignored`].
    ///
    /// A legal move draws a symbol, places it, evicts the player's oldest
    /// mark if they now have four, then checks for a win on the resulting
    /// board. The turn passes only if nobody won.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, cell: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(cell) else {
            debug!(cell, "Ignoring move off the board");
            return MoveOutcome::Ignored(Rejection::OutOfRange(cell));
        };
        if let Err(rejection) = MoveContract::pre(&self.state, &position) {
            debug!(%rejection, "Ignoring move");
            return MoveOutcome::Ignored(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let player = self.state.current_player();
        let symbol = self.category(player).draw(&mut self.draw);
        let placement = Placement::new(position, symbol);
        let vanished = self.state.place(player, placement);
        if let Some(old) = vanished {
            debug!(%old, "Oldest mark vanished");
        }

        let outcome = match check_winner(self.state.board()) {
            Some(win) => {
                self.state.finish(win);
                info!(winner = %win.player(), line = ?win.line().indices(), "Game won");
                MoveOutcome::Won {
                    player,
                    placement,
                    vanished,
                    win,
                }
            }
            None => {
                self.state.pass_turn();
                MoveOutcome::Placed {
                    player,
                    placement,
                    vanished,
                }
            }
        };

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, &self.state);
            debug_assert!(checked.is_ok(), "{checked:?}");
        }

        outcome
    }

    /// Captures the state for the presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedDraw;

    fn scripted() -> Game<ScriptedDraw> {
        Game::with_draw(ScriptedDraw::new(vec![0, 1, 2]))
    }

    #[test]
    fn test_new_game_is_in_setup_with_defaults() {
        let game = scripted();
        assert_eq!(game.stage(), Stage::Setup);
        assert!(!game.is_started());
        assert_eq!(game.category(Player::One), Category::default_for(Player::One));
        assert_eq!(game.category(Player::Two), Category::default_for(Player::Two));
        assert!(game.valid_moves().is_empty());
    }

    #[test]
    fn test_moves_before_start_are_ignored() {
        let mut game = scripted();
        assert_eq!(
            game.apply_move(4),
            MoveOutcome::Ignored(Rejection::NotStarted)
        );
        assert!(game.board().is_empty(Position::Center));
    }

    #[test]
    fn test_start_binds_categories_and_clears() {
        let mut game = scripted();
        game.start_game(Category::Tech, Category::Space).unwrap();
        game.apply_move(0);
        game.start_game(Category::Sports, Category::Nature).unwrap();

        assert_eq!(game.stage(), Stage::InProgress);
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.category(Player::One), Category::Sports);
        assert!(game.board().is_empty(Position::TopLeft));
        assert!(game.placements(Player::One).is_empty());
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_equal_categories_rejected_without_side_effects() {
        let mut game = scripted();
        game.start_game(Category::Tech, Category::Space).unwrap();
        game.apply_move(0);
        let before = game.state().clone();

        let err = game.start_game(Category::Food, Category::Food).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidConfiguration {
                player1: Category::Food,
                player2: Category::Food
            }
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_symbols_come_from_the_movers_category() {
        let mut game = scripted();
        game.start_game(Category::Tech, Category::Space).unwrap();
        let first = game.apply_move(0).placement().unwrap();
        let second = game.apply_move(1).placement().unwrap();
        assert_eq!(first.symbol().glyph(), "💻");
        assert_eq!(first.symbol().category(), Category::Tech);
        assert_eq!(second.symbol().glyph(), "🛸");
        assert_eq!(second.symbol().category(), Category::Space);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut game = scripted();
        game.start_game(Category::Tech, Category::Space).unwrap();
        assert_eq!(
            game.apply_move(9),
            MoveOutcome::Ignored(Rejection::OutOfRange(9))
        );
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn test_next_to_vanish_tracks_oldest_when_full() {
        let mut game = scripted();
        game.start_game(Category::Tech, Category::Space).unwrap();
        for cell in [0, 3, 1, 4, 8] {
            game.apply_move(cell);
        }
        assert_eq!(game.next_to_vanish(Player::One), Some(Position::TopLeft));
        assert_eq!(game.next_to_vanish(Player::Two), None);
    }

    #[test]
    fn test_set_category_only_in_setup() {
        let mut game = scripted();
        game.set_category(Player::One, Category::Tech).unwrap();
        assert_eq!(game.category(Player::One), Category::Tech);

        let clash = game.set_category(Player::Two, Category::Tech);
        assert!(matches!(clash, Err(GameError::InvalidConfiguration { .. })));

        game.rematch();
        game.set_category(Player::One, Category::Space).unwrap();
        assert_eq!(game.category(Player::One), Category::Tech);
    }

    #[test]
    fn test_reset_restores_default_categories() {
        let mut game = scripted();
        game.start_game(Category::Tech, Category::Space).unwrap();
        game.apply_move(4);
        game.reset_game();

        assert_eq!(game.stage(), Stage::Setup);
        assert!(game.board().is_empty(Position::Center));
        assert_eq!(game.category(Player::One), Category::default_for(Player::One));
        assert_eq!(game.category(Player::Two), Category::default_for(Player::Two));
    }

    #[test]
    fn test_reset_can_keep_selected_categories() {
        let mut game = scripted().with_reset_policy(ResetPolicy::KeepSelected);
        game.start_game(Category::Tech, Category::Space).unwrap();
        game.apply_move(4);
        game.reset_game();

        assert_eq!(game.stage(), Stage::Setup);
        assert_eq!(game.category(Player::One), Category::Tech);
        assert_eq!(game.category(Player::Two), Category::Space);
    }

    #[test]
    fn test_rematch_keeps_categories() {
        let mut game = scripted();
        game.start_game(Category::Tech, Category::Space).unwrap();
        for cell in [0, 3, 1, 4, 2] {
            game.apply_move(cell);
        }
        assert_eq!(game.stage(), Stage::Won);

        game.rematch();
        assert_eq!(game.stage(), Stage::InProgress);
        assert_eq!(game.winner(), None);
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.category(Player::One), Category::Tech);
        assert!(game.placements(Player::Two).is_empty());
    }

    #[test]
    fn test_seeded_games_draw_identically() {
        let mut a = Game::seeded(99);
        let mut b = Game::seeded(99);
        a.start_game(Category::Nature, Category::Food).unwrap();
        b.start_game(Category::Nature, Category::Food).unwrap();
        for cell in [0, 1, 2, 3, 4, 5] {
            assert_eq!(a.apply_move(cell), b.apply_move(cell));
        }
    }
}
