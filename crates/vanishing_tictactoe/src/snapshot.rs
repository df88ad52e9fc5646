//! Serializable view of a game for the presentation layer.

use super::category::Category;
use super::phases::Stage;
use super::state::GameState;
use super::types::{Player, Square};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A mark as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CellView {
    /// Who placed the mark.
    pub owner: Player,
    /// The mark's category.
    pub category: Category,
    /// The printable glyph.
    pub symbol: String,
}

/// One entry of a placement queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlacementView {
    /// Board index (0-8).
    pub position: usize,
    /// The printable glyph.
    pub symbol: String,
}

/// Per-player part of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerView {
    /// Which player this is.
    pub player: Player,
    /// Bound category.
    pub category: Category,
    /// Live placements, oldest first.
    pub placements: Vec<PlacementView>,
    /// Board index that vanishes on this player's next placement.
    pub next_to_vanish: Option<usize>,
}

/// Everything a renderer needs after an engine call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameSnapshot {
    /// Nine cells in row-major order; `None` is empty.
    pub board: Vec<Option<CellView>>,
    /// Player to move (the winner, once won).
    pub current_player: Player,
    /// Winner, if any.
    pub winner: Option<Player>,
    /// Board indices of the winning line, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Both players, player one first.
    pub players: Vec<PlayerView>,
    /// Lifecycle stage.
    pub stage: Stage,
    /// True once a game has been started.
    pub started: bool,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let board = state
            .board()
            .squares()
            .iter()
            .map(|square| match square {
                Square::Empty => None,
                Square::Occupied(mark) => Some(CellView {
                    owner: mark.owner(),
                    category: mark.symbol().category(),
                    symbol: mark.symbol().glyph().to_string(),
                }),
            })
            .collect();

        let players = Player::ALL
            .iter()
            .map(|player| {
                let record = state.player(*player);
                PlayerView {
                    player: *player,
                    category: record.category(),
                    placements: record
                        .placements()
                        .iter()
                        .map(|p| PlacementView {
                            position: p.position().to_index(),
                            symbol: p.symbol().glyph().to_string(),
                        })
                        .collect(),
                    next_to_vanish: record
                        .placements()
                        .next_to_vanish()
                        .map(|p| p.position().to_index()),
                }
            })
            .collect();

        Self {
            board,
            current_player: state.current_player(),
            winner: state.winner(),
            winning_line: state.winning_line().map(|line| line.indices()),
            players,
            stage: state.stage(),
            started: state.stage().is_started(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, ScriptedDraw};

    #[test]
    fn test_snapshot_of_new_game() {
        let snapshot = GameSnapshot::from(&GameState::new());
        assert_eq!(snapshot.board.len(), 9);
        assert!(snapshot.board.iter().all(Option::is_none));
        assert_eq!(snapshot.stage, Stage::Setup);
        assert!(!snapshot.started);
        assert_eq!(snapshot.players.len(), 2);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut game = Game::with_draw(ScriptedDraw::new(vec![0]));
        game.start_game(Category::Tech, Category::Food).unwrap();
        for cell in [0, 3, 1, 4, 2] {
            game.apply_move(cell);
        }

        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["stage"], "won");
        assert_eq!(json["started"], true);
        assert_eq!(json["winner"], "One");
        assert_eq!(json["winning_line"], serde_json::json!([0, 1, 2]));
        assert_eq!(json["board"][0]["symbol"], "💻");
        assert_eq!(json["board"][3]["category"], "food");
        assert!(json["board"][8].is_null());
        assert_eq!(json["players"][0]["placements"][2]["position"], 2);
        assert_eq!(json["players"][0]["next_to_vanish"], 0);
    }
}
