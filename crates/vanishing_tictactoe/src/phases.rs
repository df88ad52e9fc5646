//! Game lifecycle stages.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where a game is in its lifecycle.
///
/// `Setup` → `InProgress` → `Won`. There is no draw stage: the vanishing
/// rule keeps the board from ever filling up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Categories are being chosen; no moves accepted.
    #[default]
    Setup,
    /// Moves are accepted.
    InProgress,
    /// A player completed a line.
    Won,
}

impl Stage {
    /// Returns true once a game has been started (in progress or won).
    pub fn is_started(self) -> bool {
        !matches!(self, Stage::Setup)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Setup => write!(f, "Setup"),
            Stage::InProgress => write!(f, "In progress"),
            Stage::Won => write!(f, "Won"),
        }
    }
}
