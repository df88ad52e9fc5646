//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use vanishing_tictactoe::{Category, Player, ResetPolicy};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "vanishing_games.toml";

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seed for symbol draws; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Category player one starts with.
    #[serde(default = "default_player1")]
    player1: Category,

    /// Category player two starts with.
    #[serde(default = "default_player2")]
    player2: Category,

    /// What a reset does to the chosen categories.
    #[serde(default)]
    reset_policy: ResetPolicy,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_player1() -> Category {
    Category::default_for(Player::One)
}

fn default_player2() -> Category {
    Category::default_for(Player::Two)
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            player1: default_player1(),
            player2: default_player2(),
            reset_policy: ResetPolicy::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player1 = %config.player1, player2 = %config.player2, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        player1: Option<Category>,
        player2: Option<Category>,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(category) = player1 {
            self.player1 = category;
        }
        if let Some(category) = player2 {
            self.player2 = category;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
