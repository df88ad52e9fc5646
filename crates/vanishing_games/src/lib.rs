//! Vanishing Games - a terminal front end for vanishing tic-tac-toe.
//!
//! The game rules live in [`vanishing_tictactoe`]. This crate is the
//! collaborator around them:
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Session**: one game plus the running score
//! - **Terminal**: a line-oriented loop that dispatches moves and redraws

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod session;
mod terminal;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use session::{GameSession, Scoreboard, SessionSnapshot};
pub use terminal::{Input, render, run};
