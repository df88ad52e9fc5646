//! Command-line interface for vanishing_games.

use clap::{Parser, Subcommand};
use vanishing_tictactoe::Category;

/// Vanishing Games - tic-tac-toe where your oldest mark disappears
#[derive(Parser, Debug)]
#[command(name = "vanishing_games")]
#[command(about = "Vanishing tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game on this terminal
    Play {
        /// Seed for symbol draws (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Category for player 1
        #[arg(long)]
        player1: Option<Category>,

        /// Category for player 2
        #[arg(long)]
        player2: Option<Category>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// List every category and its symbols
    Catalog,

    /// Print the JSON schema of the session snapshot
    Schema,
}
