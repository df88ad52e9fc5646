//! Vanishing Games - unified CLI.

use anyhow::Result;
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use vanishing_games::{AppConfig, Cli, Command, GameSession, SessionSnapshot};
use vanishing_tictactoe::{Category, Game, GameRng};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            seed,
            player1,
            player2,
            config,
        } => {
            let config =
                AppConfig::load(config.as_deref())?.with_overrides(seed, player1, player2);
            init_tracing(config.log_filter());
            run_play(config)
        }
        Command::Catalog => run_catalog(),
        Command::Schema => run_schema(),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Play on this terminal
#[instrument(skip(config))]
fn run_play(config: AppConfig) -> Result<()> {
    let rng = match config.seed() {
        Some(seed) => GameRng::new(*seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), "Starting terminal session");

    let game = Game::with_draw(rng).with_reset_policy(*config.reset_policy());
    let mut session = GameSession::new(game);
    session.start(*config.player1(), *config.player2())?;

    let stdin = std::io::stdin();
    vanishing_games::run(&mut session, stdin.lock(), std::io::stdout())
}

/// List categories
fn run_catalog() -> Result<()> {
    for category in Category::ALL {
        println!("{:<8} {}", category.to_string(), category.symbols().join(" "));
    }
    Ok(())
}

/// Print the snapshot schema
fn run_schema() -> Result<()> {
    let schema = schemars::schema_for!(SessionSnapshot);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
