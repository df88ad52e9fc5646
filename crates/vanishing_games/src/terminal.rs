//! Line-oriented terminal front end.
//!
//! Reads one command per line, dispatches it to the session and redraws the
//! board. Generic over reader and writer so it runs against in-memory
//! buffers in tests.

use crate::session::GameSession;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};
use vanishing_tictactoe::{Category, MoveOutcome, Player, Position, Stage, SymbolDraw};

const HELP: &str = "\
Commands:
  0-8 or a label   place a mark (e.g. 4 or center)
  start            start with the chosen categories
  p1 <category>    choose player 1's category (setup only)
  p2 <category>    choose player 2's category (setup only)
  r                rematch with the same categories
  reset            back to setup, scores cleared
  json             print the session snapshot
  help             show this text
  q                quit";

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Move(usize),
    /// Start with the bound categories.
    Start,
    /// Choose a category.
    Choose(Player, String),
    /// Rematch.
    Rematch,
    /// Reset to setup.
    Reset,
    /// Print the snapshot as JSON.
    Json,
    /// Print help.
    Help,
    /// Leave the loop.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses one line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default().to_lowercase();
        let rest = words.collect::<Vec<_>>().join(" ");
        match head.as_str() {
            "start" => Input::Start,
            "r" | "rematch" => Input::Rematch,
            "reset" => Input::Reset,
            "json" => Input::Json,
            "help" | "?" => Input::Help,
            "q" | "quit" | "exit" => Input::Quit,
            "p1" => Input::Choose(Player::One, rest),
            "p2" => Input::Choose(Player::Two, rest),
            _ => match Position::from_label_or_number(line) {
                Some(pos) => Input::Move(pos.to_index()),
                None => match line.parse::<usize>() {
                    Ok(cell) => Input::Move(cell),
                    Err(_) => Input::Unknown(line.to_string()),
                },
            },
        }
    }
}

/// Runs the loop until `q` or end of input.
#[instrument(skip_all)]
pub fn run<D, R, W>(session: &mut GameSession<D>, input: R, mut output: W) -> anyhow::Result<()>
where
    D: SymbolDraw,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{HELP}\n")?;
    render(session, &mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = Input::parse(&line);
        debug!(?command, "Input");

        match command {
            Input::Quit => break,
            Input::Help => writeln!(output, "{HELP}")?,
            Input::Json => {
                writeln!(output, "{}", serde_json::to_string_pretty(&session.snapshot())?)?;
                continue;
            }
            Input::Start => report_error(session.start_with_bound(), &mut output)?,
            Input::Rematch => session.rematch(),
            Input::Reset => session.reset(),
            Input::Choose(player, name) => {
                let chosen = Category::from_name(&name)
                    .and_then(|category| session.set_category(player, category));
                report_error(chosen, &mut output)?;
            }
            Input::Move(cell) => match session.play(cell) {
                MoveOutcome::Ignored(rejection) => writeln!(output, "{rejection}")?,
                MoveOutcome::Placed {
                    vanished: Some(old),
                    player,
                    ..
                }
                | MoveOutcome::Won {
                    vanished: Some(old),
                    player,
                    ..
                } => writeln!(output, "{player}'s {old} vanished")?,
                _ => {}
            },
            Input::Unknown(text) => writeln!(output, "Unknown command: {text} (try help)")?,
        }
        render(session, &mut output)?;
    }

    Ok(())
}

fn report_error<E: std::fmt::Display>(
    result: Result<(), E>,
    output: &mut impl Write,
) -> std::io::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) => writeln!(output, "{e}"),
    }
}

/// Draws the board, status line and score.
pub fn render<D: SymbolDraw>(session: &GameSession<D>, output: &mut impl Write) -> std::io::Result<()> {
    let game = session.game();
    writeln!(output, "\n{}\n", game.board().display())?;

    for player in Player::ALL {
        let vanish = game
            .next_to_vanish(player)
            .map(|pos| format!(", next to vanish: {}", pos.to_index()))
            .unwrap_or_default();
        writeln!(
            output,
            "{player} [{}] wins: {}{vanish}",
            game.category(player),
            session.scores().wins(player),
        )?;
    }

    match game.stage() {
        Stage::Setup => writeln!(output, "Setup: choose categories, then type start")?,
        Stage::InProgress => writeln!(output, "{} to move", game.current_player())?,
        Stage::Won => {
            let line = game
                .winning_line()
                .map(|line| line.indices().map(|i| i.to_string()).join("-"))
                .unwrap_or_default();
            let winner = game.winner().unwrap_or(game.current_player());
            writeln!(output, "{winner} wins on {line}! Type r for a rematch or reset")?
        }
    }
    Ok(())
}
