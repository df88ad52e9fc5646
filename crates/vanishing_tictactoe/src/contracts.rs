//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::Rejection;
use super::invariants::{InvariantSet, InvariantViolation, VanishingInvariants};
use super::phases::Stage;
use super::{GameState, Position, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: A game is running and nobody has won yet.
pub struct GameIsRunning;

impl GameIsRunning {
    /// Rejects moves outside the in-progress stage.
    pub fn check(state: &GameState) -> Result<(), Rejection> {
        match state.stage() {
            Stage::Setup => Err(Rejection::NotStarted),
            Stage::Won => Err(Rejection::GameOver),
            Stage::InProgress => Ok(()),
        }
    }
}

/// Precondition: The target square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto occupied squares.
    pub fn check(position: Position, state: &GameState) -> Result<(), Rejection> {
        if state.board().is_empty(position) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(position))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is in progress
/// - Square must be empty
///
/// Postconditions:
/// - All [`VanishingInvariants`] hold
/// - Only the new square and the vanished square changed
/// - The turn passed, unless the move won
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, position: &Position) -> Result<(), Rejection> {
        GameIsRunning::check(state)?;
        SquareIsEmpty::check(*position, state)
    }

    #[instrument(skip_all)]
    fn post(before: &GameState, after: &GameState) -> Result<(), InvariantViolation> {
        VanishingInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after move");
            InvariantViolation::new(format!("Postcondition failed: {}", descriptions))
        })?;

        let mover = before.current_player();
        let mut placed = 0;
        let mut cleared = Vec::new();
        for pos in Position::ALL {
            match (before.board().get(pos), after.board().get(pos)) {
                (Square::Empty, Square::Occupied(mark)) if mark.owner() == mover => placed += 1,
                (Square::Occupied(mark), Square::Empty) if mark.owner() == mover => {
                    cleared.push(pos)
                }
                (old, new) if old == new => {}
                _ => {
                    warn!(%pos, "Square changed unexpectedly");
                    return Err(InvariantViolation::new(format!(
                        "Square {pos} changed unexpectedly"
                    )));
                }
            }
        }

        let expected_vanish = before
            .player(mover)
            .placements()
            .next_to_vanish()
            .map(|p| p.position());
        if placed != 1 || cleared.as_slice() != expected_vanish.as_slice() {
            warn!(placed, ?cleared, ?expected_vanish, "Placement diff mismatch");
            return Err(InvariantViolation::new(
                "Move must place one mark and clear only the mover's oldest",
            ));
        }

        let passed = after.current_player() != mover;
        if passed == after.winner().is_some() {
            warn!(passed, winner = ?after.winner(), "Turn order violated");
            return Err(InvariantViolation::new(
                "Turn passes after every move except a winning one",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Game, Mark, Player, ScriptedDraw};

    fn started() -> Game<ScriptedDraw> {
        let mut game = Game::with_draw(ScriptedDraw::new(vec![0]));
        game.start_game(Category::Tech, Category::Animals)
            .expect("distinct categories");
        game
    }

    #[test]
    fn test_precondition_not_started() {
        let state = GameState::new();
        assert_eq!(
            MoveContract::pre(&state, &Position::Center),
            Err(Rejection::NotStarted)
        );
    }

    #[test]
    fn test_precondition_empty_square() {
        let game = started();
        assert!(MoveContract::pre(game.state(), &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = started();
        game.apply_move(4);
        assert_eq!(
            MoveContract::pre(game.state(), &Position::Center),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut game = started();
        let before = game.state().clone();
        game.apply_move(4);
        assert!(MoveContract::post(&before, game.state()).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_vanish() {
        let mut game = started();
        for cell in [0, 3, 1, 4, 8, 6] {
            game.apply_move(cell);
        }
        let before = game.state().clone();
        let outcome = game.apply_move(5);
        assert_eq!(outcome.vanished().map(|p| p.position()), Some(Position::TopLeft));
        assert!(MoveContract::post(&before, game.state()).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut game = started();
        let before = game.state().clone();
        game.apply_move(4);

        let mut after = game.state().clone();
        let symbol = Category::Animals.symbol(0).expect("animals has symbols");
        after
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Mark::new(Player::Two, symbol)));

        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_missing_turn_change() {
        let mut game = started();
        let before = game.state().clone();
        game.apply_move(4);
        let mut after = game.state().clone();
        after.pass_turn();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
