//! Contract-based validation for Santorini.
//!
//! Preconditions decide whether an action may be attempted at all in the
//! current state. Postconditions check that the committed result is sound.

use super::{Action, GameState, TurnPhase};
use crate::action::ActionError;
use crate::invariants::check_state;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ActionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ActionError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameAlreadyEnded` once the game is over.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), ActionError> {
        if state.game_ended() {
            Err(ActionError::GameAlreadyEnded)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the current phase accepts this kind of action.
pub struct PhaseAllows;

impl PhaseAllows {
    /// Fails with `InvalidDecision` for answers outside a decision phase and
    /// with `WrongPhase` for everything else out of place.
    #[instrument(skip(state))]
    pub fn check(action: &Action, state: &GameState) -> Result<(), ActionError> {
        let phase = state.phase();
        let allowed = match action {
            Action::PlaceWorker { .. } => phase == TurnPhase::Placement,
            Action::Move { .. } | Action::BuildBeforeMove { .. } | Action::EndMove { .. } => {
                phase == TurnPhase::Move
            }
            Action::Build { .. } => phase.is_build(),
            Action::EndTurn => matches!(
                phase,
                TurnPhase::ExtraBuildDecision | TurnPhase::DomeDecision
            ),
            Action::Accept | Action::Decline => {
                if !phase.is_decision() {
                    return Err(ActionError::InvalidDecision(phase));
                }
                true
            }
        };

        if allowed {
            Ok(())
        } else {
            Err(ActionError::WrongPhase {
                action: action.name(),
                phase,
            })
        }
    }
}

/// Composite precondition: the game is running and the phase fits.
pub struct LegalAction;

impl LegalAction {
    /// Validates all preconditions for an action.
    #[instrument(skip(state))]
    pub fn check(action: &Action, state: &GameState) -> Result<(), ActionError> {
        GameNotOver::check(state)?;
        PhaseAllows::check(action, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Action Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for every action.
///
/// Postconditions: all [`crate::SantoriniInvariants`] hold, and the god
/// assignment did not change.
pub struct ActionContract;

impl Contract<GameState, Action> for ActionContract {
    fn pre(state: &GameState, action: &Action) -> Result<(), ActionError> {
        LegalAction::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), ActionError> {
        if before.gods() != after.gods() {
            warn!("God assignment changed mid-game");
            return Err(ActionError::InvariantViolation(
                "Postcondition failed: god assignment changed".to_string(),
            ));
        }
        check_state(after).map_err(|descriptions| {
            warn!(%descriptions, "Postcondition failed");
            ActionError::InvariantViolation(format!("Postcondition failed: {descriptions}"))
        })
    }
}
