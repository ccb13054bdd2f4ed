//! The public game facade.
//!
//! [`Game`] owns the authoritative [`GameState`]. Every action runs against a
//! working copy: preconditions, the turn state machine, strategy derivation
//! and postconditions must all pass before the copy replaces the state.

use super::{Action, GameState, GodAssignment, GodPower, Position, SelectionKind, StrategyState};
use crate::action::{ActionError, Rejection};
use crate::contracts::{ActionContract, Contract, GameNotOver};
use crate::invariants::{check_state, check_structure};
use crate::powers::{legal_builds, legal_moves};
use crate::turn;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// A Santorini match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a game with the given powers for players A and B.
    #[instrument]
    pub fn new(a: GodPower, b: GodPower) -> Self {
        info!("New game");
        Self {
            state: GameState::new(GodAssignment::new(a, b)),
        }
    }

    /// Resets to an empty board with a new god assignment.
    ///
    /// This is the only way out of a finished game.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, a: GodPower, b: GodPower) -> GameState {
        info!("Game restarted");
        self.state = GameState::new(GodAssignment::new(a, b));
        self.state.clone()
    }

    /// Resumes a game from a snapshot, typically one read back from JSON.
    ///
    /// Strategy flags are re-derived and the invariants re-checked, so a
    /// tampered snapshot is refused instead of played.
    #[instrument(skip(state))]
    pub fn from_snapshot(mut state: GameState) -> Result<Self, ActionError> {
        let refuse = |descriptions: String| {
            warn!(%descriptions, "Snapshot rejected");
            ActionError::InvariantViolation(descriptions)
        };
        // The board must be sound before any flag is derived from it.
        check_structure(&state).map_err(refuse)?;
        state.strategy = StrategyState::derive(&state);
        check_state(&state).map_err(refuse)?;
        debug!(phase = %state.phase(), "Snapshot restored");
        Ok(Self { state })
    }

    /// Plays `actions` from a fresh game, stopping at the first rejection.
    #[instrument(skip(actions), fields(count = actions.len()))]
    pub fn replay(a: GodPower, b: GodPower, actions: &[Action]) -> Result<Self, Rejection> {
        let mut game = Self::new(a, b);
        for action in actions {
            game.submit_action(*action)?;
        }
        Ok(game)
    }

    /// Validates and applies an action.
    ///
    /// On success returns the new state. On failure the state is untouched
    /// and comes back inside the [`Rejection`].
    #[instrument(skip(self), fields(player = %self.state.current_player(), phase = %self.state.phase()))]
    pub fn submit_action(&mut self, action: Action) -> Result<GameState, Rejection> {
        match self.try_apply(action) {
            Ok(next) => {
                debug!(%action, phase = %next.phase(), "Action accepted");
                self.state = next;
                Ok(self.state.clone())
            }
            Err(error) => {
                warn!(%action, %error, "Action rejected");
                Err(Rejection::new(error, self.state.clone()))
            }
        }
    }

    fn try_apply(&self, action: Action) -> Result<GameState, ActionError> {
        ActionContract::pre(&self.state, &action)?;
        let mut next = self.state.clone();
        turn::apply(&mut next, action)?;
        next.strategy = StrategyState::derive(&next);
        ActionContract::post(&self.state, &next)?;
        Ok(next)
    }

    /// Exactly the targets the next action of `kind` would accept.
    ///
    /// For moves, `worker_index` picks the worker. For builds it must name the
    /// worker acting this turn. Outside the matching phase the set is empty.
    #[instrument(skip(self))]
    pub fn query_selectable_cells(
        &self,
        kind: SelectionKind,
        worker_index: usize,
    ) -> Result<BTreeSet<Position>, ActionError> {
        GameNotOver::check(&self.state)?;
        match kind {
            SelectionKind::Move => legal_moves(&self.state, worker_index),
            SelectionKind::Build => {
                let committed = self.state.turn().worker().map(|w| usize::from(w.index));
                if self.state.phase().is_build()
                    && committed.is_some_and(|index| index != worker_index)
                {
                    return Err(ActionError::NotOwnWorker {
                        index: worker_index,
                    });
                }
                Ok(legal_builds(&self.state))
            }
        }
    }

    /// The current state. Calling this never changes anything.
    pub fn query_game_state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the game and returns its state.
    pub fn into_state(self) -> GameState {
        self.state
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GodPower::Mortal, GodPower::Mortal)
    }
}
