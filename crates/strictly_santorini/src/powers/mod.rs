//! God powers as capability objects.
//!
//! Every [`GodPower`] maps to one [`GodRules`] implementation. The turn state
//! machine never matches on the power itself: it asks the active rules how a
//! move or build is modified and which phase comes next.
//!
//! The free functions at the bottom are the resolver queries. They are pure
//! functions of a [`GameState`] and feed [`crate::StrategyState`].

mod apollo;
mod artemis;
mod athena;
mod atlas;
mod demeter;
mod hephaestus;
mod hermes;
mod minotaur;
mod mortal;
mod pan;
mod prometheus;

use super::{
    BuildKind, GameState, GodPower, Position, TurnPhase, TurnProgress, Victory, WorkerId,
};
use crate::action::ActionError;
use crate::geometry::{check_build_target, check_move_target, neighbors8};
use crate::rules::MoveStep;
use std::collections::BTreeSet;
use tracing::{instrument, trace};

/// What happens to an opponent worker standing on the move target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Displacement {
    /// The target was empty.
    None,
    /// Apollo: the opponent takes the mover's vacated cell.
    Swap {
        /// The displaced worker.
        worker: WorkerId,
    },
    /// Minotaur: the opponent is pushed one cell further on.
    Push {
        /// The displaced worker.
        worker: WorkerId,
        /// Where it is pushed to.
        to: Position,
    },
}

/// A validated move, ready to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    /// The moving worker.
    pub worker: WorkerId,
    /// Target cell.
    pub to: Position,
    /// Side effect on an opponent worker.
    pub displacement: Displacement,
}

/// What the turn does after a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterBuild {
    /// The turn is over.
    EndTurn,
    /// Stay in the turn, in this phase.
    Enter(TurnPhase),
}

/// A move under consideration.
#[derive(Debug, Clone, Copy)]
pub struct MoveRequest<'a> {
    /// State before the move.
    pub state: &'a GameState,
    /// The moving worker.
    pub worker: WorkerId,
    /// Its current cell.
    pub from: Position,
    /// Requested target, already known to be adjacent.
    pub to: Position,
}

/// A build under consideration.
#[derive(Debug, Clone, Copy)]
pub struct BuildRequest<'a> {
    /// State before the build.
    pub state: &'a GameState,
    /// Cell of the building worker.
    pub worker: Position,
    /// Requested target, already known to be adjacent, free and undomed.
    pub target: Position,
    /// Whether a dome was requested.
    pub dome: bool,
}

/// The rules a god power changes.
///
/// Default methods implement the unmodified game, so a power only overrides
/// what its card changes.
pub trait GodRules: Send + Sync {
    /// The power these rules belong to.
    fn power(&self) -> GodPower;

    /// Validates a move and decides its side effects.
    fn check_move(&self, request: &MoveRequest<'_>) -> Result<MovePlan, ActionError> {
        standard_move(request)
    }

    /// Validates a build and decides what it adds.
    fn check_build(&self, request: &BuildRequest<'_>) -> Result<BuildKind, ActionError> {
        standard_build(self.power(), request)
    }

    /// Phase after a move that did not win. `state` already reflects the move.
    fn after_move(&self, _state: &GameState, _step: &MoveStep) -> TurnPhase {
        TurnPhase::Build
    }

    /// What follows the first build after moving. `state` already reflects it.
    fn after_build(&self, _state: &GameState) -> AfterBuild {
        AfterBuild::EndTurn
    }

    /// Additional win condition checked after each move.
    fn victory(&self, _step: &MoveStep) -> Option<Victory> {
        None
    }

    /// True if the player may build without moving first.
    fn builds_without_moving(&self) -> bool {
        false
    }

    /// True if the finished turn stops the opponent moving up next turn.
    fn restricts_opponent(&self, _turn: &TurnProgress) -> bool {
        false
    }

    /// True if the player may build before moving.
    fn can_build_before_move(&self) -> bool {
        false
    }
}

/// The unmodified move rule.
pub(crate) fn standard_move(request: &MoveRequest<'_>) -> Result<MovePlan, ActionError> {
    check_move_target(request.from, request.to, request.state.board())?;
    Ok(MovePlan {
        worker: request.worker,
        to: request.to,
        displacement: Displacement::None,
    })
}

/// The unmodified build rule: one block, no domes on demand.
pub(crate) fn standard_build(
    power: GodPower,
    request: &BuildRequest<'_>,
) -> Result<BuildKind, ActionError> {
    if request.dome {
        return Err(ActionError::PowerRestriction {
            power,
            reason: "only Atlas may build a dome at any level",
        });
    }
    Ok(BuildKind::Block)
}

/// Returns the rules for `power`.
pub fn rules_for(power: GodPower) -> &'static dyn GodRules {
    match power {
        GodPower::Apollo => &apollo::Apollo,
        GodPower::Artemis => &artemis::Artemis,
        GodPower::Athena => &athena::Athena,
        GodPower::Atlas => &atlas::Atlas,
        GodPower::Demeter => &demeter::Demeter,
        GodPower::Hephaestus => &hephaestus::Hephaestus,
        GodPower::Hermes => &hermes::Hermes,
        GodPower::Minotaur => &minotaur::Minotaur,
        GodPower::Pan => &pan::Pan,
        GodPower::Prometheus => &prometheus::Prometheus,
        GodPower::Mortal => &mortal::Mortal,
    }
}

/// Validates a move of `worker` to `to` for the player to act.
///
/// Phase and worker selection are the caller's concern. Adjacency, the
/// power-modified rule, Athena's block and Prometheus's no-climb rule are
/// checked here.
#[instrument(skip(state))]
pub(crate) fn validate_move(
    state: &GameState,
    worker: WorkerId,
    to: Position,
) -> Result<(MovePlan, MoveStep), ActionError> {
    let rules = rules_for(state.active_god());
    let from = state.position_of(worker)?;
    if !from.is_adjacent(to) {
        return Err(ActionError::NotAdjacent { from, to });
    }

    let plan = rules.check_move(&MoveRequest {
        state,
        worker,
        from,
        to,
    })?;

    let from_height = state.board().height_at(from);
    let to_height = state.board().height_at(to);
    if to_height > from_height {
        if state.move_up_blocked_for() == Some(worker.player) {
            return Err(ActionError::HeightViolation {
                from: from_height,
                to: to_height,
            });
        }
        if state.turn().built_before_move() {
            return Err(ActionError::PowerRestriction {
                power: rules.power(),
                reason: "cannot move up after building first",
            });
        }
    }

    let step = MoveStep::new(worker, from, to, from_height, to_height);
    Ok((plan, step))
}

/// Validates a build by `worker` on `target`.
#[instrument(skip(state))]
pub(crate) fn validate_build(
    state: &GameState,
    worker: WorkerId,
    target: Position,
    dome: bool,
) -> Result<BuildKind, ActionError> {
    let from = state.position_of(worker)?;
    check_build_target(from, target, state.board())?;
    rules_for(state.active_god()).check_build(&BuildRequest {
        state,
        worker: from,
        target,
        dome,
    })
}

/// Every cell `worker` could move to, ignoring the phase.
pub(crate) fn move_targets(state: &GameState, worker: WorkerId) -> BTreeSet<Position> {
    let Ok(from) = state.position_of(worker) else {
        return BTreeSet::new();
    };
    neighbors8(from)
        .filter(|to| validate_move(state, worker, *to).is_ok())
        .collect()
}

/// Every cell `worker` could build on, ignoring the phase.
pub(crate) fn build_targets(state: &GameState, worker: WorkerId) -> BTreeSet<Position> {
    let Ok(from) = state.position_of(worker) else {
        return BTreeSet::new();
    };
    neighbors8(from)
        .filter(|target| validate_build(state, worker, *target, false).is_ok())
        .collect()
}

/// Artemis: a second move is on offer (or pending a decision).
pub fn can_extra_move(state: &GameState) -> bool {
    if state.active_god() != GodPower::Artemis
        || !matches!(state.phase(), TurnPhase::Move | TurnPhase::ExtraMoveDecision)
    {
        return false;
    }
    let turn = state.turn();
    match turn.worker() {
        Some(worker) if turn.moves_made() == 1 && !turn.extra_move() => {
            !move_targets(state, worker).is_empty()
        }
        _ => false,
    }
}

/// Demeter or Hephaestus: a second build is on offer (or pending a decision).
pub fn can_extra_build(state: &GameState) -> bool {
    if !matches!(state.active_god(), GodPower::Demeter | GodPower::Hephaestus)
        || !matches!(
            state.phase(),
            TurnPhase::Build | TurnPhase::ExtraBuildDecision
        )
    {
        return false;
    }
    let turn = state.turn();
    let Some(worker) = turn.worker() else {
        return false;
    };
    if turn.builds_made() != 1 || turn.extra_build() {
        return false;
    }

    let mut probe = state.clone();
    probe.turn.extra_build = true;
    let eligible = !build_targets(&probe, worker).is_empty();
    trace!(eligible, "Extra build probe");
    eligible
}

/// Atlas: a dome may be placed now.
pub fn can_build_dome(state: &GameState) -> bool {
    state.active_god() == GodPower::Atlas
        && matches!(state.phase(), TurnPhase::Build | TurnPhase::DomeDecision)
}

/// Prometheus: building before moving is still possible this turn.
pub fn can_build_before_move(state: &GameState) -> bool {
    let turn = state.turn();
    if !rules_for(state.active_god()).can_build_before_move()
        || state.phase() != TurnPhase::Move
        || turn.moves_made() > 0
        || turn.built_before_move()
    {
        return false;
    }
    state
        .board()
        .workers_of(state.current_player())
        .any(|w| !build_targets(state, w.id()).is_empty())
}

/// Hermes: the move sequence may be ended in favour of building.
pub fn can_end_move(state: &GameState) -> bool {
    rules_for(state.active_god()).builds_without_moving() && state.phase() == TurnPhase::Move
}

/// Athena: the player to act may not move up this turn.
pub fn move_up_blocked(state: &GameState) -> bool {
    state.move_up_blocked_for() == Some(state.current_player())
}

/// Cells the indexed worker of the player to act may move to now.
///
/// Empty outside the `Move` phase.
pub fn legal_moves(
    state: &GameState,
    worker_index: usize,
) -> Result<BTreeSet<Position>, ActionError> {
    if state.game_ended() {
        return Err(ActionError::GameAlreadyEnded);
    }
    if state.phase() != TurnPhase::Move {
        return Ok(BTreeSet::new());
    }
    let worker = state.select_worker(worker_index)?;
    Ok(move_targets(state, worker))
}

/// Cells the committed worker may build on now.
///
/// Empty outside the build phases.
pub fn legal_builds(state: &GameState) -> BTreeSet<Position> {
    match state.turn().worker() {
        Some(worker) if !state.game_ended() && state.phase().is_build() => {
            build_targets(state, worker)
        }
        _ => BTreeSet::new(),
    }
}
