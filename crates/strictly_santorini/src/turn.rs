//! The turn state machine.
//!
//! [`apply`] mutates a working copy of the state. The engine only commits the
//! copy when every step succeeded, so an error here never leaks a partial
//! update.

use super::{
    Action, BuildKind, GameState, Player, Position, TurnPhase, TurnProgress, Victory,
    WORKERS_PER_PLAYER, WorkerId,
};
use crate::action::ActionError;
use crate::powers::{
    AfterBuild, Displacement, build_targets, rules_for, validate_build, validate_move,
};
use crate::rules::{check_stalemate, evaluate_move};
use tracing::{debug, info, instrument};

/// Applies `action` to `state`. Phase legality has already been checked.
#[instrument(skip(state), fields(player = %state.current_player, phase = %state.phase))]
pub(crate) fn apply(state: &mut GameState, action: Action) -> Result<(), ActionError> {
    match action {
        Action::PlaceWorker { x, y } => place_worker(state, Position::new(x, y)?),
        Action::Move { worker_index, x, y } => {
            let worker = state.select_worker(worker_index)?;
            move_worker(state, worker, Position::new(x, y)?)
        }
        Action::Build { x, y, build_dome } => build(state, Position::new(x, y)?, build_dome),
        Action::BuildBeforeMove { worker_index } => begin_pre_move_build(state, worker_index),
        Action::EndMove { worker_index } => end_move(state, worker_index),
        Action::EndTurn => {
            end_turn(state);
            Ok(())
        }
        Action::Accept => decide(state, true),
        Action::Decline => decide(state, false),
    }
}

fn place_worker(state: &mut GameState, pos: Position) -> Result<(), ActionError> {
    let player = state.current_player;
    let index = u8::try_from(state.board.worker_count(player))
        .map_err(|_| ActionError::InvariantViolation("worker count overflow".to_string()))?;
    state.board.place_worker(pos, WorkerId::new(player, index))?;

    let placed = state.board.workers().len();
    if placed == 2 * WORKERS_PER_PLAYER {
        info!("Placement complete");
        state.current_player = Player::A;
        begin_move(state);
    } else if placed % WORKERS_PER_PLAYER == 0 {
        state.current_player = player.opponent();
    }
    Ok(())
}

fn move_worker(state: &mut GameState, worker: WorkerId, to: Position) -> Result<(), ActionError> {
    let (plan, step) = validate_move(state, worker, to)?;

    match plan.displacement {
        Displacement::None => {
            state.board.move_worker(worker, to)?;
        }
        Displacement::Swap { worker: other } => {
            state.board.swap_workers(worker, other)?;
        }
        Displacement::Push {
            worker: other,
            to: beyond,
        } => {
            state.board.move_worker(other, beyond)?;
            state.board.move_worker(worker, to)?;
        }
    }
    debug!(%worker, from = %step.from, %to, displacement = ?plan.displacement, "Move applied");

    state.turn.commit(worker, step.from);
    state.turn.moves_made += 1;
    state.turn.moved_up |= step.climbed();

    let power = state.active_god();
    if let Some(victory) = evaluate_move(power, &step) {
        finish(state, worker.player, victory);
        return Ok(());
    }

    match rules_for(power).after_move(state, &step) {
        TurnPhase::Build => enter_build(state),
        phase => state.phase = phase,
    }
    Ok(())
}

fn build(state: &mut GameState, target: Position, dome: bool) -> Result<(), ActionError> {
    let worker = state.turn.worker.ok_or(ActionError::NoWorkerSelected)?;
    let kind = validate_build(state, worker, target, dome)?;
    let height = state.board.build(target, kind)?;
    debug!(%worker, %target, height, "Build applied");

    if state.phase == TurnPhase::BuildBeforeMove {
        state.turn.built_before_move = true;
        state.phase = TurnPhase::Move;
        if let Some(victory) = check_stalemate(state) {
            let winner = state.current_player.opponent();
            finish(state, winner, victory);
        }
        return Ok(());
    }

    state.turn.builds_made += 1;
    if state.turn.first_build.is_none() {
        state.turn.first_build = Some(target);
    }
    if state.turn.extra_build {
        end_turn(state);
        return Ok(());
    }

    match rules_for(state.active_god()).after_build(state) {
        AfterBuild::EndTurn => end_turn(state),
        AfterBuild::Enter(phase) => state.phase = phase,
    }
    Ok(())
}

fn begin_pre_move_build(state: &mut GameState, worker_index: usize) -> Result<(), ActionError> {
    let power = state.active_god();
    if !rules_for(power).can_build_before_move() {
        return Err(ActionError::PowerRestriction {
            power,
            reason: "only Prometheus may build before moving",
        });
    }
    if state.turn.moves_made > 0 || state.turn.built_before_move {
        return Err(ActionError::PowerRestriction {
            power,
            reason: "the pre-move build must come first and only once",
        });
    }

    let worker = state.select_worker(worker_index)?;
    if build_targets(state, worker).is_empty() {
        return Err(ActionError::PowerRestriction {
            power,
            reason: "this worker has nowhere to build",
        });
    }
    let start = state.position_of(worker)?;
    state.turn.commit(worker, start);
    state.phase = TurnPhase::BuildBeforeMove;
    Ok(())
}

fn end_move(state: &mut GameState, worker_index: Option<usize>) -> Result<(), ActionError> {
    let power = state.active_god();
    if !rules_for(power).builds_without_moving() {
        return Err(ActionError::PowerRestriction {
            power,
            reason: "only Hermes may end the move phase early",
        });
    }

    match (state.turn.worker, worker_index) {
        (Some(_), None) => {}
        (_, Some(index)) => {
            let worker = state.select_worker(index)?;
            if state.turn.worker.is_none() && build_targets(state, worker).is_empty() {
                return Err(ActionError::PowerRestriction {
                    power,
                    reason: "this worker has nowhere to build",
                });
            }
            let start = state.position_of(worker)?;
            state.turn.commit(worker, start);
        }
        (None, None) => return Err(ActionError::NoWorkerSelected),
    }
    enter_build(state);
    Ok(())
}

fn decide(state: &mut GameState, accept: bool) -> Result<(), ActionError> {
    match (state.phase, accept) {
        (TurnPhase::ExtraMoveDecision, true) => {
            state.turn.extra_move = true;
            state.phase = TurnPhase::Move;
        }
        (TurnPhase::ExtraMoveDecision, false) => enter_build(state),
        (TurnPhase::ExtraBuildDecision, true) => {
            state.turn.extra_build = true;
            state.phase = TurnPhase::Build;
        }
        (TurnPhase::DomeDecision, true) => {
            let cell = state.turn.first_build.ok_or(ActionError::InvariantViolation(
                "dome offered without a build".to_string(),
            ))?;
            state.board.build(cell, BuildKind::Dome)?;
            debug!(%cell, "Dome placed");
            end_turn(state);
        }
        (TurnPhase::ExtraBuildDecision | TurnPhase::DomeDecision, false) => end_turn(state),
        (phase, _) => return Err(ActionError::InvalidDecision(phase)),
    }
    Ok(())
}

/// Moves to the mandatory build. A worker with nowhere to build loses.
fn enter_build(state: &mut GameState) {
    state.phase = TurnPhase::Build;
    let stuck = match state.turn.worker {
        Some(worker) => build_targets(state, worker).is_empty(),
        None => true,
    };
    if stuck {
        let winner = state.current_player.opponent();
        finish(state, winner, Victory::OpponentCannotBuild);
    }
}

/// Hands the turn to the opponent.
fn end_turn(state: &mut GameState) {
    let rules = rules_for(state.active_god());
    let finished = std::mem::take(&mut state.turn);
    let next = state.current_player.opponent();

    state.move_up_blocked_for = rules.restricts_opponent(&finished).then_some(next);
    if state.move_up_blocked_for.is_some() {
        debug!(blocked = %next, "Opponent may not move up next turn");
    }
    state.current_player = next;
    debug!(next = %next, "Turn ended");
    begin_move(state);
}

/// Starts a fresh move phase, ending the game if the player cannot act.
fn begin_move(state: &mut GameState) {
    state.turn = TurnProgress::default();
    state.phase = TurnPhase::Move;
    if let Some(victory) = check_stalemate(state) {
        let winner = state.current_player.opponent();
        finish(state, winner, victory);
    }
}

fn finish(state: &mut GameState, winner: Player, victory: Victory) {
    info!(%winner, %victory, "Game over");
    state.game_ended = true;
    state.winner = Some(winner);
    state.victory = Some(victory);
    state.phase = TurnPhase::GameOver;
}
