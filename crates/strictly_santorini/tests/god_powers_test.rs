//! One behavioural test (or a few) per god power.

mod common;

use common::*;
use strictly_santorini::{
    Action, ActionError, GodPower, Player, SelectionKind, TurnPhase, WorkerId,
};

// ─────────────────────────────────────────────────────────────
//  Apollo
// ─────────────────────────────────────────────────────────────

#[test]
fn test_apollo_swaps_with_opponent() {
    let mut game = placed(
        GodPower::Apollo,
        GodPower::Mortal,
        [(1, 1), (4, 4), (1, 2), (4, 0)],
    );

    let state = game.submit_action(mv(0, 1, 2)).unwrap();
    assert_eq!(
        state.board().occupant_at(pos(1, 2)),
        Some(WorkerId::new(Player::A, 0))
    );
    assert_eq!(
        state.board().occupant_at(pos(1, 1)),
        Some(WorkerId::new(Player::B, 0))
    );
    assert_eq!(state.phase(), TurnPhase::Build);
}

#[test]
fn test_apollo_cannot_swap_with_own_worker() {
    let mut game = placed(
        GodPower::Apollo,
        GodPower::Mortal,
        [(1, 1), (1, 2), (4, 4), (4, 0)],
    );

    let rejection = game.submit_action(mv(0, 1, 2)).unwrap_err();
    assert_eq!(rejection.error, ActionError::CellOccupied(pos(1, 2)));
}

#[test]
fn test_mortal_cannot_enter_opponent_cell() {
    let mut game = placed(
        GodPower::Mortal,
        GodPower::Mortal,
        [(1, 1), (4, 4), (1, 2), (4, 0)],
    );

    let targets = game
        .query_selectable_cells(SelectionKind::Move, 0)
        .unwrap();
    assert!(!targets.contains(&pos(1, 2)));
    let rejection = game.submit_action(mv(0, 1, 2)).unwrap_err();
    assert_eq!(rejection.error, ActionError::CellOccupied(pos(1, 2)));
}

// ─────────────────────────────────────────────────────────────
//  Artemis
// ─────────────────────────────────────────────────────────────

#[test]
fn test_artemis_second_move_not_back_to_start() {
    let mut game = placed(
        GodPower::Artemis,
        GodPower::Mortal,
        [(0, 0), (4, 4), (0, 4), (4, 0)],
    );

    let state = game.submit_action(mv(0, 1, 1)).unwrap();
    assert_eq!(state.phase(), TurnPhase::ExtraMoveDecision);
    assert!(state.strategy().can_extra_move());

    game.submit_action(Action::Accept).unwrap();
    let targets = game
        .query_selectable_cells(SelectionKind::Move, 0)
        .unwrap();
    assert!(!targets.contains(&pos(0, 0)));
    assert!(targets.contains(&pos(2, 2)));

    let rejection = game.submit_action(mv(0, 0, 0)).unwrap_err();
    assert!(matches!(
        rejection.error,
        ActionError::PowerRestriction {
            power: GodPower::Artemis,
            ..
        }
    ));

    let state = game.submit_action(mv(0, 2, 2)).unwrap();
    assert_eq!(state.phase(), TurnPhase::Build);
}

#[test]
fn test_artemis_decline_goes_to_build() {
    let mut game = placed(
        GodPower::Artemis,
        GodPower::Mortal,
        [(0, 0), (4, 4), (0, 4), (4, 0)],
    );

    game.submit_action(mv(0, 1, 1)).unwrap();
    let state = game.submit_action(Action::Decline).unwrap();
    assert_eq!(state.phase(), TurnPhase::Build);
    assert!(!state.strategy().can_extra_move());
}

// ─────────────────────────────────────────────────────────────
//  Athena
// ─────────────────────────────────────────────────────────────

#[test]
fn test_athena_climb_blocks_opponent_next_turn() {
    let mut game = with_heights(
        GodPower::Athena,
        GodPower::Mortal,
        [(0, 0), (2, 0), (4, 4), (4, 0)],
        &[((1, 1), 1), ((4, 3), 1)],
    );

    submit_all(&mut game, &[mv(0, 1, 1), build(2, 2)]);
    let state = game.query_game_state();
    assert_eq!(state.current_player(), Player::B);
    assert_eq!(state.move_up_blocked_for(), Some(Player::B));
    assert!(state.strategy().move_up_blocked());
    assert!(state.strategy().must_not_move_up());

    let rejection = game.submit_action(mv(0, 4, 3)).unwrap_err();
    assert_eq!(
        rejection.error,
        ActionError::HeightViolation { from: 0, to: 1 }
    );

    submit_all(&mut game, &[mv(0, 3, 4), build(3, 3)]);
    assert_eq!(game.query_game_state().move_up_blocked_for(), None);
}

#[test]
fn test_athena_level_move_sets_no_block() {
    let mut game = placed(
        GodPower::Athena,
        GodPower::Mortal,
        [(0, 0), (2, 0), (4, 4), (4, 0)],
    );

    submit_all(&mut game, &[mv(0, 1, 1), build(2, 2)]);
    assert_eq!(game.query_game_state().move_up_blocked_for(), None);
}

#[test]
fn test_forced_displacement_is_not_a_climb() {
    let mut game = with_heights(
        GodPower::Athena,
        GodPower::Minotaur,
        [(0, 0), (4, 4), (1, 2), (4, 0)],
        &[((1, 1), 1), ((1, 2), 1), ((1, 0), 3)],
    );

    submit_all(&mut game, &[mv(0, 1, 1), build(2, 2)]);
    assert_eq!(game.query_game_state().move_up_blocked_for(), Some(Player::B));

    // A level push that forces Athena's worker up onto level 3.
    let state = game.submit_action(mv(0, 1, 1)).unwrap();
    assert_eq!(
        state.board().occupant_at(pos(1, 0)),
        Some(WorkerId::new(Player::A, 0))
    );
    assert_eq!(
        state.board().occupant_at(pos(1, 1)),
        Some(WorkerId::new(Player::B, 0))
    );
    assert!(!state.game_ended());
    assert_eq!(state.phase(), TurnPhase::Build);
}

#[test]
fn test_athena_block_stops_minotaur_climbing_push() {
    let mut game = with_heights(
        GodPower::Athena,
        GodPower::Minotaur,
        [(0, 0), (4, 4), (2, 2), (4, 0)],
        &[((1, 1), 1)],
    );

    submit_all(&mut game, &[mv(0, 1, 1), build(0, 0)]);

    let rejection = game.submit_action(mv(0, 1, 1)).unwrap_err();
    assert_eq!(rejection.error, ActionError::HeightViolation { from: 0, to: 1 });

    let state = game.submit_action(mv(0, 2, 1)).unwrap();
    assert_eq!(state.phase(), TurnPhase::Build);
}

// ─────────────────────────────────────────────────────────────
//  Atlas
// ─────────────────────────────────────────────────────────────

#[test]
fn test_atlas_builds_dome_at_ground_level() {
    let mut game = placed(
        GodPower::Atlas,
        GodPower::Mortal,
        [(0, 0), (4, 4), (0, 4), (4, 0)],
    );

    game.submit_action(mv(0, 1, 1)).unwrap();
    assert!(game.query_game_state().strategy().can_build_dome());
    let state = game.submit_action(dome(2, 2)).unwrap();
    assert!(state.board().cell(pos(2, 2)).is_dome());
    assert_eq!(state.current_player(), Player::B);
}

#[test]
fn test_atlas_dome_decision_caps_block() {
    let mut game = placed(
        GodPower::Atlas,
        GodPower::Mortal,
        [(0, 0), (4, 4), (0, 4), (4, 0)],
    );

    game.submit_action(mv(0, 1, 1)).unwrap();
    let state = game.submit_action(build(2, 2)).unwrap();
    assert_eq!(state.phase(), TurnPhase::DomeDecision);
    assert_eq!(state.board().height_at(pos(2, 2)), 1);

    let state = game.submit_action(Action::Accept).unwrap();
    assert!(state.board().cell(pos(2, 2)).is_dome());
    assert_eq!(state.current_player(), Player::B);
}

#[test]
fn test_atlas_may_leave_block_without_dome() {
    for answer in [Action::Decline, Action::EndTurn] {
        let mut game = placed(
            GodPower::Atlas,
            GodPower::Mortal,
            [(0, 0), (4, 4), (0, 4), (4, 0)],
        );
        submit_all(&mut game, &[mv(0, 1, 1), build(2, 2)]);
        assert_eq!(game.query_game_state().phase(), TurnPhase::DomeDecision);

        let state = game.submit_action(answer).unwrap();
        assert_eq!(state.board().height_at(pos(2, 2)), 1);
        assert!(!state.board().cell(pos(2, 2)).is_dome());
        assert_eq!(state.current_player(), Player::B);
        assert_eq!(state.phase(), TurnPhase::Move);
    }
}

#[test]
fn test_only_atlas_builds_domes_on_demand() {
    let mut game = placed(
        GodPower::Demeter,
        GodPower::Mortal,
        [(0, 0), (4, 4), (0, 4), (4, 0)],
    );

    game.submit_action(mv(0, 1, 1)).unwrap();
    let rejection = game.submit_action(dome(2, 2)).unwrap_err();
    assert!(matches!(
        rejection.error,
        ActionError::PowerRestriction {
            power: GodPower::Demeter,
            ..
        }
    ));
}

// ─────────────────────────────────────────────────────────────
//  Demeter
// ─────────────────────────────────────────────────────────────

#[test]
fn test_demeter_second_build_elsewhere() {
    let mut game = placed(
        GodPower::Demeter,
        GodPower::Mortal,
        [(0, 0), (4, 4), (0, 4), (4, 0)],
    );

    game.submit_action(mv(0, 1, 1)).unwrap();
    let state = game.submit_action(build(2, 2)).unwrap();
    assert_eq!(state.phase(), TurnPhase::ExtraBuildDecision);

    game.submit_action(Action::Accept).unwrap();
    let builds = game
        .query_selectable_cells(SelectionKind::Build, 0)
        .unwrap();
    assert!(!builds.contains(&pos(2, 2)));

    let rejection = game.submit_action(build(2, 2)).unwrap_err();
    assert!(matches!(
        rejection.error,
        ActionError::PowerRestriction {
            power: GodPower::Demeter,
            ..
        }
    ));

    let state = game.submit_action(build(2, 1)).unwrap();
    assert_eq!(state.board().height_at(pos(2, 1)), 1);
    assert_eq!(state.current_player(), Player::B);
}

#[test]
fn test_demeter_end_turn_skips_second_build() {
    let mut game = placed(
        GodPower::Demeter,
        GodPower::Mortal,
        [(0, 0), (4, 4), (0, 4), (4, 0)],
    );

    submit_all(&mut game, &[mv(0, 1, 1), build(2, 2)]);
    let state = game.submit_action(Action::EndTurn).unwrap();
    assert_eq!(state.current_player(), Player::B);
    assert_eq!(state.phase(), TurnPhase::Move);
}

// ─────────────────────────────────────────────────────────────
//  Hephaestus
// ─────────────────────────────────────────────────────────────

#[test]
fn test_hephaestus_not_offered_when_block_reaches_three() {
    let mut game = with_heights(
        GodPower::Hephaestus,
        GodPower::Mortal,
        [(0, 0), (4, 4), (0, 4), (4, 0)],
        &[((2, 2), 2)],
    );

    game.submit_action(mv(0, 1, 1)).unwrap();
    let state = game.submit_action(build(2, 2)).unwrap();
    assert_eq!(state.board().height_at(pos(2, 2)), 3);
    assert_eq!(state.current_player(), Player::B);
}

// ─────────────────────────────────────────────────────────────
//  Hermes
// ─────────────────────────────────────────────────────────────

#[test]
fn test_hermes_keeps_moving_on_level_ground() {
    let mut game = with_heights(
        GodPower::Hermes,
        GodPower::Mortal,
        [(0, 0), (4, 4), (0, 4), (4, 0)],
        &[((2, 2), 1)],
    );

    let state = game.submit_action(mv(0, 1, 1)).unwrap();
    assert_eq!(state.phase(), TurnPhase::Move);
    assert!(state.strategy().can_end_move());

    let state = game.submit_action(mv(0, 1, 2)).unwrap();
    assert_eq!(state.phase(), TurnPhase::Move);

    let rejection = game.submit_action(mv(0, 2, 2)).unwrap_err();
    assert!(matches!(
        rejection.error,
        ActionError::PowerRestriction {
            power: GodPower::Hermes,
            ..
        }
    ));
    let rejection = game.submit_action(mv(1, 3, 3)).unwrap_err();
    assert_eq!(rejection.error, ActionError::NotOwnWorker { index: 1 });

    let state = game
        .submit_action(Action::EndMove { worker_index: None })
        .unwrap();
    assert_eq!(state.phase(), TurnPhase::Build);
    game.submit_action(build(1, 3)).unwrap();
    assert_eq!(game.query_game_state().current_player(), Player::B);
}

#[test]
fn test_hermes_may_build_without_moving() {
    let mut game = placed(
        GodPower::Hermes,
        GodPower::Mortal,
        [(0, 0), (4, 4), (0, 4), (4, 0)],
    );

    let rejection = game
        .submit_action(Action::EndMove { worker_index: None })
        .unwrap_err();
    assert_eq!(rejection.error, ActionError::NoWorkerSelected);

    game.submit_action(Action::EndMove {
        worker_index: Some(1),
    })
    .unwrap();
    let state = game.submit_action(build(3, 3)).unwrap();
    assert_eq!(state.board().height_at(pos(3, 3)), 1);
    assert_eq!(
        state.board().occupant_at(pos(4, 4)),
        Some(WorkerId::new(Player::A, 1))
    );
}

#[test]
fn test_hermes_cannot_end_move_with_walled_in_worker() {
    let mut game = with_heights(
        GodPower::Hermes,
        GodPower::Mortal,
        [(0, 0), (4, 4), (0, 4), (4, 0)],
        &[((0, 1), 4), ((1, 0), 4), ((1, 1), 4)],
    );
    let before = game.query_game_state().clone();

    let rejection = game
        .submit_action(Action::EndMove {
            worker_index: Some(0),
        })
        .unwrap_err();
    assert!(matches!(
        rejection.error,
        ActionError::PowerRestriction {
            power: GodPower::Hermes,
            ..
        }
    ));
    assert_eq!(game.query_game_state(), &before);

    let state = game
        .submit_action(Action::EndMove {
            worker_index: Some(1),
        })
        .unwrap();
    assert!(!state.game_ended());
    assert_eq!(state.phase(), TurnPhase::Build);
}

#[test]
fn test_hermes_climb_ends_move_phase() {
    let mut game = with_heights(
        GodPower::Hermes,
        GodPower::Mortal,
        [(0, 0), (4, 4), (0, 4), (4, 0)],
        &[((1, 1), 1)],
    );

    let state = game.submit_action(mv(0, 1, 1)).unwrap();
    assert_eq!(state.phase(), TurnPhase::Build);
}

#[test]
fn test_end_move_is_hermes_only() {
    let mut game = placed(
        GodPower::Mortal,
        GodPower::Hermes,
        [(0, 0), (4, 4), (0, 4), (4, 0)],
    );

    let rejection = game
        .submit_action(Action::EndMove {
            worker_index: Some(0),
        })
        .unwrap_err();
    assert!(matches!(
        rejection.error,
        ActionError::PowerRestriction {
            power: GodPower::Mortal,
            ..
        }
    ));
}

// ─────────────────────────────────────────────────────────────
//  Prometheus
// ─────────────────────────────────────────────────────────────

#[test]
fn test_prometheus_builds_before_moving_then_stays_level() {
    let mut game = with_heights(
        GodPower::Prometheus,
        GodPower::Mortal,
        [(1, 1), (4, 4), (0, 4), (4, 0)],
        &[((1, 2), 1)],
    );
    assert!(game.query_game_state().strategy().can_build_before_move());

    let state = game
        .submit_action(Action::BuildBeforeMove { worker_index: 0 })
        .unwrap();
    assert_eq!(state.phase(), TurnPhase::BuildBeforeMove);

    let state = game.submit_action(build(2, 2)).unwrap();
    assert_eq!(state.phase(), TurnPhase::Move);
    assert!(state.strategy().must_not_move_up());
    assert!(!state.strategy().can_build_before_move());

    let targets = game
        .query_selectable_cells(SelectionKind::Move, 0)
        .unwrap();
    assert!(!targets.contains(&pos(1, 2)));
    assert!(!targets.contains(&pos(2, 2)));

    let rejection = game.submit_action(mv(0, 1, 2)).unwrap_err();
    assert!(matches!(
        rejection.error,
        ActionError::PowerRestriction {
            power: GodPower::Prometheus,
            ..
        }
    ));
    let rejection = game.submit_action(mv(1, 3, 3)).unwrap_err();
    assert_eq!(rejection.error, ActionError::NotOwnWorker { index: 1 });

    submit_all(&mut game, &[mv(0, 0, 0), build(1, 0)]);
    assert_eq!(game.query_game_state().current_player(), Player::B);
}

#[test]
fn test_build_before_move_is_prometheus_only() {
    let mut game = placed(
        GodPower::Pan,
        GodPower::Prometheus,
        [(1, 1), (4, 4), (0, 4), (4, 0)],
    );

    let rejection = game
        .submit_action(Action::BuildBeforeMove { worker_index: 0 })
        .unwrap_err();
    assert!(matches!(
        rejection.error,
        ActionError::PowerRestriction {
            power: GodPower::Pan,
            ..
        }
    ));
}
