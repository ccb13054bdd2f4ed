//! Shared fixtures for the engine integration tests.

#![allow(dead_code)]

use strictly_santorini::{Action, Game, GameState, GodPower, Position};

/// Worker placements in placement order: A0, A1, B0, B1.
pub type Placements = [(i32, i32); 4];

pub fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y).expect("test position in bounds")
}

pub fn place(x: i32, y: i32) -> Action {
    Action::PlaceWorker { x, y }
}

pub fn mv(worker_index: usize, x: i32, y: i32) -> Action {
    Action::Move {
        worker_index,
        x,
        y,
    }
}

pub fn build(x: i32, y: i32) -> Action {
    Action::Build {
        x,
        y,
        build_dome: false,
    }
}

pub fn dome(x: i32, y: i32) -> Action {
    Action::Build {
        x,
        y,
        build_dome: true,
    }
}

/// A game with all four workers placed.
pub fn placed(a: GodPower, b: GodPower, workers: Placements) -> Game {
    let mut game = Game::new(a, b);
    for (x, y) in workers {
        game.submit_action(place(x, y)).expect("placement succeeds");
    }
    game
}

/// A placed game whose towers are then raised through a snapshot edit.
pub fn with_heights(
    a: GodPower,
    b: GodPower,
    workers: Placements,
    heights: &[((i32, i32), u8)],
) -> Game {
    let state = placed(a, b, workers).into_state();
    Game::from_snapshot(edit_heights(&state, heights)).expect("edited snapshot is valid")
}

/// Rewrites cell heights of a serialized snapshot.
pub fn edit_heights(state: &GameState, heights: &[((i32, i32), u8)]) -> GameState {
    let mut json = serde_json::to_value(state).expect("state serializes");
    for ((x, y), height) in heights {
        json["board"]["cells"][*x as usize][*y as usize]["height"] = (*height).into();
    }
    serde_json::from_value(json).expect("edited state deserializes")
}

pub fn submit_all(game: &mut Game, actions: &[Action]) {
    for action in actions {
        game.submit_action(*action)
            .unwrap_or_else(|rejection| panic!("{action} rejected: {rejection}"));
    }
}
