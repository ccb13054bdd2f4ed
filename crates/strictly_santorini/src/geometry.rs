//! Pure adjacency and height predicates shared by every power.
//!
//! These encode the unmodified Santorini rules. God powers layer their
//! overrides on top in [`crate::powers`].

use super::{Board, Position};
use crate::action::ActionError;
use tracing::instrument;

/// The in-bounds cells surrounding `pos` (three to eight of them).
pub fn neighbors8(pos: Position) -> impl Iterator<Item = Position> {
    (-1..=1)
        .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
        .filter(|&step| step != (0, 0))
        .filter_map(move |(dx, dy)| pos.offset(dx, dy))
}

/// Checks a standard move from `from` to `to`.
///
/// The target must be adjacent, free, not a dome, and at most one level
/// higher. Any descent is allowed.
#[instrument(skip(board))]
pub fn check_move_target(from: Position, to: Position, board: &Board) -> Result<(), ActionError> {
    if !from.is_adjacent(to) {
        return Err(ActionError::NotAdjacent { from, to });
    }
    let target = board.cell(to);
    if target.is_occupied() {
        return Err(ActionError::CellOccupied(to));
    }
    let from_height = board.height_at(from);
    if target.is_dome() || target.height() > from_height.saturating_add(1) {
        return Err(ActionError::HeightViolation {
            from: from_height,
            to: target.height(),
        });
    }
    Ok(())
}

/// Checks a standard build by a worker at `worker` on `target`.
#[instrument(skip(board))]
pub fn check_build_target(
    worker: Position,
    target: Position,
    board: &Board,
) -> Result<(), ActionError> {
    if !worker.is_adjacent(target) {
        return Err(ActionError::NotAdjacent {
            from: worker,
            to: target,
        });
    }
    let cell = board.cell(target);
    if cell.is_occupied() {
        return Err(ActionError::CellOccupied(target));
    }
    if cell.is_dome() {
        return Err(ActionError::DomeCap(target));
    }
    Ok(())
}

/// True if [`check_move_target`] accepts the move.
pub fn is_valid_move_target(from: Position, to: Position, board: &Board) -> bool {
    check_move_target(from, to, board).is_ok()
}

/// True if [`check_build_target`] accepts the build.
pub fn is_valid_build_target(worker: Position, target: Position, board: &Board) -> bool {
    check_build_target(worker, target, board).is_ok()
}
