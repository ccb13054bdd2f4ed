//! Move-based win detection.

use super::super::{GodPower, Position, Victory, WorkerId};
use crate::powers::rules_for;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Height a worker must reach to win.
pub const WINNING_HEIGHT: u8 = 3;

/// One chosen move, with the heights at both ends.
///
/// Forced displacements (Apollo's swap, Minotaur's push) are never described
/// by a `MoveStep`, so they can neither win nor count as climbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveStep {
    /// The worker that moved.
    pub worker: WorkerId,
    /// Where it came from.
    pub from: Position,
    /// Where it went.
    pub to: Position,
    /// Height of `from`.
    pub from_height: u8,
    /// Height of `to`.
    pub to_height: u8,
}

impl MoveStep {
    /// True if the move went up.
    pub fn climbed(&self) -> bool {
        self.to_height > self.from_height
    }

    /// True if the move stayed on the same level.
    pub fn is_level(&self) -> bool {
        self.to_height == self.from_height
    }

    /// Levels dropped by the move (0 when level or climbing).
    pub fn descent(&self) -> u8 {
        self.from_height.saturating_sub(self.to_height)
    }
}

/// Standard win: the worker ended its move on the third level.
pub fn reached_third_level(step: &MoveStep) -> bool {
    step.to_height == WINNING_HEIGHT
}

/// Checks whether a move wins for the mover under `power`.
#[instrument]
pub fn evaluate_move(power: GodPower, step: &MoveStep) -> Option<Victory> {
    if reached_third_level(step) {
        return Some(Victory::ReachedThirdLevel);
    }
    rules_for(power).victory(step)
}
