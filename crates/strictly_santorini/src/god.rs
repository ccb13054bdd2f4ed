//! God powers and their assignment to players.

use super::Player;
use serde::{Deserialize, Serialize};

/// A god power. Each player holds exactly one for the whole match.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum GodPower {
    /// Swap places with an adjacent opponent worker.
    Apollo,
    /// Move one additional time, not back to the starting cell.
    Artemis,
    /// Moving up blocks the opponent from moving up next turn.
    Athena,
    /// Build a dome at any level.
    Atlas,
    /// Build one additional time, on a different cell.
    Demeter,
    /// Build one additional block on the same cell.
    Hephaestus,
    /// Shuffle across level ground any number of times.
    Hermes,
    /// Push an adjacent opponent worker one cell back.
    Minotaur,
    /// Also win by moving down two or more levels.
    Pan,
    /// Build before moving, at the cost of not moving up.
    Prometheus,
    /// No power.
    #[default]
    #[serde(alias = "None")]
    #[strum(to_string = "Mortal", serialize = "None")]
    Mortal,
}

impl GodPower {
    /// One-line rules summary, as printed on the god card.
    pub fn summary(self) -> &'static str {
        match self {
            GodPower::Apollo => {
                "Your worker may move into an opponent worker's space by forcing it into the space you just vacated."
            }
            GodPower::Artemis => {
                "Your worker may move one additional time, but not back to its initial space."
            }
            GodPower::Athena => {
                "If one of your workers moved up on your last turn, opponent workers cannot move up this turn."
            }
            GodPower::Atlas => "Your worker may build a dome at any level.",
            GodPower::Demeter => {
                "Your worker may build one additional time, but not on the same space."
            }
            GodPower::Hephaestus => {
                "Your worker may build one additional block (not dome) on top of your first block."
            }
            GodPower::Hermes => {
                "If your worker does not move up or down, it may move any number of times (even zero), then build."
            }
            GodPower::Minotaur => {
                "Your worker may move into an opponent worker's space if it can be forced one space straight backwards into a free, undomed space."
            }
            GodPower::Pan => "You also win if your worker moves down two or more levels.",
            GodPower::Prometheus => {
                "If your worker does not move up, it may build both before and after moving."
            }
            GodPower::Mortal => "No special power.",
        }
    }
}

/// The fixed god assignment for a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GodAssignment {
    /// Power held by player A.
    pub a: GodPower,
    /// Power held by player B.
    pub b: GodPower,
}

impl GodAssignment {
    /// Creates an assignment.
    pub fn new(a: GodPower, b: GodPower) -> Self {
        Self { a, b }
    }

    /// Power held by `player`.
    pub fn of(&self, player: Player) -> GodPower {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }
}
