//! Turn phases and game outcomes.

use serde::{Deserialize, Serialize};

/// The stage of a turn. Exactly one phase is active at a time.
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
    strum::Display,
    strum::EnumIter,
)]
pub enum TurnPhase {
    /// Players are placing their workers.
    #[default]
    Placement,
    /// The active player moves a worker.
    Move,
    /// Prometheus builds before moving.
    BuildBeforeMove,
    /// The moved worker builds.
    Build,
    /// Artemis may accept or decline a second move.
    ExtraMoveDecision,
    /// Demeter or Hephaestus may accept or decline a second build.
    ExtraBuildDecision,
    /// Atlas may cap the cell just built with a dome.
    DomeDecision,
    /// The game has ended.
    GameOver,
}

impl TurnPhase {
    /// True for phases that wait on an accept/decline answer.
    pub fn is_decision(self) -> bool {
        matches!(
            self,
            TurnPhase::ExtraMoveDecision | TurnPhase::ExtraBuildDecision | TurnPhase::DomeDecision
        )
    }

    /// True for phases in which a `Build` action is expected.
    pub fn is_build(self) -> bool {
        matches!(self, TurnPhase::Build | TurnPhase::BuildBeforeMove)
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Victory {
    /// The winner moved a worker onto the third level.
    #[display("reached the third level")]
    ReachedThirdLevel,
    /// Pan moved a worker down two or more levels.
    #[display("moved down two levels")]
    DescendedTwoLevels,
    /// The loser had no legal move at the start of their turn.
    #[display("opponent cannot move")]
    OpponentCannotMove,
    /// The loser's moved worker had nowhere to build.
    #[display("opponent cannot build")]
    OpponentCannotBuild,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, WorkerId};

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            Victory::OpponentCannotBuild.to_string(),
            "opponent cannot build"
        );
        assert_eq!(WorkerId::new(Player::B, 1).to_string(), "B1");
    }
}
