//! Athena: climbing blocks the opponent from climbing on their next turn.

use super::GodRules;
use crate::{GodPower, TurnProgress};

/// Athena's rules. The block itself is enforced for every player in
/// [`super::validate_move`]; Athena only decides when it is set.
pub struct Athena;

impl GodRules for Athena {
    fn power(&self) -> GodPower {
        GodPower::Athena
    }

    fn restricts_opponent(&self, turn: &TurnProgress) -> bool {
        turn.moved_up()
    }
}
