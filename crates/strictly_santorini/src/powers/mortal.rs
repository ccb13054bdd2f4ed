//! No power: the unmodified rules.

use super::GodRules;
use crate::GodPower;

/// Rules for a player without a god.
pub struct Mortal;

impl GodRules for Mortal {
    fn power(&self) -> GodPower {
        GodPower::Mortal
    }
}
