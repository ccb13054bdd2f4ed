//! Pan: a long drop also wins.

use super::GodRules;
use crate::rules::MoveStep;
use crate::{GodPower, Victory};

/// Pan's rules.
pub struct Pan;

impl GodRules for Pan {
    fn power(&self) -> GodPower {
        GodPower::Pan
    }

    fn victory(&self, step: &MoveStep) -> Option<Victory> {
        (step.descent() >= 2).then_some(Victory::DescendedTwoLevels)
    }
}
