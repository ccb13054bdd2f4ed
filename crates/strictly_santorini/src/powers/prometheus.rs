//! Prometheus: build, move without climbing, build again.

use super::GodRules;
use crate::GodPower;

/// Prometheus's rules. The no-climb rule after a pre-move build is
/// enforced in [`super::validate_move`].
pub struct Prometheus;

impl GodRules for Prometheus {
    fn power(&self) -> GodPower {
        GodPower::Prometheus
    }

    fn can_build_before_move(&self) -> bool {
        true
    }
}
