//! Combat force of a troop combination.

use crate::board::unit::{TroopStrength, Troops};

/// Total combat strength: each unit count times its unit strength.
#[inline]
pub fn calculate_force(troops: &Troops, strengths: &TroopStrength) -> u64 {
    troops.weighted(strengths)
}
