//! Greedy conquest scoring.
//!
//! An army attacks territories in sequence, paying each territory's defense
//! out of its remaining force, and stops at the first territory it can no
//! longer afford. There is no lookahead and no skipping.

use serde::{Deserialize, Serialize};

use crate::board::territory::Territory;
use crate::board::unit::{TroopStrength, Troops};

use super::force::calculate_force;
use super::terrain::assign_troops_to_terrain;

/// How terrain reallocation affects the conquest decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainPolicy {
    /// Terrain-adjusted troops are computed per territory but the decision
    /// uses the unadjusted remaining force.
    #[default]
    Ignore,
    /// The adjusted army's force, minus what has already been spent, must
    /// cover the territory's defense.
    Apply,
}

/// Counts territories conquered by `force` over ascending `defenses`
/// (or any order the caller supplies).
pub fn greedy_conquests<I>(force: u64, defenses: I) -> usize
where
    I: IntoIterator<Item = u32>,
{
    let mut remaining = force;
    let mut conquered = 0;
    for defense in defenses {
        let defense = defense as u64;
        if remaining >= defense {
            remaining -= defense;
            conquered += 1;
        } else {
            break;
        }
    }
    conquered
}

/// Counts territories conquered by `troops` attacking `territories` in the
/// given order, honouring the terrain policy.
pub fn score_attack_order(
    troops: Troops,
    strengths: &TroopStrength,
    territories: &[Territory],
    policy: TerrainPolicy,
) -> usize {
    let base = calculate_force(&troops, strengths);
    let mut spent = 0u64;
    let mut conquered = 0;

    for territory in territories {
        let adjusted = assign_troops_to_terrain(&territory.terrain, troops);
        let available = match policy {
            TerrainPolicy::Ignore => {
                tracing::trace!(
                    troops = %troops,
                    adjusted = %adjusted,
                    terrain = %territory.terrain,
                    "terrain adjustment ignored"
                );
                base - spent
            }
            TerrainPolicy::Apply => calculate_force(&adjusted, strengths).saturating_sub(spent),
        };
        let defense = territory.defense as u64;
        if available >= defense {
            spent += defense;
            conquered += 1;
        } else {
            break;
        }
    }
    conquered
}
