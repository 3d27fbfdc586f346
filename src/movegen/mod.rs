//! Candidate generation.
//!
//! Produces the search space: affordable troop combinations and attack
//! orders. Also draws random territory lists for scenarios and benchmarks.

pub mod combinations;
pub mod permutations;

use rand::Rng;

use crate::board::{Terrain, Territory};

pub use combinations::{combination_count, for_each_combination, generate_combinations};
pub use permutations::{apply_order, permutation_count, Permutations};

/// Highest defense drawn by `random_territories`.
pub const RANDOM_MAX_DEFENSE: u32 = 20;

/// Draws `n` random territories with defenses in `1..=RANDOM_MAX_DEFENSE`
/// and a random plain, mountainous, or untagged terrain.
pub fn random_territories(n: usize, rng: &mut impl Rng) -> Vec<Territory> {
    (0..n)
        .map(|_| {
            let defense = rng.gen_range(1..=RANDOM_MAX_DEFENSE);
            let terrain = match rng.gen_range(0..3) {
                0 => Terrain::Plain,
                1 => Terrain::Mountainous,
                _ => Terrain::Other("other".to_string()),
            };
            Territory::new(defense, terrain)
        })
        .collect()
}
