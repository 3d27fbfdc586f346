//! Terrain-based troop reallocation.
//!
//! Plains favour cavalry: half the infantry (rounded down) is converted to
//! cavalry. Mountains favour artillery: half the infantry is added as
//! artillery on top of the existing troops. Other terrain leaves troops
//! unchanged.

use crate::board::territory::Terrain;
use crate::board::unit::Troops;

/// Returns the troops reallocated for the given terrain.
pub fn assign_troops_to_terrain(terrain: &Terrain, troops: Troops) -> Troops {
    let half = troops.infantry / 2;
    match terrain {
        Terrain::Plain => Troops::new(half, troops.cavalry + half, troops.artillery),
        Terrain::Mountainous => Troops::new(troops.infantry, troops.cavalry, troops.artillery + half),
        Terrain::Other(_) => troops,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_moves_half_infantry_to_cavalry() {
        let t = assign_troops_to_terrain(&Terrain::Plain, Troops::new(5, 2, 1));
        assert_eq!(t, Troops::new(2, 4, 1));
    }

    #[test]
    fn mountainous_adds_half_infantry_as_artillery() {
        let t = assign_troops_to_terrain(&Terrain::Mountainous, Troops::new(5, 2, 1));
        assert_eq!(t, Troops::new(5, 2, 3));
    }

    #[test]
    fn other_terrain_is_identity() {
        let troops = Troops::new(5, 2, 1);
        assert_eq!(
            assign_troops_to_terrain(&Terrain::Other("swamp".into()), troops),
            troops
        );
    }

    #[test]
    fn single_infantry_rounds_down() {
        assert_eq!(
            assign_troops_to_terrain(&Terrain::Plain, Troops::new(1, 1, 1)),
            Troops::new(0, 1, 1)
        );
        assert_eq!(
            assign_troops_to_terrain(&Terrain::Mountainous, Troops::new(1, 1, 1)),
            Troops::new(1, 1, 1)
        );
    }
}
