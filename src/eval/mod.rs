//! Army evaluation.
//!
//! Computes the combat force of a troop combination, its terrain-based
//! reallocation, and how many territories it conquers in a given order.

pub mod conquest;
pub mod force;
pub mod terrain;

pub use conquest::{greedy_conquests, score_attack_order, TerrainPolicy};
pub use force::calculate_force;
pub use terrain::assign_troops_to_terrain;
