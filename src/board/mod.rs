//! Board representation: units, troop combinations, and territories.
//!
//! Contains the core data structures shared by move generation, evaluation,
//! and search, plus the presentation-neutral board view.

pub mod territory;
pub mod unit;
pub mod view;

pub use territory::{defenses, territories_from_parallel, Terrain, Territory};
pub use unit::{Troops, TroopCosts, TroopStrength, UnitTable, UnitType, ALL_UNIT_TYPES};
pub use view::{BoardEntry, BoardSink, BoardView, DefenseBand};
