//! Unit types, per-unit tables, and troop combinations.
//!
//! A troop combination is a fixed triple of unit counts. Costs and strengths
//! are both expressed as a `UnitTable`, one positive value per unit type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The type of a troop unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Infantry,
    Cavalry,
    Artillery,
}

/// All unit types in combination order.
pub const ALL_UNIT_TYPES: [UnitType; 3] =
    [UnitType::Infantry, UnitType::Cavalry, UnitType::Artillery];

impl UnitType {
    /// Returns the lowercase key used in configuration files.
    pub const fn key(self) -> &'static str {
        match self {
            UnitType::Infantry => "infantry",
            UnitType::Cavalry => "cavalry",
            UnitType::Artillery => "artillery",
        }
    }

    /// Returns the three-letter abbreviation used on the board view.
    pub const fn abbrev(self) -> &'static str {
        match self {
            UnitType::Infantry => "Inf",
            UnitType::Cavalry => "Cav",
            UnitType::Artillery => "Art",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One value per unit type. Used for both troop costs and troop strengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitTable<T> {
    pub infantry: T,
    pub cavalry: T,
    pub artillery: T,
}

impl<T: Copy> UnitTable<T> {
    pub const fn new(infantry: T, cavalry: T, artillery: T) -> Self {
        UnitTable {
            infantry,
            cavalry,
            artillery,
        }
    }

    /// Returns the value for a unit type.
    pub fn get(&self, unit: UnitType) -> T {
        match unit {
            UnitType::Infantry => self.infantry,
            UnitType::Cavalry => self.cavalry,
            UnitType::Artillery => self.artillery,
        }
    }

    /// Iterates `(unit, value)` pairs in combination order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitType, T)> + '_ {
        ALL_UNIT_TYPES.iter().map(move |&u| (u, self.get(u)))
    }
}

/// Per-unit purchase costs.
pub type TroopCosts = UnitTable<u32>;

/// Per-unit combat strengths.
pub type TroopStrength = UnitTable<u32>;

/// A troop combination: (infantry, cavalry, artillery) counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Troops {
    pub infantry: u32,
    pub cavalry: u32,
    pub artillery: u32,
}

impl Troops {
    pub const fn new(infantry: u32, cavalry: u32, artillery: u32) -> Self {
        Troops {
            infantry,
            cavalry,
            artillery,
        }
    }

    /// Returns the count for a unit type.
    pub const fn count(&self, unit: UnitType) -> u32 {
        match unit {
            UnitType::Infantry => self.infantry,
            UnitType::Cavalry => self.cavalry,
            UnitType::Artillery => self.artillery,
        }
    }

    /// Sum of each count multiplied by the table value for its unit type.
    /// Used for both purchase cost and combat force.
    pub fn weighted(&self, table: &UnitTable<u32>) -> u64 {
        ALL_UNIT_TYPES
            .iter()
            .map(|&u| self.count(u) as u64 * table.get(u) as u64)
            .sum()
    }

    /// True when every unit type has at least one unit.
    pub const fn has_every_unit(&self) -> bool {
        self.infantry > 0 && self.cavalry > 0 && self.artillery > 0
    }
}

impl fmt::Display for Troops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.infantry, self.cavalry, self.artillery)
    }
}
