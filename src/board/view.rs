//! Presentation-neutral view of the enemy board.
//!
//! Renderers consume a `BoardView` through the `BoardSink` trait. The view
//! only depends on the territories and troop strengths, never on the
//! search results.

use std::io;

use serde::Serialize;

use super::territory::Territory;
use super::unit::{TroopStrength, UnitTable};

/// Defenses at or below this value are in the low band.
pub const LOW_DEFENSE_MAX: u32 = 5;
/// Defenses at or below this value (and above the low band) are medium.
pub const MEDIUM_DEFENSE_MAX: u32 = 10;

/// Coarse defense classification, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefenseBand {
    Low,
    Medium,
    High,
}

impl DefenseBand {
    pub fn of(defense: u32) -> DefenseBand {
        if defense <= LOW_DEFENSE_MAX {
            DefenseBand::Low
        } else if defense <= MEDIUM_DEFENSE_MAX {
            DefenseBand::Medium
        } else {
            DefenseBand::High
        }
    }

    /// Returns the colour name a renderer should use.
    pub const fn color(self) -> &'static str {
        match self {
            DefenseBand::Low => "green",
            DefenseBand::Medium => "yellow",
            DefenseBand::High => "red",
        }
    }
}

/// One territory as shown on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardEntry {
    pub label: String,
    pub defense: u32,
    pub band: DefenseBand,
    /// Units of a single type needed to match the defense on their own.
    pub required: UnitTable<u32>,
}

/// The enemy board, one entry per territory in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BoardView {
    pub entries: Vec<BoardEntry>,
}

impl BoardView {
    /// Builds the view. Labels are 1-based (`Territory 1`, ...).
    ///
    /// Required units use integer division by the unit strength; strengths
    /// are validated positive before a view is built.
    pub fn new(territories: &[Territory], strengths: &TroopStrength) -> BoardView {
        let entries = territories
            .iter()
            .enumerate()
            .map(|(i, t)| BoardEntry {
                label: format!("Territory {}", i + 1),
                defense: t.defense,
                band: DefenseBand::of(t.defense),
                required: UnitTable::new(
                    required_units(t.defense, strengths.infantry),
                    required_units(t.defense, strengths.cavalry),
                    required_units(t.defense, strengths.artillery),
                ),
            })
            .collect();
        BoardView { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn required_units(defense: u32, strength: u32) -> u32 {
    defense.checked_div(strength).unwrap_or(0)
}

/// A consumer of board views (text, window, file, ...).
pub trait BoardSink {
    fn render(&mut self, view: &BoardView) -> io::Result<()>;
}
