//! Search and planning.
//!
//! Exhaustive search over troop combinations and attack orders, scored by
//! greedy conquest. Combination generation is cubic in the budget and order
//! search is factorial in the number of territories; both are deliberate.
//! `SearchMode::Pruned` skips only work that cannot change the result.

pub mod optimizer;
pub mod order;
pub mod planner;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::unit::Troops;
use crate::eval::TerrainPolicy;

pub use optimizer::optimize_combinations;
pub use order::{search_orders, OrderSearchResult};
pub use planner::{attack_sequence, plan_attacks};

/// Default cap on territories for order search (9! = 362880 orders).
pub const DEFAULT_MAX_ORDER_TERRITORIES: usize = 9;

/// Whether search may stop early once the result is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Exhaustive,
    /// Stops scanning once a candidate conquers everything, and evaluates
    /// a single permutation when every permutation re-sorts to the same
    /// scored sequence (weakest first, with terrain ignored or all defenses
    /// distinct). Returns exactly what `Exhaustive` returns.
    Pruned,
}

/// Knobs shared by the planner and the order search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Sort territories weakest first before scoring.
    pub prioritize_weakest: bool,
    pub terrain: TerrainPolicy,
    pub mode: SearchMode,
    /// Largest territory count accepted for order search.
    pub max_order_territories: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            prioritize_weakest: true,
            terrain: TerrainPolicy::Ignore,
            mode: SearchMode::Exhaustive,
            max_order_territories: DEFAULT_MAX_ORDER_TERRITORIES,
        }
    }
}

/// A chosen combination and how many territories it conquers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Strategy {
    /// `None` when no combination conquers anything.
    pub combination: Option<Troops>,
    pub conquered: usize,
}

impl Strategy {
    pub const fn none() -> Self {
        Strategy {
            combination: None,
            conquered: 0,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.combination {
            Some(c) => write!(f, "{} conquering {}", c, self.conquered),
            None => write!(f, "none conquering {}", self.conquered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_weakest_first_exhaustive() {
        let o = SearchOptions::default();
        assert!(o.prioritize_weakest);
        assert_eq!(o.terrain, TerrainPolicy::Ignore);
        assert_eq!(o.mode, SearchMode::Exhaustive);
        assert_eq!(o.max_order_territories, 9);
    }

    #[test]
    fn options_partial_json() {
        let o: SearchOptions =
            serde_json::from_str(r#"{"terrain":"apply","mode":"pruned"}"#).unwrap();
        assert!(o.prioritize_weakest);
        assert_eq!(o.terrain, TerrainPolicy::Apply);
        assert_eq!(o.mode, SearchMode::Pruned);
    }

    #[test]
    fn strategy_display() {
        assert_eq!(Strategy::none().to_string(), "none conquering 0");
        let s = Strategy {
            combination: Some(Troops::new(1, 1, 1)),
            conquered: 1,
        };
        assert_eq!(s.to_string(), "(1, 1, 1) conquering 1");
    }
}
