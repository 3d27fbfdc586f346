//! Attack order search.
//!
//! Runs the attack planner for every permutation of the territory list and
//! keeps the permutation/combination pair that conquers the most. The
//! number of permutations is `n!`; `SearchOptions::max_order_territories`
//! bounds `n` at validation time.
//!
//! With `prioritize_weakest` (the default) the planner re-sorts each
//! permutation. Under `TerrainPolicy::Ignore` every permutation then scores
//! the same and the identity order is selected. Under `TerrainPolicy::Apply`
//! territories with equal defense keep their permutation order and their
//! own terrain, so those orders can still differ.

use std::time::Instant;

use crate::board::territory::Territory;
use crate::board::unit::{TroopStrength, Troops};
use crate::eval::TerrainPolicy;
use crate::movegen::{apply_order, Permutations};

use super::planner::plan_attacks;
use super::{SearchMode, SearchOptions, Strategy};

/// Result of an order search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSearchResult {
    /// Territories in the selected attack order.
    pub order: Vec<Territory>,
    /// Original positions of `order`, 0-based.
    pub positions: Vec<usize>,
    /// Best combination for the selected order.
    pub strategy: Strategy,
    /// Permutations evaluated.
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// Finds the best attack order and troop combination.
///
/// Ties between permutations keep the first one in lexicographic order over
/// original positions.
pub fn search_orders(
    territories: &[Territory],
    combinations: &[Troops],
    strengths: &TroopStrength,
    options: &SearchOptions,
) -> OrderSearchResult {
    let start = Instant::now();
    let n = territories.len();

    let mut best: Option<(Vec<usize>, Strategy)> = None;
    let mut nodes = 0u64;
    let single_sequence =
        options.mode == SearchMode::Pruned && sorts_to_one_sequence(territories, options);

    for positions in Permutations::new(n) {
        let order = apply_order(territories, &positions);
        let strategy = plan_attacks(&order, combinations, strengths, options);
        nodes += 1;

        let improved = match &best {
            Some((_, b)) => strategy.conquered > b.conquered,
            None => true,
        };
        if improved {
            tracing::debug!(
                order = ?positions,
                conquered = strategy.conquered,
                "new best attack order"
            );
            let complete = strategy.conquered == n;
            best = Some((positions, strategy));
            if options.mode == SearchMode::Pruned && complete {
                break;
            }
        }

        if single_sequence {
            break;
        }
    }

    let (positions, strategy) = best.unwrap_or_else(|| ((0..n).collect(), Strategy::none()));
    OrderSearchResult {
        order: apply_order(territories, &positions),
        positions,
        strategy,
        nodes,
        elapsed_ms: start.elapsed().as_millis() as u64,
    }
}

/// True when every permutation reaches the planner as the same scored
/// sequence, so the first permutation already holds the final answer.
fn sorts_to_one_sequence(territories: &[Territory], options: &SearchOptions) -> bool {
    if !options.prioritize_weakest {
        return false;
    }
    if options.terrain == TerrainPolicy::Ignore {
        return true;
    }
    let mut defenses: Vec<u32> = territories.iter().map(|t| t.defense).collect();
    defenses.sort_unstable();
    defenses.windows(2).all(|w| w[0] != w[1])
}
