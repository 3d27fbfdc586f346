//! Troop combination generation under a budget.
//!
//! Enumerates every (infantry, cavalry, artillery) triple with at least one
//! unit of each type whose weighted cost fits the budget. The search space
//! is cubic in the budget; generation is exhaustive by contract.

use crate::board::unit::{TroopCosts, Troops};

/// Generates all affordable combinations with at least one unit of each type.
///
/// Order is ascending infantry, then cavalry, then artillery, the same order
/// as walking the full `[0, budget]^3` product and filtering. Loops break as
/// soon as a count can no longer fit, which skips only rejected triples.
pub fn generate_combinations(budget: u32, costs: &TroopCosts) -> Vec<Troops> {
    let mut out = Vec::new();
    for_each_combination(budget, costs, |troops| out.push(troops));
    out
}

/// Returns how many combinations `generate_combinations` would produce,
/// without materializing them.
pub fn combination_count(budget: u32, costs: &TroopCosts) -> u64 {
    let budget = budget as u64;
    let (ci, cc, ca) = (
        costs.infantry as u64,
        costs.cavalry as u64,
        costs.artillery as u64,
    );
    let mut count = 0u64;
    let mut i = 1u64;
    while i <= budget && i * ci + cc + ca <= budget {
        let mut c = 1u64;
        while c <= budget && i * ci + c * cc + ca <= budget {
            let left = budget - i * ci - c * cc;
            count += left.checked_div(ca).map_or(budget, |n| n.min(budget));
            c += 1;
        }
        i += 1;
    }
    count
}

/// Calls `f` for every affordable combination in generation order.
pub fn for_each_combination<F: FnMut(Troops)>(budget: u32, costs: &TroopCosts, mut f: F) {
    let (ci, cc, ca) = (
        costs.infantry as u64,
        costs.cavalry as u64,
        costs.artillery as u64,
    );
    let cap = budget as u64;
    for i in 1..=budget {
        let spent_i = i as u64 * ci;
        if spent_i + cc + ca > cap {
            break;
        }
        for c in 1..=budget {
            let spent_ic = spent_i + c as u64 * cc;
            if spent_ic + ca > cap {
                break;
            }
            for a in 1..=budget {
                if spent_ic + a as u64 * ca > cap {
                    break;
                }
                f(Troops::new(i, c, a));
            }
        }
    }
}
