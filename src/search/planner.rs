//! Attack planning against a fixed territory order.
//!
//! Scores each candidate combination against territories attacked in the
//! order given (or weakest first when `prioritize_weakest` is set) and
//! returns the best combination for that order.

use crate::board::territory::Territory;
use crate::board::unit::{TroopStrength, Troops};
use crate::eval::score_attack_order;

use super::{SearchMode, SearchOptions, Strategy};

/// Finds the best combination for attacking `territories`.
///
/// With `prioritize_weakest` the territories are stably sorted by defense
/// first, which discards the caller's ordering. Ties keep the earliest
/// combination.
pub fn plan_attacks(
    territories: &[Territory],
    combinations: &[Troops],
    strengths: &TroopStrength,
    options: &SearchOptions,
) -> Strategy {
    let ordered = attack_sequence(territories, options.prioritize_weakest);

    let mut best = Strategy::none();
    for &combination in combinations {
        let conquered = score_attack_order(combination, strengths, &ordered, options.terrain);
        if conquered > best.conquered {
            best = Strategy {
                combination: Some(combination),
                conquered,
            };
            if options.mode == SearchMode::Pruned && conquered == ordered.len() {
                break;
            }
        }
    }
    best
}

/// Returns the sequence in which territories are attacked.
pub fn attack_sequence(territories: &[Territory], prioritize_weakest: bool) -> Vec<Territory> {
    let mut ordered = territories.to_vec();
    if prioritize_weakest {
        ordered.sort_by_key(|t| t.defense);
    }
    ordered
}
