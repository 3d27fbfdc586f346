//! Single-shot combination optimization.
//!
//! Scores every candidate combination against the territories sorted from
//! weakest to strongest and keeps the one that conquers the most.

use crate::board::unit::{TroopStrength, Troops};
use crate::eval::{calculate_force, greedy_conquests};

use super::{SearchMode, Strategy};

/// Finds the combination that conquers the most territories when attacking
/// them in ascending defense order.
///
/// Ties keep the earliest combination in `combinations`. A combination is
/// only recorded if it conquers at least one territory, so an empty input
/// (or one where nothing can be conquered) returns `Strategy::none()`.
pub fn optimize_combinations(
    defenses: &[u32],
    combinations: &[Troops],
    strengths: &TroopStrength,
    mode: SearchMode,
) -> Strategy {
    let mut sorted = defenses.to_vec();
    sorted.sort_unstable();

    let mut best = Strategy::none();
    for &combination in combinations {
        let force = calculate_force(&combination, strengths);
        let conquered = greedy_conquests(force, sorted.iter().copied());
        if conquered > best.conquered {
            best = Strategy {
                combination: Some(combination),
                conquered,
            };
            if mode == SearchMode::Pruned && conquered == sorted.len() {
                break;
            }
        }
    }
    best
}
