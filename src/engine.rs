//! Planning run orchestration.
//!
//! Takes a validated plan, generates the candidate combinations once, and
//! runs both the single-shot optimizer and the attack order search. The
//! resulting `PlanReport` is what the output layer formats.

use std::time::Instant;

use serde::Serialize;

use crate::board::territory::Territory;
use crate::board::view::BoardView;
use crate::movegen::generate_combinations;
use crate::plan::Plan;
use crate::search::{optimize_combinations, search_orders, Strategy};

/// Best attack order found by the order search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttackPlan {
    pub order: Vec<Territory>,
    /// Original 0-based positions of `order`.
    pub positions: Vec<usize>,
    pub strategy: Strategy,
}

/// Everything a planning run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    /// Best combination against the territories sorted weakest first.
    pub optimization: Strategy,
    pub attack: AttackPlan,
    pub combinations: usize,
    pub permutations: u64,
    pub board: BoardView,
    pub elapsed_ms: u64,
}

/// Runs a full planning pass.
pub fn run_plan(plan: &Plan) -> PlanReport {
    let start = Instant::now();
    let options = plan.options();

    let combinations = generate_combinations(plan.budget(), plan.costs());
    if combinations.is_empty() {
        tracing::warn!(
            budget = plan.budget(),
            "budget cannot afford one unit of each type"
        );
    }
    tracing::info!(
        combinations = combinations.len(),
        territories = plan.territories().len(),
        mode = ?options.mode,
        "starting search"
    );

    let optimization = optimize_combinations(
        &plan.defenses(),
        &combinations,
        plan.strengths(),
        options.mode,
    );
    tracing::debug!(best = %optimization, "combination optimization done");

    let orders = search_orders(plan.territories(), &combinations, plan.strengths(), options);
    tracing::info!(
        nodes = orders.nodes,
        conquered = orders.strategy.conquered,
        elapsed_ms = orders.elapsed_ms,
        "order search done"
    );

    PlanReport {
        optimization,
        attack: AttackPlan {
            order: orders.order,
            positions: orders.positions,
            strategy: orders.strategy,
        },
        combinations: combinations.len(),
        permutations: orders.nodes,
        board: BoardView::new(plan.territories(), plan.strengths()),
        elapsed_ms: start.elapsed().as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::territory::{territories_from_parallel, Terrain};
    use crate::board::unit::{Troops, UnitTable};
    use crate::plan::PlanConfig;
    use crate::search::SearchOptions;

    fn config(budget: u32, territories: Vec<Territory>) -> PlanConfig {
        PlanConfig {
            budget,
            costs: UnitTable::new(1, 3, 5),
            strengths: UnitTable::new(1, 3, 5),
            territories,
            options: SearchOptions::default(),
        }
    }

    #[test]
    fn budget_twenty_report() {
        let ts = territories_from_parallel(&[5, 10, 15], &["plain", "plain", "plain"]).unwrap();
        let plan = config(20, ts).validate().unwrap();
        let report = run_plan(&plan);
        assert_eq!(report.optimization.conquered, 2);
        assert_eq!(report.attack.strategy, report.optimization);
        assert_eq!(report.attack.positions, vec![0, 1, 2]);
        assert_eq!(report.permutations, 6);
        assert_eq!(report.board.len(), 3);
        assert!(report.combinations > 0);
    }

    #[test]
    fn small_budget_report_is_empty() {
        let ts = vec![Territory::new(1, Terrain::Plain)];
        let plan = config(2, ts).validate().unwrap();
        let report = run_plan(&plan);
        assert_eq!(report.combinations, 0);
        assert_eq!(report.optimization, Strategy::none());
        assert_eq!(report.attack.strategy, Strategy::none());
    }

    #[test]
    fn empty_territories_report() {
        let plan = config(20, Vec::new()).validate().unwrap();
        let report = run_plan(&plan);
        assert_eq!(report.optimization.conquered, 0);
        assert_eq!(report.optimization.combination, None);
        assert!(report.attack.order.is_empty());
        assert!(report.board.is_empty());
    }

    #[test]
    fn exact_budget_single_combination() {
        let plan = config(9, vec![Territory::new(9, Terrain::Plain)])
            .validate()
            .unwrap();
        let report = run_plan(&plan);
        assert_eq!(report.combinations, 1);
        assert_eq!(report.optimization.combination, Some(Troops::new(1, 1, 1)));
        assert_eq!(report.optimization.conquered, 1);
    }
}
