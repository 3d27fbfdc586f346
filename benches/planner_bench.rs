use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use risk_planner::board::{Territory, TroopStrength, UnitTable};
use risk_planner::eval::{score_attack_order, TerrainPolicy};
use risk_planner::movegen::{generate_combinations, random_territories};
use risk_planner::search::{
    optimize_combinations, plan_attacks, search_orders, SearchMode, SearchOptions,
};

const COSTS: UnitTable<u32> = UnitTable::new(1, 3, 5);
const STRENGTHS: TroopStrength = UnitTable::new(1, 3, 5);

fn territories(n: usize) -> Vec<Territory> {
    random_territories(n, &mut SmallRng::seed_from_u64(42))
}

fn bench_generate_combinations_20(c: &mut Criterion) {
    c.bench_function("generate_combinations_budget_20", |b| {
        b.iter(|| generate_combinations(black_box(20), black_box(&COSTS)))
    });
}

fn bench_generate_combinations_100(c: &mut Criterion) {
    c.bench_function("generate_combinations_budget_100", |b| {
        b.iter(|| generate_combinations(black_box(100), black_box(&COSTS)))
    });
}

fn bench_score_attack_order(c: &mut Criterion) {
    let ts = territories(8);
    let troops = generate_combinations(20, &COSTS)[0];
    c.bench_function("score_attack_order_8_territories", |b| {
        b.iter(|| {
            score_attack_order(
                black_box(troops),
                black_box(&STRENGTHS),
                black_box(&ts),
                TerrainPolicy::Ignore,
            )
        })
    });
}

fn bench_optimize_combinations(c: &mut Criterion) {
    let combos = generate_combinations(50, &COSTS);
    let defenses: Vec<u32> = territories(8).iter().map(|t| t.defense).collect();
    c.bench_function("optimize_combinations_budget_50", |b| {
        b.iter(|| {
            optimize_combinations(
                black_box(&defenses),
                black_box(&combos),
                black_box(&STRENGTHS),
                SearchMode::Exhaustive,
            )
        })
    });
}

fn bench_plan_attacks(c: &mut Criterion) {
    let combos = generate_combinations(50, &COSTS);
    let ts = territories(8);
    let options = SearchOptions::default();
    c.bench_function("plan_attacks_budget_50", |b| {
        b.iter(|| plan_attacks(black_box(&ts), black_box(&combos), &STRENGTHS, &options))
    });
}

fn bench_search_orders_6(c: &mut Criterion) {
    let combos = generate_combinations(20, &COSTS);
    let ts = territories(6);
    let options = SearchOptions::default();
    c.bench_function("search_orders_6_territories", |b| {
        b.iter(|| search_orders(black_box(&ts), black_box(&combos), &STRENGTHS, &options))
    });
}

fn bench_search_orders_6_pruned(c: &mut Criterion) {
    let combos = generate_combinations(20, &COSTS);
    let ts = territories(6);
    let options = SearchOptions {
        mode: SearchMode::Pruned,
        ..SearchOptions::default()
    };
    c.bench_function("search_orders_6_territories_pruned", |b| {
        b.iter(|| search_orders(black_box(&ts), black_box(&combos), &STRENGTHS, &options))
    });
}

criterion_group!(
    benches,
    bench_generate_combinations_20,
    bench_generate_combinations_100,
    bench_score_attack_order,
    bench_optimize_combinations,
    bench_plan_attacks,
    bench_search_orders_6,
    bench_search_orders_6_pruned,
);
criterion_main!(benches);
