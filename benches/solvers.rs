use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand::rngs::StdRng;

use knapsack::{Item, Solver};

const CLASSIC: [(u64, u32, u32); 3] = [(1, 60, 10), (2, 100, 20), (3, 120, 30)];

/// Weakly correlated instance: `value ~ weight +- 10%`, capacity is half of the total weight.
fn correlated_instance(n: u64, seed: u64) -> (Vec<Item<u32>>, u32) {
    let mut rng = StdRng::seed_from_u64(seed);
    let items = (0..n)
        .map(|key| {
            let weight = rng.gen_range(10..=1000u32);
            let value = weight + rng.gen_range(0..=weight / 5) - weight / 10;
            Item::new(key, value, weight)
        })
        .collect::<Vec<_>>();
    let capacity = items.iter().map(|item| item.weight).sum::<u32>() / 2;
    (items, capacity)
}

fn classic(c: &mut Criterion) {
    let items = CLASSIC
        .iter()
        .map(|&(key, value, weight)| Item::new(key, value, weight))
        .collect::<Vec<_>>();

    c.bench_function("bnb_classic", |b| {
        b.iter(|| Solver::default().solve(black_box(&items), black_box(50)))
    });
    c.bench_function("dp_classic", |b| {
        b.iter(|| Solver::DynamicProgramming.solve(black_box(&items), black_box(50)))
    });
}

fn correlated(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlated");

    for n in [20, 50, 100] {
        let (items, capacity) = correlated_instance(n, 42);

        group.bench_with_input(BenchmarkId::new("bnb", n), &items, |b, items| {
            b.iter(|| Solver::default().solve(items, capacity))
        });
        group.bench_with_input(BenchmarkId::new("dp", n), &items, |b, items| {
            b.iter(|| Solver::DynamicProgramming.solve(items, capacity))
        });
    }

    group.finish();
}

criterion_group!(benches, classic, correlated);
criterion_main!(benches);
