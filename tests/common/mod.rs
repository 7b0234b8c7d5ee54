#![allow(dead_code)]

use fixedbitset::FixedBitSet;
use knapsack::{Amount, Item, Solution};
use rand::prelude::*;

pub fn random_instance<R: Rng>(rng: &mut R, max_items: usize) -> (Vec<Item<u32>>, u32) {
    let n = rng.gen_range(0..=max_items);
    let items = (0..n)
        .map(|i| Item::new(100 + i as u64, rng.gen_range(0..=100), rng.gen_range(0..=40)))
        .collect();
    let capacity = rng.gen_range(0..=120);
    (items, capacity)
}

#[inline]
pub fn wide<T: Amount>(amount: T) -> u64 {
    amount.to_u64().expect("unsigned amount fits u64")
}

/// Best total value over all subsets of `items` that fit into `capacity`.
///
/// Totals are accumulated in `u64` so that no partial sum can overflow.
pub fn brute_force<T: Amount>(items: &[Item<T>], capacity: T) -> u64 {
    let n = items.len();
    let mut best = 0;
    for mask in 0..1usize << n {
        let mut subset = FixedBitSet::with_capacity(n);
        subset.extend((0..n).filter(|i| mask >> i & 1 == 1));

        let (value, weight) = subset.ones().fold((0, 0), |(v, w), i| {
            (v + wide(items[i].value), w + wide(items[i].weight))
        });

        if weight <= wide(capacity) {
            best = best.max(value);
        }
    }
    best
}

pub fn assert_consistent<T: Amount>(items: &[Item<T>], capacity: T, solution: &Solution<T>) {
    // order preservation
    let indices = solution.indices();
    assert!(indices.windows(2).all(|w| w[0] < w[1]));

    // totals agree with the selected items
    let value: u64 = indices.iter().map(|&i| wide(items[i].value)).sum();
    let weight: u64 = indices.iter().map(|&i| wide(items[i].weight)).sum();
    assert_eq!(wide(solution.value), value);
    assert_eq!(wide(solution.weight), weight);

    // feasibility
    assert!(weight <= wide(capacity));

    let keys = indices.iter().map(|&i| items[i].key).collect::<Vec<_>>();
    assert_eq!(solution.keys(), keys);
}
