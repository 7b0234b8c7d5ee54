//! # Dynamic programming
//! Exact pseudo-polynomial algorithm for the 0-1 knapsack problem.
//!
//! `K[i][w]` is the maximum value achievable with the first `i` items and capacity `w`:
//!  - `K[0][w] = 0`
//!  - `K[i][w] = max(K[i-1][w], v[i-1] + K[i-1][w - w[i-1]])` if item `i-1` fits into `w`
//!  - `K[i][w] = K[i-1][w]` otherwise
//!
//! The table takes `O(n*W)` time and memory where `W` is the capacity, which bounds the instances
//! this algorithm can handle regardless of how easy they are for [bnb](crate::bnb).
use std::cmp::{max, min};
use std::ops::{Index, IndexMut};

use fixedbitset::FixedBitSet;
use tracing::debug;

use crate::{Amount, CatalogItem, Error, Item, Solution, Stats};

/// Result of [knap_sack].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tabulation<T> {
    /// optimal value `K[n][W]`
    pub value: T,
    /// 1-based indices of the selected items in ascending order
    pub selected: Vec<usize>,
    /// total weight of the selected items
    pub weight: T,
    /// size of the table, i.e. `(n + 1) * (min(W, S) + 1)` where `S` is the total weight of the
    /// items that fit into `W`
    pub cells: usize,
}

/// Row-major `(n + 1) x (W + 1)` value table.
struct Table<T> {
    width: usize,
    cells: Vec<T>,
}

impl<T: Amount> Table<T> {
    fn zeros(rows: usize, width: usize) -> Option<Self> {
        let size = rows.checked_mul(width)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(size).ok()?;
        cells.resize(size, T::zero());
        Some(Self { width, cells })
    }
}

impl<T> Index<(usize, usize)> for Table<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, w): (usize, usize)) -> &Self::Output {
        &self.cells[i * self.width + w]
    }
}

impl<T> IndexMut<(usize, usize)> for Table<T> {
    #[inline]
    fn index_mut(&mut self, (i, w): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[i * self.width + w]
    }
}

/// Solve the 0-1 knapsack problem with item `weights` and `values` (of the same length) and given
/// `capacity` by tabulation.
///
/// # Example
/// ```rust
/// # extern crate knapsack;
/// use knapsack::dp;
///
/// let tabulation = dp::knap_sack(50u32, &[10, 20, 30], &[60, 100, 120])
///     .expect("table fits in memory");
///
/// assert_eq!(tabulation.value, 220);
/// assert_eq!(tabulation.selected, vec![2, 3]);
/// assert_eq!(tabulation.weight, 50);
/// ```
pub fn knap_sack<T: Amount>(
    capacity: T,
    weights: &[T],
    values: &[T],
) -> Result<Tabulation<T>, Error> {
    if weights.len() != values.len() {
        return Err(Error::LengthMismatch {
            weights: weights.len(),
            values: values.len(),
        });
    }

    let n = weights.len();

    let too_large = || Error::TableTooLarge {
        items: n,
        capacity: capacity.to_u64().unwrap_or(u64::MAX),
    };

    // columns beyond the total weight of the items that fit would all repeat the last one
    let reach = weights
        .iter()
        .filter(|&&w| w <= capacity)
        .fold(T::zero(), |total, &w| total.saturating_add(w));

    let width = min(capacity, reach)
        .to_usize()
        .and_then(|c| c.checked_add(1))
        .ok_or_else(too_large)?;

    let mut k = Table::zeros(n + 1, width).ok_or_else(too_large)?;

    debug!(rows = n + 1, columns = width, "filling DP table");

    // weights beyond usize cannot fit any column
    let wts = weights
        .iter()
        .map(|w| w.to_usize().unwrap_or(usize::MAX))
        .collect::<Vec<_>>();

    // build the table bottom-up (row 0 stays zero) - O(n * W)
    for i in 1..=n {
        let (wt, val) = (wts[i - 1], values[i - 1]);
        for w in 0..width {
            k[(i, w)] = if wt <= w {
                max(k[(i - 1, w)], val.saturating_add(k[(i - 1, w - wt)]))
            } else {
                k[(i - 1, w)]
            };
        }
    }

    // trace back the decisions that lead to `K[n][W]` - O(n)
    let mut chosen = FixedBitSet::with_capacity(n);
    let mut weight = T::zero();
    let mut w = width - 1;

    for i in (1..=n).rev() {
        if k[(i, w)] != k[(i - 1, w)] {
            // value changed => item `i` must have been packed (so it fits into `w`)
            chosen.insert(i - 1);
            weight = weight.saturating_add(weights[i - 1]);
            w -= wts[i - 1];
        }
    }

    Ok(Tabulation {
        value: k[(n, width - 1)],
        selected: chosen.ones().map(|i| i + 1).collect(),
        weight,
        cells: k.cells.len(),
    })
}

/// Solve the 0-1 knapsack problem for given `items` and `capacity` by [knap_sack].
///
/// Fails only if the table does not fit in memory.
pub fn solve<T: Amount>(items: &[Item<T>], capacity: T) -> Result<(Solution<T>, Stats), Error> {
    let (weights, values): (Vec<T>, Vec<T>) =
        items.iter().map(|item| (item.weight, item.value)).unzip();

    let tabulation = knap_sack(capacity, &weights, &values)?;

    let solution = Solution::from_selection(
        tabulation
            .selected
            .iter()
            .map(|&i| CatalogItem::new(i - 1, &items[i - 1])),
    )?;

    debug_assert_eq!(solution.value, tabulation.value);
    debug_assert_eq!(solution.weight, tabulation.weight);

    Ok((solution, Stats::tabulated(tabulation.cells)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case::classic(&[10, 20, 30], &[60, 100, 120], 50, 220, &[2, 3], 50)]
    #[case::nothing_fits(&[60], &[10], 50, 0, &[], 0)]
    #[case::no_items(&[], &[], 10, 0, &[], 0)]
    #[case::zero_capacity(&[1, 2], &[5, 7], 0, 0, &[], 0)]
    #[case::greedy_is_wrong(&[5, 4, 4], &[10, 6, 6], 8, 12, &[2, 3], 8)]
    #[case::weightless(&[0, 4], &[3, 5], 0, 3, &[1], 0)]
    #[case::worthless(&[1, 1], &[0, 4], 2, 4, &[2], 1)]
    fn tabulate(
        #[case] weights: &[u32],
        #[case] values: &[u32],
        #[case] capacity: u32,
        #[case] value: u32,
        #[case] selected: &[usize],
        #[case] weight: u32,
    ) {
        let tabulation = knap_sack(capacity, weights, values).expect("table fits in memory");

        assert_eq!(tabulation.value, value);
        assert_eq!(tabulation.selected, selected);
        assert_eq!(tabulation.weight, weight);
        let reach: u32 = weights.iter().filter(|&&w| w <= capacity).sum();
        assert_eq!(
            tabulation.cells,
            (weights.len() + 1) * (capacity.min(reach) as usize + 1)
        );
    }

    #[rstest]
    #[case::no_items(&[], &[], u32::MAX, 0, 1)]
    #[case::all_too_heavy(&[70_000, 80_000], &[5, 9], 60_000, 0, 3)]
    #[case::light_items(&[2, 3], &[4, 5], u32::MAX, 9, 3 * 6)]
    #[case::heavy_item_ignored(&[2, 3, 90_000], &[4, 5, 100], 10, 9, 4 * 6)]
    fn table_is_clamped_to_reachable_weight(
        #[case] weights: &[u32],
        #[case] values: &[u32],
        #[case] capacity: u32,
        #[case] value: u32,
        #[case] cells: usize,
    ) {
        let tabulation = knap_sack(capacity, weights, values).expect("small table");

        assert_eq!(tabulation.value, value);
        assert_eq!(tabulation.cells, cells);
    }

    #[test]
    fn length_mismatch() {
        assert_eq!(
            knap_sack(10u8, &[1, 2], &[3]),
            Err(Error::LengthMismatch {
                weights: 2,
                values: 1
            })
        );
    }

    #[test]
    fn solve_items() {
        let items = vec![
            Item::new(11, 60u16, 10u16),
            Item::new(12, 100, 20),
            Item::new(13, 120, 30),
        ];

        let (solution, stats) = solve(&items, 50).expect("table fits in memory");

        assert_eq!(solution.value, 220);
        assert_eq!(solution.weight, 50);
        assert_eq!(solution.keys(), vec![12, 13]);
        assert_eq!(solution.indices(), vec![1, 2]);
        assert_eq!(stats.table_cells, 4 * 51);
        assert!(stats.proved_optimal);
    }
}
