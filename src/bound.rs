//! Upper bound on the profit reachable from a partial solution.
//!
//! The bound relaxes the integrality of the remaining items, i.e. it solves the *fractional*
//! knapsack on them. With items sorted by value/weight ratio (see [Catalog]) the fractional
//! optimum is greedy: take whole items while they fit and then the fitting fraction of the first
//! one that does not.
use ordered_float::OrderedFloat;

use crate::{Amount, Catalog};

/// Compute the fractional relaxation bound of a partial solution in which the first `depth`
/// catalog items have been decided and the included ones sum up to `profit` and `weight`.
///
/// The result is `0` for an overweight (infeasible) prefix. Otherwise it is never below the best
/// profit of any feasible completion of the prefix, so it can be used to prune a maximizing
/// search.
///
/// # Example
/// ```
/// # extern crate knapsack;
/// use knapsack::{bound::fractional_bound, Catalog, Item};
///
/// let items = vec![Item::new(1, 60u32, 10u32), Item::new(2, 100, 20), Item::new(3, 120, 30)];
/// let catalog = Catalog::new(&items);
///
/// // root: 60 + 100 + 20/30 * 120
/// assert_eq!(fractional_bound(0, 0, 0, 50, &catalog).into_inner(), 240.);
///
/// // first item excluded: 100 + 120 fit exactly
/// assert_eq!(fractional_bound(1, 0, 0, 50, &catalog).into_inner(), 220.);
/// ```
pub fn fractional_bound<T: Amount>(
    depth: usize,
    profit: T,
    weight: T,
    capacity: T,
    catalog: &Catalog<T>,
) -> OrderedFloat<f64> {
    if weight > capacity {
        return OrderedFloat(0.);
    }

    let mut residual = capacity - weight;
    let mut bound: f64 = profit.into();

    for item in catalog.iter().skip(depth) {
        if item.weight <= residual {
            residual = residual - item.weight;
            let value: f64 = item.value.into();
            bound += value;
        } else {
            // `item.weight > residual >= 0` so the division is well defined. Dividing last keeps
            // the result from being rounded below an integral optimum.
            let residual: f64 = residual.into();
            let value: f64 = item.value.into();
            let weight: f64 = item.weight.into();
            bound += residual * value / weight;
            break;
        }
    }

    OrderedFloat(bound)
}
