//! # Best-first Branch&Bound
//! Search for an optimal solution of the 0-1 knapsack problem by exploring the binary decision
//! tree (see [tree](crate::tree)) in the order of non-increasing relaxation bounds (see
//! [bound](crate::bound)).
//!
//! The search keeps an *incumbent*, i.e. the best feasible partial solution found so far, and
//! never enqueues a node whose bound does not exceed the incumbent's profit. Since the bound is
//! admissible, the incumbent is optimal once the frontier runs empty.
use std::cmp::max;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use ordered_float::OrderedFloat;
use tracing::{debug, trace, warn};

use crate::tree::{NodeId, SearchNode, Tree};
use crate::{Amount, Catalog, Error, Solution, Stats};

/// Resource limits of a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// wall-clock budget, checked between frontier pops
    pub timeout: Option<Duration>,
}

/// Frontier entry. Ordered by bound first, so the max-heap pops the most promising node; equal
/// bounds are popped from the most recently stored node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    bound: OrderedFloat<f64>,
    node: NodeId,
}

/// Best feasible partial solution found so far.
#[derive(Debug, Clone, Copy)]
struct Incumbent<T> {
    profit: T,
    node: Option<NodeId>,
}

impl<T: Amount> Incumbent<T> {
    fn new() -> Self {
        Self {
            profit: T::zero(),
            node: None,
        }
    }

    /// True iff a subtree with given `bound` might still contain a strictly better solution.
    #[inline]
    fn is_beaten_by(&self, bound: OrderedFloat<f64>) -> bool {
        let profit: f64 = self.profit.into();
        bound > OrderedFloat(profit)
    }

    /// True iff `node` is feasible and strictly more profitable. Ties keep the older incumbent.
    #[inline]
    fn is_improved_by(&self, node: &SearchNode<T>) -> bool {
        node.is_feasible() && node.profit > self.profit
    }
}

/// Search for an optimal selection of items from given `catalog` that fit into `capacity`.
///
/// Returns [Error::TimedOut] if `limits` are exceeded before optimality is proven. Otherwise the
/// returned [Solution] is optimal; if there are more optimal selections, it is unspecified which
/// one is returned.
///
/// # Example
/// ```rust
/// # extern crate knapsack;
/// use knapsack::{bnb, Catalog, Item};
///
/// let items = vec![Item::new(1, 60u32, 10u32), Item::new(2, 100, 20), Item::new(3, 120, 30)];
/// let catalog = Catalog::new(&items);
///
/// let (solution, stats) = bnb::solve(&catalog, 50, bnb::Limits::default())
///     .expect("optimal solution");
///
/// assert_eq!(solution.value, 220);
/// assert_eq!(solution.weight, 50);
/// assert_eq!(solution.keys(), vec![2, 3]);
/// assert!(stats.expanded > 0);
/// ```
pub fn solve<T: Amount>(
    catalog: &Catalog<T>,
    capacity: T,
    limits: Limits,
) -> Result<(Solution<T>, Stats), Error> {
    let start = Instant::now();

    let mut stats = Stats::default();
    let mut tree = Tree::with_capacity(2 * catalog.len() + 1);
    let mut incumbent = Incumbent::new();
    let mut frontier = BinaryHeap::new();

    let root = SearchNode::root(capacity, catalog);

    debug!(
        items = catalog.len(),
        capacity = ?capacity,
        bound = root.bound.into_inner(),
        "starting best-first search"
    );

    let id = tree.insert(root);
    if incumbent.is_beaten_by(root.bound) {
        frontier.push(Candidate {
            bound: root.bound,
            node: id,
        });
    }

    while let Some(Candidate { bound, node: id }) = frontier.pop() {
        if let Some(timeout) = limits.timeout {
            let elapsed = start.elapsed();
            if elapsed >= timeout {
                warn!(
                    ?elapsed,
                    best = ?incumbent.profit,
                    frontier = frontier.len(),
                    "search aborted by time limit"
                );
                return Err(Error::TimedOut { elapsed });
            }
        }

        let node = tree[id];

        // the incumbent may have improved since this node was enqueued
        if !incumbent.is_beaten_by(bound) || node.is_terminal(catalog) {
            stats.discarded += 1;
            continue;
        }

        stats.expanded += 1;

        // branch on the next item in ratio order: include first, then exclude
        let children = [
            node.include(id, capacity, catalog),
            node.exclude(id, capacity, catalog),
        ];

        for child in children.into_iter().flatten() {
            stats.created += 1;

            // an improving child is stored even if pruned below, it is needed for extraction
            let mut stored = None;
            if incumbent.is_improved_by(&child) {
                let child_id = tree.insert(child);
                trace!(
                    profit = ?child.profit,
                    weight = ?child.weight,
                    depth = child.depth,
                    "new incumbent"
                );
                incumbent.profit = child.profit;
                incumbent.node = Some(child_id);
                stats.improvements += 1;
                stored = Some(child_id);
            }

            if incumbent.is_beaten_by(child.bound) {
                let child_id = stored.unwrap_or_else(|| tree.insert(child));
                frontier.push(Candidate {
                    bound: child.bound,
                    node: child_id,
                });
            } else {
                stats.pruned += 1;
            }
        }

        stats.max_frontier = max(stats.max_frontier, frontier.len());
    }

    let solution = match incumbent.node {
        Some(id) => Solution::from_selection(
            tree.extract(id)
                .into_iter()
                .filter_map(|i| catalog.get(i).copied()),
        )?,
        None => Solution::empty(),
    };

    debug_assert_eq!(solution.value, incumbent.profit);

    stats.tree_size = tree.len();
    stats.proved_optimal = true;
    stats.elapsed = start.elapsed();

    debug!(
        value = ?solution.value,
        weight = ?solution.weight,
        selected = solution.items.len(),
        expanded = stats.expanded,
        pruned = stats.pruned,
        tree_size = stats.tree_size,
        "search finished"
    );

    Ok((solution, stats))
}
