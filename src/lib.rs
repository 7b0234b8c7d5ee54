//! # 0-1 knapsack
//! This crate solves the **0-1 knapsack problem**: given items with an integer value and weight
//! and a weight capacity `W`, choose a subset of items that maximizes the total value while the
//! total weight stays within `W`. The problem is *NP-hard* in general.
//!
//! ## Solvers
//! There are two independent exact algorithms:
//!  1. A best-first **Branch&Bound (BnB)** search over the binary include/exclude decision tree
//!     that prunes subtrees with a fractional (LP) relaxation bound, see [`bnb`]
//!  1. A bottom-up **dynamic programming** tabulation running in `O(n*W)` time and memory, see
//!     [`dp`]
//!
//! Both consume the same input and produce the same [Solution], so one can be used to
//! cross-check the other. The [Solver] enum selects the algorithm at runtime.
//!
//! ## Example
//! ```rust
//! # extern crate knapsack;
//! use knapsack::{Item, Solver};
//!
//! let items: Vec<Item<u32>> = vec![
//!     Item::new(1, 60, 10),
//!     Item::new(2, 100, 20),
//!     Item::new(3, 120, 30),
//! ];
//!
//! let (bnb, _) = Solver::default().solve(&items, 50).expect("solution");
//! let (dp, _) = Solver::DynamicProgramming.solve(&items, 50).expect("solution");
//!
//! assert_eq!(bnb.value, 220);
//! assert_eq!(bnb.value, dp.value);
//! assert_eq!(bnb.keys(), vec![2, 3]);
//! ```
use std::fmt::Debug;
use std::time::{Duration, Instant};

use num_traits::{PrimInt, Unsigned};

pub mod bnb;
pub mod bound;
pub mod catalog;
pub mod dp;
pub mod error;
pub mod solution;
pub mod tree;

pub use catalog::{Catalog, CatalogItem, Item};
pub use error::Error;
pub use solution::{Selected, Solution, Stats};

/// Integer type of item values, item weights and the knapsack capacity.
///
/// Amounts are unsigned (negative values or weights are not part of the problem) and must
/// convert losslessly to `f64` which is used by the relaxation bound.
pub trait Amount: PrimInt + Unsigned + Debug + Into<f64> {}

impl<T> Amount for T where T: PrimInt + Unsigned + Debug + Into<f64> {}

/// Selects the algorithm used to solve a knapsack instance.
///
/// # Example
/// ```rust
/// # extern crate knapsack;
/// use std::time::Duration;
/// use knapsack::{Item, Solver};
///
/// let items = vec![Item::new(1, 10u32, 60u32)];
/// let solver = Solver::BranchAndBound { timeout: Some(Duration::from_secs(1)) };
///
/// // the only item does not fit
/// let (solution, stats) = solver.solve(&items, 50).expect("solution");
/// assert_eq!(solution.value, 0);
/// assert!(solution.items.is_empty());
/// assert!(stats.proved_optimal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    /// Best-first branch and bound, optionally aborted after given wall-clock `timeout`
    BranchAndBound { timeout: Option<Duration> },
    /// Bottom-up tabulation over item count and residual capacity
    DynamicProgramming,
}

impl Default for Solver {
    fn default() -> Self {
        Self::BranchAndBound { timeout: None }
    }
}

impl Solver {
    /// Run the algorithm selected by this instance on given `items` and `capacity`.
    ///
    /// Degenerate instances (no items, zero capacity, no item fitting) are solved with an empty
    /// selection. An error is returned only if the selected algorithm runs out of its budget
    /// (time for BnB, memory for DP).
    pub fn solve<T: Amount>(
        &self,
        items: &[Item<T>],
        capacity: T,
    ) -> Result<(Solution<T>, Stats), Error> {
        let start = Instant::now();

        let (solution, mut stats) = match *self {
            Self::BranchAndBound { timeout } => {
                let catalog = Catalog::new(items);
                bnb::solve(&catalog, capacity, bnb::Limits { timeout })?
            }
            Self::DynamicProgramming => dp::solve(items, capacity)?,
        };

        stats.elapsed = start.elapsed();
        Ok((solution, stats))
    }
}
