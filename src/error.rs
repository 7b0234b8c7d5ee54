use std::time::Duration;

use thiserror::Error;

/// Reasons why a solver did not produce a solution.
///
/// Note that infeasibility is not an error: instances where nothing fits are solved by an empty
/// selection of value zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Branch and bound ran out of its wall-clock budget before the frontier emptied.
    #[error("search exceeded its time budget after {elapsed:?}")]
    TimedOut { elapsed: Duration },

    /// The `(n + 1) x (capacity + 1)` table of the DP solver cannot be allocated.
    #[error("DP table for {items} items and capacity {capacity} does not fit in memory")]
    TableTooLarge { items: usize, capacity: u64 },

    /// Weights and values passed to the DP solver describe different numbers of items.
    #[error("got {weights} item weights but {values} item values")]
    LengthMismatch { weights: usize, values: usize },

    /// Total weight of a selection exceeds what the amount type can represent.
    #[error("total weight of the selected items overflows")]
    WeightOverflow,
}
