use std::time::Duration;

use itertools::Itertools;

use crate::{Amount, CatalogItem, Error};

/// Item of a [Solution] identified both by its key and its position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selected {
    pub key: u64,
    pub original_index: usize,
}

impl<T> From<&CatalogItem<T>> for Selected {
    fn from(item: &CatalogItem<T>) -> Self {
        Self {
            key: item.key,
            original_index: item.original_index,
        }
    }
}

/// Data structure holding the selected items together with their total `value` and `weight`.
///
/// Selected items are always ordered by their position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<T> {
    /// total value of the selected items (the objective)
    pub value: T,
    /// total weight of the selected items
    pub weight: T,
    /// selected items in ascending order of `original_index`
    pub items: Vec<Selected>,
}

impl<T: Amount> Solution<T> {
    /// Solution that packs nothing.
    pub fn empty() -> Self {
        Self {
            value: T::zero(),
            weight: T::zero(),
            items: Vec::new(),
        }
    }

    /// Build a solution out of the selected items given in any order.
    ///
    /// The total value saturates at `T::max_value()`. A total weight that overflows `T` cannot
    /// fit any capacity and is reported as [Error::WeightOverflow].
    pub(crate) fn from_selection<I>(selection: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = CatalogItem<T>>,
    {
        let selection = selection
            .into_iter()
            .sorted_by_key(|item| item.original_index)
            .collect_vec();

        let mut value = T::zero();
        let mut weight = T::zero();
        for item in selection.iter() {
            value = value.saturating_add(item.value);
            weight = weight
                .checked_add(&item.weight)
                .ok_or(Error::WeightOverflow)?;
        }

        Ok(Self {
            value,
            weight,
            items: selection.iter().map(Selected::from).collect(),
        })
    }

    /// Keys of the selected items in input order.
    ///
    /// # Example
    /// ```
    /// # extern crate knapsack;
    /// use knapsack::{Selected, Solution};
    ///
    /// let solution = Solution {
    ///     value: 220u32,
    ///     weight: 50,
    ///     items: vec![
    ///         Selected { key: 12, original_index: 1 },
    ///         Selected { key: 7, original_index: 2 },
    ///     ],
    /// };
    /// assert_eq!(solution.keys(), vec![12, 7]);
    /// ```
    pub fn keys(&self) -> Vec<u64> {
        self.items.iter().map(|item| item.key).collect()
    }

    /// Input positions of the selected items in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        self.items.iter().map(|item| item.original_index).collect()
    }
}

/// Data structure that contains various statistics collected while solving.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// no. nodes popped from the frontier and branched on
    pub expanded: u64,
    /// no. child nodes generated
    pub created: u64,
    /// no. child nodes not enqueued because their bound could not beat the incumbent
    pub pruned: u64,
    /// no. nodes popped from the frontier without branching (bound outdated or leaf)
    pub discarded: u64,
    /// no. times a better incumbent was found
    pub improvements: u64,
    /// maximum size of the frontier
    pub max_frontier: usize,
    /// no. nodes stored in the search tree
    pub tree_size: usize,
    /// no. cells of the DP table
    pub table_cells: usize,
    /// elapsed time since solving started
    pub elapsed: Duration,
    /// true iff the solution is known to be optimal
    pub proved_optimal: bool,
}

impl Stats {
    /// Create new stats for the DP algorithm. All search-related statistics are set to 0 and the
    /// solution is optimal by definition.
    pub fn tabulated(table_cells: usize) -> Self {
        Self {
            table_cells,
            proved_optimal: true,
            ..Self::default()
        }
    }
}
