//! Implicit binary decision tree explored by branch and bound.
//!
//! Node `N` at depth `d` has decided the first `d` items of a [Catalog]. Its two children decide
//! item `d`: the *include* child packs it, the *exclude* child skips it. Nodes are stored in an
//! append-only arena ([Tree]) and refer to their parent by [NodeId], which is all that is needed
//! to reconstruct the selected items from a leaf.
use std::ops::Index;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::bound::fractional_bound;
use crate::{Amount, Catalog};

/// Index of a [SearchNode] in its [Tree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Partial solution of a knapsack instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode<T> {
    /// number of catalog items decided so far (`0` at the root)
    pub depth: usize,
    /// total value of the included items
    pub profit: T,
    /// total weight of the included items, saturated at `T::max_value()`
    pub weight: T,
    /// true iff the included items do not fit into the capacity
    pub overweight: bool,
    /// relaxation bound on the profit of any completion, fixed at creation
    pub bound: OrderedFloat<f64>,
    /// `None` iff this is the root
    pub parent: Option<NodeId>,
    /// catalog index of the item this node included, `None` for exclude nodes and the root
    pub item: Option<usize>,
}

impl<T: Amount> SearchNode<T> {
    /// Create the root node with nothing decided.
    pub fn root(capacity: T, catalog: &Catalog<T>) -> Self {
        Self {
            depth: 0,
            profit: T::zero(),
            weight: T::zero(),
            overweight: false,
            bound: fractional_bound(0, T::zero(), T::zero(), capacity, catalog),
            parent: None,
            item: None,
        }
    }

    /// Catalog index of the last decided item, `None` at the root.
    #[inline]
    pub fn level(&self) -> Option<usize> {
        self.depth.checked_sub(1)
    }

    /// True iff all catalog items have been decided.
    #[inline]
    pub fn is_terminal(&self, catalog: &Catalog<T>) -> bool {
        self.depth >= catalog.len()
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        !self.overweight
    }

    /// Child of this node (identified by `id`) which packs the next catalog item.
    ///
    /// Returns `None` if this node is terminal.
    pub fn include(&self, id: NodeId, capacity: T, catalog: &Catalog<T>) -> Option<Self> {
        let item = catalog.get(self.depth)?;

        let depth = self.depth + 1;
        let profit = self.profit.saturating_add(item.value);

        // a sum that overflows `T` exceeds any capacity
        let weight = self.weight.checked_add(&item.weight);
        let overweight = self.overweight || weight.map_or(true, |w| w > capacity);
        let weight = weight.unwrap_or_else(T::max_value);

        Some(Self {
            depth,
            profit,
            weight,
            overweight,
            bound: bound(depth, profit, weight, overweight, capacity, catalog),
            parent: Some(id),
            item: Some(self.depth),
        })
    }

    /// Child of this node (identified by `id`) which skips the next catalog item.
    ///
    /// Returns `None` if this node is terminal.
    pub fn exclude(&self, id: NodeId, capacity: T, catalog: &Catalog<T>) -> Option<Self> {
        if self.is_terminal(catalog) {
            return None;
        }

        let depth = self.depth + 1;

        Some(Self {
            depth,
            profit: self.profit,
            weight: self.weight,
            overweight: self.overweight,
            bound: bound(
                depth,
                self.profit,
                self.weight,
                self.overweight,
                capacity,
                catalog,
            ),
            parent: Some(id),
            item: None,
        })
    }
}

#[inline]
fn bound<T: Amount>(
    depth: usize,
    profit: T,
    weight: T,
    overweight: bool,
    capacity: T,
    catalog: &Catalog<T>,
) -> OrderedFloat<f64> {
    if overweight {
        OrderedFloat(0.)
    } else {
        fractional_bound(depth, profit, weight, capacity, catalog)
    }
}

/// Append-only arena of [SearchNode]s linked to their parents.
#[derive(Debug, Clone, Default)]
pub struct Tree<T> {
    nodes: Vec<SearchNode<T>>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Store `node` and return its identifier. Its parent (if any) must be in this tree already.
    pub fn insert(&mut self, node: SearchNode<T>) -> NodeId {
        debug_assert!(node.parent.map_or(true, |p| p.index() < self.nodes.len()));
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode<T>> {
        self.nodes.get(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the path from node `id` (inclusive) up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, T> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// Collect catalog indices of the items included on the path from the root to node `id`, in
    /// the order in which they were decided.
    pub fn extract(&self, id: NodeId) -> Vec<usize> {
        let mut items = self.ancestors(id).filter_map(|n| n.item).collect_vec();
        items.reverse();
        items
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = SearchNode<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

/// Iterator following parent links, see [Tree::ancestors].
pub struct Ancestors<'a, T> {
    tree: &'a Tree<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = &'a SearchNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.get(self.next?)?;
        self.next = node.parent;
        Some(node)
    }
}
