use std::ops::Index;
use std::slice::Iter;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::Amount;

/// Single knapsack item as given by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item<T> {
    /// external identifier of the item (not necessarily unique or ordered)
    pub key: u64,
    /// profit gained by packing the item
    pub value: T,
    /// capacity consumed by packing the item
    pub weight: T,
}

impl<T> Item<T> {
    pub fn new(key: u64, value: T, weight: T) -> Self {
        Self { key, value, weight }
    }
}

/// An [Item] that remembers its position in the caller's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CatalogItem<T> {
    /// position of the item in the original input
    pub original_index: usize,
    pub key: u64,
    pub value: T,
    pub weight: T,
}

impl<T: Amount> CatalogItem<T> {
    pub fn new(original_index: usize, item: &Item<T>) -> Self {
        Self {
            original_index,
            key: item.key,
            value: item.value,
            weight: item.weight,
        }
    }

    /// Profit per unit of weight. Weightless items have an infinite ratio.
    pub fn ratio(&self) -> OrderedFloat<f64> {
        if self.weight.is_zero() {
            return OrderedFloat(f64::INFINITY);
        }
        let value: f64 = self.value.into();
        let weight: f64 = self.weight.into();
        OrderedFloat(value / weight)
    }
}

/// Immutable sequence of items sorted in non-increasing order of their value/weight ratio.
///
/// This is the order in which branch and bound decides items and in which the relaxation bound
/// fills the residual capacity. The sort is stable, i.e. items with equal ratios keep their input
/// order.
///
/// # Example
/// ```
/// # extern crate knapsack;
/// use knapsack::{Catalog, Item};
///
/// let items = vec![Item::new(7, 60u32, 30u32), Item::new(8, 50, 10), Item::new(9, 1, 0)];
/// let catalog = Catalog::new(&items);
///
/// let order: Vec<usize> = catalog.iter().map(|item| item.original_index).collect();
/// assert_eq!(order, vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog<T> {
    items: Vec<CatalogItem<T>>,
}

impl<T: Amount> Catalog<T> {
    pub fn new(items: &[Item<T>]) -> Self {
        // O(n * log(n))
        let items = items
            .iter()
            .enumerate()
            .map(|(i, item)| CatalogItem::new(i, item))
            .sorted_by(|x, y| x.ratio().cmp(&y.ratio()).reverse())
            .collect_vec();

        Self { items }
    }
}

impl<T> Catalog<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&CatalogItem<T>> {
        self.items.get(i)
    }

    pub fn iter(&self) -> Iter<'_, CatalogItem<T>> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[CatalogItem<T>] {
        &self.items
    }
}

impl<T> Index<usize> for Catalog<T> {
    type Output = CatalogItem<T>;

    fn index(&self, i: usize) -> &Self::Output {
        &self.items[i]
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a CatalogItem<T>;
    type IntoIter = Iter<'a, CatalogItem<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn sorted_by_ratio() {
        let items = vec![
            Item::new(1, 60u32, 10u32),
            Item::new(2, 100, 20),
            Item::new(3, 120, 30),
            Item::new(4, 90, 10),
        ];

        let catalog = Catalog::new(&items);

        let keys = catalog.iter().map(|item| item.key).collect_vec();
        assert_eq!(keys, vec![4, 1, 2, 3]);

        let ratios = catalog.iter().map(|item| item.ratio().into_inner()).collect_vec();
        assert_eq!(ratios, vec![9., 6., 5., 4.]);
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec![
            Item::new(5, 2u8, 1u8),
            Item::new(6, 4, 2),
            Item::new(7, 6, 3),
        ];

        let catalog = Catalog::new(&items);

        let order = catalog.iter().map(|item| item.original_index).collect_vec();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[rstest]
    #[case::weightless(5, 0, f64::INFINITY)]
    #[case::worthless(0, 5, 0.)]
    #[case::fractional(3, 2, 1.5)]
    fn ratio(#[case] value: u16, #[case] weight: u16, #[case] expected: f64) {
        let item = CatalogItem::new(0, &Item::new(0, value, weight));
        assert_eq!(item.ratio(), OrderedFloat(expected));
    }

    #[test]
    fn empty() {
        let catalog = Catalog::<u32>::new(&[]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get(0).is_none());
    }
}
