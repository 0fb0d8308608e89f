use std::fmt::{Display, Formatter};
use std::iter::FromIterator;

use itertools::Itertools;

use crate::types::ItemId;

/// An immutable, duplicate-free set of items.
///
/// Stored as a strictly ascending `Vec<ItemId>` so that equality and hashing
/// are structural and two itemsets holding the same items always compare
/// equal regardless of how they were built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Itemset(Vec<ItemId>);

impl Itemset {
    pub fn new<I: IntoIterator<Item = ItemId>>(items: I) -> Self {
        let mut items: Vec<ItemId> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Itemset(items)
    }

    pub fn singleton(item: ItemId) -> Self {
        Itemset(vec![item])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[ItemId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.0.iter()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.0.binary_search(&item).is_ok()
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        Itemset(self.0.iter().merge(other.0.iter()).dedup().copied().collect())
    }

    /// Size of `self ∪ other` without allocating the union.
    pub fn union_len(&self, other: &Itemset) -> usize {
        self.0.iter().merge(other.0.iter()).dedup().count()
    }

    pub fn difference(&self, other: &Itemset) -> Itemset {
        Itemset(
            self.0
                .iter()
                .copied()
                .filter(|&item| !other.contains(item))
                .collect(),
        )
    }

    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        !self.0.iter().any(|&item| other.contains(item))
    }

    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        self.len() <= other.len() && self.0.iter().all(|&item| other.contains(item))
    }

    /// Every non-empty strict subset, smallest first.
    pub fn proper_subsets(&self) -> impl Iterator<Item = Itemset> + '_ {
        (1..self.len()).flat_map(move |size| {
            // combinations keep the input order, so each subset stays sorted
            self.0.iter().copied().combinations(size).map(Itemset)
        })
    }
}

impl From<Vec<ItemId>> for Itemset {
    fn from(items: Vec<ItemId>) -> Self {
        Itemset::new(items)
    }
}

impl FromIterator<ItemId> for Itemset {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Itemset::new(iter)
    }
}

impl Display for Itemset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}
