use std::collections::hash_map::{Entry, Iter};

use log::trace;

use crate::{itemset::Itemset, types::ItemsetCounts};

/// Occurrence counts shared by the mining loop and the rule strategies.
///
/// Counts are written once, the first time an itemset is scanned against the
/// transaction list, and only read afterwards. `count` returns `None` for an
/// itemset that was never scanned so that "absent" and "not yet counted"
/// stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    counts: ItemsetCounts,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, itemset: &Itemset) -> Option<u32> {
        self.counts.get(itemset).copied()
    }

    pub fn is_scanned(&self, itemset: &Itemset) -> bool {
        self.counts.contains_key(itemset)
    }

    /// Store the count of a freshly scanned itemset. The first write wins.
    pub fn record(&mut self, itemset: Itemset, count: u32) {
        match self.counts.entry(itemset) {
            Entry::Vacant(entry) => {
                entry.insert(count);
            }
            Entry::Occupied(entry) => {
                trace!("{} already counted, keeping {}", entry.key(), entry.get());
            }
        }
    }

    /// `count / num_transactions`, or `None` if unscanned.
    pub fn support(&self, itemset: &Itemset, num_transactions: usize) -> Option<f64> {
        self.count(itemset)
            .map(|count| count as f64 / num_transactions as f64)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Itemset, u32> {
        self.counts.iter()
    }
}
