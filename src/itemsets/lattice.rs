use itertools::Itertools;
use log::{debug, info};

use crate::{
    combi::join_step,
    config::validate_min_support,
    error::{Error, Result},
    itemset::Itemset,
    itemsets::{count::SupportCounter, frequency::FrequencyTable},
    transactions::TransactionIndex,
    types::{Candidates, ItemsetLength, Levels},
};

/// Frequent itemsets grouped by size. Only non-empty levels are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelResult {
    levels: Levels,
}

impl LevelResult {
    pub fn level(&self, size: ItemsetLength) -> Option<&Candidates> {
        self.levels.get(&size)
    }

    /// Levels in ascending size order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemsetLength, &Candidates)> {
        self.levels.iter().map(|(&size, itemsets)| (size, itemsets))
    }

    /// Every frequent itemset across all levels, smallest first and in
    /// canonical order within a level.
    pub fn flatten(&self) -> Vec<&Itemset> {
        self.levels
            .values()
            .flat_map(|itemsets| itemsets.iter().sorted())
            .collect()
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.level(itemset.len())
            .map_or(false, |itemsets| itemsets.contains(itemset))
    }

    pub fn max_level(&self) -> Option<ItemsetLength> {
        self.levels.keys().next_back().copied()
    }

    /// Number of frequent itemsets over all levels.
    pub fn total(&self) -> usize {
        self.levels.values().map(|itemsets| itemsets.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    fn insert(&mut self, size: ItemsetLength, itemsets: Candidates) {
        if !itemsets.is_empty() {
            self.levels.insert(size, itemsets);
        }
    }
}

/// A frequent itemset together with its occurrence count and support.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemset {
    pub itemset: Itemset,
    pub count: u32,
    pub support: f64,
}

/// Level-wise Apriori search over one transaction index.
///
/// Owns the per-level survivors and the frequency table for the whole run.
/// Rule strategies read both afterwards; the co-occurrence scorer may add
/// union counts to the table through [`ItemsetLattice::count_or_scan`].
#[derive(Debug, Clone)]
pub struct ItemsetLattice<'t> {
    index: &'t TransactionIndex,
    counter: SupportCounter<'t>,
    levels: LevelResult,
    frequency: FrequencyTable,
}

impl<'t> ItemsetLattice<'t> {
    pub fn mine(index: &'t TransactionIndex, min_support: f64) -> Result<Self> {
        Self::mine_with(index, min_support, false)
    }

    /// Seed with the frequent 1-itemsets, then join and filter one level at
    /// a time until a level has no survivors.
    pub fn mine_with(
        index: &'t TransactionIndex,
        min_support: f64,
        parallel: bool,
    ) -> Result<Self> {
        validate_min_support(min_support)?;
        if index.is_empty() {
            return Err(Error::EmptyInput);
        }

        let counter =
            SupportCounter::new(index.transactions(), min_support).with_parallel(parallel);
        let mut frequency = FrequencyTable::new();
        let mut levels = LevelResult::default();

        debug!("Counting itemsets of length 1.");
        let mut current = counter.filter_by_min_support(index.singletons(), &mut frequency);
        let mut size: ItemsetLength = 1;

        while !current.is_empty() {
            debug!("Counting itemsets of length {}.", size + 1);
            let candidates = join_step(&current, size + 1);
            levels.insert(size, current);
            current = counter.filter_by_min_support(candidates, &mut frequency);
            size += 1;
        }

        info!(
            "Found {} frequent itemsets up to length {} ({} itemsets counted)",
            levels.total(),
            levels.max_level().unwrap_or(0),
            frequency.len()
        );

        Ok(ItemsetLattice {
            index,
            counter,
            levels,
            frequency,
        })
    }

    /// Rebuild a lattice from the parts of an earlier run over the same
    /// index, e.g. to score a stored report in another mode. The counts are
    /// taken as recorded.
    pub fn from_parts(
        index: &'t TransactionIndex,
        min_support: f64,
        levels: LevelResult,
        frequency: FrequencyTable,
    ) -> Result<Self> {
        validate_min_support(min_support)?;
        if index.is_empty() {
            return Err(Error::EmptyInput);
        }

        Ok(ItemsetLattice {
            index,
            counter: SupportCounter::new(index.transactions(), min_support),
            levels,
            frequency,
        })
    }

    pub fn index(&self) -> &'t TransactionIndex {
        self.index
    }

    pub fn levels(&self) -> &LevelResult {
        &self.levels
    }

    pub fn frequency(&self) -> &FrequencyTable {
        &self.frequency
    }

    pub fn num_transactions(&self) -> usize {
        self.counter.num_transactions()
    }

    pub fn min_support(&self) -> f64 {
        self.counter.min_support()
    }

    /// Recorded count; never scans.
    pub fn count(&self, itemset: &Itemset) -> Result<u32> {
        self.frequency
            .count(itemset)
            .ok_or_else(|| Error::UnscannedItemset {
                itemset: itemset.clone(),
            })
    }

    pub fn support(&self, itemset: &Itemset) -> Result<f64> {
        Ok(self.count(itemset)? as f64 / self.num_transactions() as f64)
    }

    /// Recorded count, scanning the transactions once and caching the result
    /// if the itemset has not been counted yet.
    pub fn count_or_scan(&mut self, itemset: &Itemset) -> u32 {
        if let Some(count) = self.frequency.count(itemset) {
            return count;
        }
        let count = self.counter.count(itemset);
        self.frequency.record(itemset.clone(), count);
        count
    }

    /// Every retained itemset with its support, smallest itemsets first.
    pub fn frequent_itemsets(&self) -> Result<Vec<FrequentItemset>> {
        self.levels
            .flatten()
            .into_iter()
            .map(|itemset| {
                let count = self.count(itemset)?;
                Ok(FrequentItemset {
                    itemset: itemset.clone(),
                    count,
                    support: count as f64 / self.num_transactions() as f64,
                })
            })
            .collect()
    }

    pub fn into_parts(self) -> (LevelResult, FrequencyTable) {
        (self.levels, self.frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashset;

    const A: &str = "Item A";
    const B: &str = "Item B";
    const C: &str = "Item C";
    const D: &str = "Item D";

    fn itemset(index: &TransactionIndex, names: &[&str]) -> Itemset {
        index.itemset(names).unwrap()
    }

    #[test]
    fn test_generate_frequent_itemsets_001_minsupport() {
        let index = TransactionIndex::new(vec![vec![A, B], vec![A, C], vec![A, B, C], vec![B, D]])
            .unwrap();
        let lattice = ItemsetLattice::mine(&index, 0.01).unwrap();
        let levels = lattice.levels();

        assert_eq!(
            levels.level(1).unwrap(),
            &hashset! {
                itemset(&index, &[A]),
                itemset(&index, &[B]),
                itemset(&index, &[C]),
                itemset(&index, &[D]),
            }
        );
        assert_eq!(
            levels.level(2).unwrap(),
            &hashset! {
                itemset(&index, &[A, B]),
                itemset(&index, &[A, C]),
                itemset(&index, &[B, C]),
                itemset(&index, &[B, D]),
            }
        );
        assert_eq!(
            levels.level(3).unwrap(),
            &hashset! { itemset(&index, &[A, B, C]) }
        );
        assert_eq!(levels.level(4), None);
        assert_eq!(levels.max_level(), Some(3));
        assert_eq!(lattice.count(&itemset(&index, &[A, B, C])), Ok(1));
    }

    #[test]
    fn test_generate_frequent_itemsets_05_minsupport() {
        let index = TransactionIndex::new(vec![vec![A, B], vec![A, C], vec![A, B, C], vec![B, D]])
            .unwrap();
        let lattice = ItemsetLattice::mine(&index, 0.5).unwrap();
        let levels = lattice.levels();

        assert_eq!(
            levels.level(1).unwrap(),
            &hashset! {
                itemset(&index, &[A]),
                itemset(&index, &[B]),
                itemset(&index, &[C]),
            }
        );
        assert_eq!(
            levels.level(2).unwrap(),
            &hashset! {
                itemset(&index, &[A, B]),
                itemset(&index, &[A, C]),
            }
        );
        assert_eq!(levels.level(3), None);
        assert_eq!(levels.total(), 5);

        // infrequent items and pairs are counted all the same
        assert_eq!(lattice.count(&itemset(&index, &[D])), Ok(1));
        assert_eq!(lattice.count(&itemset(&index, &[B, C])), Ok(1));
    }

    #[test]
    fn nothing_frequent_leaves_no_levels() {
        let index = TransactionIndex::new(vec![vec![A], vec![B], vec![C]]).unwrap();
        let lattice = ItemsetLattice::mine(&index, 0.5).unwrap();

        assert!(lattice.levels().is_empty());
        assert_eq!(lattice.levels().max_level(), None);
        assert_eq!(lattice.frequency().len(), 3);
    }

    #[test]
    fn unscanned_itemset_is_an_error() {
        let index = TransactionIndex::new(vec![vec![A], vec![B], vec![C]]).unwrap();
        let lattice = ItemsetLattice::mine(&index, 0.5).unwrap();
        let ab = itemset(&index, &[A, B]);

        assert_eq!(
            lattice.support(&ab),
            Err(Error::UnscannedItemset { itemset: ab })
        );
    }

    #[test]
    fn count_or_scan_caches() {
        let index = TransactionIndex::new(vec![vec![A, B], vec![A, B], vec![C]]).unwrap();
        let mut lattice = ItemsetLattice::mine(&index, 0.9).unwrap();
        let abc = itemset(&index, &[A, B, C]);
        let ab = itemset(&index, &[A, B]);

        assert_eq!(lattice.frequency().count(&ab), None);
        assert_eq!(lattice.count_or_scan(&ab), 2);
        assert_eq!(lattice.count_or_scan(&abc), 0);
        assert_eq!(lattice.frequency().count(&ab), Some(2));
        assert_eq!(lattice.frequency().count(&abc), Some(0));
    }

    #[test]
    fn frequent_itemsets_report_support() {
        let index = TransactionIndex::new(vec![vec![A, B], vec![A], vec![A, B], vec![C]]).unwrap();
        let lattice = ItemsetLattice::mine(&index, 0.5).unwrap();
        let items = lattice.frequent_itemsets().unwrap();

        assert_eq!(
            items,
            vec![
                FrequentItemset {
                    itemset: itemset(&index, &[A]),
                    count: 3,
                    support: 0.75,
                },
                FrequentItemset {
                    itemset: itemset(&index, &[B]),
                    count: 2,
                    support: 0.5,
                },
                FrequentItemset {
                    itemset: itemset(&index, &[A, B]),
                    count: 2,
                    support: 0.5,
                },
            ]
        );
    }

    #[test]
    fn invalid_min_support_is_rejected() {
        let index = TransactionIndex::new(vec![vec![A]]).unwrap();

        for &min_support in &[0.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(
                ItemsetLattice::mine(&index, min_support),
                Err(Error::InvalidThreshold { name: "min_support", .. })
            ));
        }
    }

    #[test]
    fn min_support_of_one() {
        let index = TransactionIndex::new(vec![vec![A, B], vec![A, B, C]]).unwrap();
        let lattice = ItemsetLattice::mine(&index, 1.0).unwrap();

        assert_eq!(
            lattice.levels().flatten(),
            vec![
                &itemset(&index, &[A]),
                &itemset(&index, &[B]),
                &itemset(&index, &[A, B]),
            ]
        );
    }

    #[test]
    fn from_parts_restores_a_run() {
        let index = TransactionIndex::new(vec![vec![A, B], vec![A, B, C], vec![C]]).unwrap();
        let mined = ItemsetLattice::mine(&index, 0.5).unwrap();
        let expected = mined.frequent_itemsets().unwrap();
        let (levels, frequency) = mined.into_parts();

        let restored = ItemsetLattice::from_parts(&index, 0.5, levels, frequency).unwrap();

        assert_eq!(restored.frequent_itemsets().unwrap(), expected);
        assert_eq!(restored.min_support(), 0.5);
        assert!(matches!(
            ItemsetLattice::from_parts(&index, 0.0, LevelResult::default(), FrequencyTable::new()),
            Err(Error::InvalidThreshold { name: "min_support", .. })
        ));
    }
}
