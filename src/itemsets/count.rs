use log::{debug, trace};
use rayon::prelude::*;

use crate::{
    itemset::Itemset,
    itemsets::frequency::FrequencyTable,
    transactions::Transaction,
    types::Candidates,
};

/// Counts candidate occurrences against the transaction list and keeps the
/// ones meeting the minimum support.
#[derive(Debug, Clone, Copy)]
pub struct SupportCounter<'t> {
    transactions: &'t [Transaction],
    min_support: f64,
    parallel: bool,
}

impl<'t> SupportCounter<'t> {
    pub fn new(transactions: &'t [Transaction], min_support: f64) -> Self {
        SupportCounter {
            transactions,
            min_support,
            parallel: false,
        }
    }

    /// Count candidates on the rayon pool. Each candidate is counted on its
    /// own and the table is written afterwards from the calling thread.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn num_transactions(&self) -> usize {
        self.transactions.len()
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    /// One full scan: number of transactions containing `itemset`.
    pub fn count(&self, itemset: &Itemset) -> u32 {
        self.transactions
            .iter()
            .filter(|transaction| transaction.len() >= itemset.len())
            .filter(|transaction| transaction.contains(itemset))
            .count() as u32
    }

    pub fn is_frequent(&self, count: u32) -> bool {
        count as f64 / self.num_transactions() as f64 >= self.min_support
    }

    /// Scan every candidate not yet in `frequency`, record its count, and
    /// return the candidates whose support is at least the minimum.
    pub fn filter_by_min_support(
        &self,
        candidates: Candidates,
        frequency: &mut FrequencyTable,
    ) -> Candidates {
        let num_candidates = candidates.len();
        let (cached, fresh): (Vec<Itemset>, Vec<Itemset>) = candidates
            .into_iter()
            .partition(|candidate| frequency.is_scanned(candidate));

        let counted: Vec<(Itemset, u32)> = if self.parallel {
            fresh
                .into_par_iter()
                .map(|candidate| {
                    let count = self.count(&candidate);
                    (candidate, count)
                })
                .collect()
        } else {
            fresh
                .into_iter()
                .map(|candidate| {
                    let count = self.count(&candidate);
                    (candidate, count)
                })
                .collect()
        };

        let mut survivors = Candidates::with_capacity(num_candidates);

        for (candidate, count) in counted {
            trace!("{} occurs {} times", candidate, count);
            frequency.record(candidate.clone(), count);
            if self.is_frequent(count) {
                survivors.insert(candidate);
            }
        }

        for candidate in cached {
            if frequency
                .count(&candidate)
                .map_or(false, |count| self.is_frequent(count))
            {
                survivors.insert(candidate);
            }
        }

        debug!(
            "{} of {} candidates meet min support {}",
            survivors.len(),
            num_candidates,
            self.min_support
        );

        survivors
    }
}
