pub mod kulczynski;
pub mod rule;
pub mod search;


use crate::{
    config::ScoringMode,
    error::{Error, Result},
    itemset::Itemset,
    itemsets::ItemsetLattice,
};

pub use kulczynski::CoOccurrenceScorer;
pub use rule::{Measure, Rule};
pub use search::RuleDeriver;

/// A scoring pass over a mined lattice.
///
/// Takes the lattice mutably because a strategy may need counts for itemsets
/// the mining loop never generated.
pub trait RuleStrategy {
    fn derive(&self, lattice: &mut ItemsetLattice<'_>) -> Result<Vec<Rule>>;
}

/// Build the strategy selected by `mode`, validating its thresholds.
pub fn strategy_for(mode: &ScoringMode) -> Result<Box<dyn RuleStrategy>> {
    Ok(match *mode {
        ScoringMode::ConfidenceLift {
            min_confidence,
            min_lift,
        } => Box::new(RuleDeriver::new(min_confidence, min_lift)?),
        ScoringMode::Kulczynski {
            max_kulczynski,
            ordering,
        } => Box::new(CoOccurrenceScorer::new(max_kulczynski, ordering)?),
    })
}

/// Support of a subset of a frequent itemset. Zero here means the lattice
/// is broken, not that the data is unusual.
pub(crate) fn nonzero_support(lattice: &ItemsetLattice<'_>, itemset: &Itemset) -> Result<f64> {
    let support = lattice.support(itemset)?;
    if support > 0.0 {
        Ok(support)
    } else {
        Err(Error::DegenerateDivision {
            itemset: itemset.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{itemsets::FrequencyTable, transactions::TransactionIndex};

    #[test]
    fn zero_support_is_degenerate() {
        let index = TransactionIndex::new(vec![vec!["a"], vec!["b"]]).unwrap();
        let mut lattice = ItemsetLattice::mine(&index, 0.5).unwrap();
        let a = index.itemset(&["a"]).unwrap();
        let ab = index.itemset(&["a", "b"]).unwrap();

        assert_eq!(lattice.count_or_scan(&ab), 0);
        assert_eq!(nonzero_support(&lattice, &a), Ok(0.5));
        assert_eq!(
            nonzero_support(&lattice, &ab),
            Err(Error::DegenerateDivision { itemset: ab })
        );
    }

    #[test]
    fn unscanned_support_is_reported() {
        let index = TransactionIndex::new(vec![vec!["a"], vec!["b"]]).unwrap();
        let lattice = ItemsetLattice::mine(&index, 0.5).unwrap();
        let ab = index.itemset(&["a", "b"]).unwrap();

        // {a, b} was a candidate; the join never builds anything wider
        assert_eq!(lattice.count(&ab), Ok(0));
        let abc = Itemset::from(vec![0, 1, 2]);
        assert_eq!(
            nonzero_support(&lattice, &abc),
            Err(Error::UnscannedItemset { itemset: abc })
        );
    }

    #[test]
    fn zero_support_subset_fails_rule_derivation() {
        let index = TransactionIndex::new(vec![vec!["a", "b"], vec!["a", "b"]]).unwrap();
        let a = index.itemset(&["a"]).unwrap();
        let (levels, _) = ItemsetLattice::mine(&index, 0.5).unwrap().into_parts();

        let mut frequency = FrequencyTable::new();
        frequency.record(a.clone(), 0);
        frequency.record(index.itemset(&["b"]).unwrap(), 2);
        frequency.record(index.itemset(&["a", "b"]).unwrap(), 2);
        let mut lattice = ItemsetLattice::from_parts(&index, 0.5, levels, frequency).unwrap();

        let strategy = strategy_for(&ScoringMode::ConfidenceLift {
            min_confidence: 0.0,
            min_lift: 0.0,
        })
        .unwrap();

        assert_eq!(
            strategy.derive(&mut lattice),
            Err(Error::DegenerateDivision { itemset: a })
        );
    }
}
