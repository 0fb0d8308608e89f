use log::{debug, trace};

use crate::{
    config::{validate_max_kulczynski, PairOrdering},
    error::Result,
    itemset::Itemset,
    itemsets::ItemsetLattice,
    rules::{nonzero_support, Measure, Rule, RuleStrategy},
};

/// Scores disjoint pairs of frequent itemsets by the Kulczynski measure
/// and keeps the weakly co-occurring ones.
///
/// For a pair `(X, Y)` with `U = X ∪ Y`:
///
/// ```text
/// kulczynski = (sup(U) / sup(X) + sup(U) / sup(Y)) / 2
/// ```
///
/// A pair is kept when the measure is strictly below `max_kulczynski`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoOccurrenceScorer {
    max_kulczynski: f64,
    ordering: PairOrdering,
}

impl CoOccurrenceScorer {
    pub fn new(max_kulczynski: f64, ordering: PairOrdering) -> Result<Self> {
        validate_max_kulczynski(max_kulczynski)?;
        Ok(CoOccurrenceScorer {
            max_kulczynski,
            ordering,
        })
    }

    pub fn score(&self, lattice: &mut ItemsetLattice<'_>) -> Result<Vec<Rule>> {
        let itemsets: Vec<Itemset> = lattice.levels().flatten().into_iter().cloned().collect();
        let num_transactions = lattice.num_transactions() as f64;
        let mut rules = Vec::new();

        for left in &itemsets {
            let left_support = nonzero_support(lattice, left)?;

            for right in &itemsets {
                if !left.is_disjoint(right) {
                    continue;
                }
                if self.ordering == PairOrdering::Deduplicated && left > right {
                    continue;
                }

                // unions beyond the mined levels get one scan, then stay cached
                let union = left.union(right);
                let union_support = lattice.count_or_scan(&union) as f64 / num_transactions;

                let p_left = union_support / left_support;
                let p_right = union_support / nonzero_support(lattice, right)?;
                let kulczynski = (p_left + p_right) / 2.0;

                trace!("{} ~ {}: kulczynski {:.3}", left, right, kulczynski);

                if kulczynski < self.max_kulczynski {
                    rules.push(Rule {
                        antecedent: left.clone(),
                        consequent: right.clone(),
                        confidence: p_left,
                        measure: Measure::Kulczynski(kulczynski),
                    });
                }
            }
        }

        debug!(
            "{} itemset pairs below kulczynski {}",
            rules.len(),
            self.max_kulczynski
        );

        Ok(rules)
    }
}

impl RuleStrategy for CoOccurrenceScorer {
    fn derive(&self, lattice: &mut ItemsetLattice<'_>) -> Result<Vec<Rule>> {
        self.score(lattice)
    }
}
