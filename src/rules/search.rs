use itertools::Itertools;
use log::{debug, trace};

use crate::{
    config::{validate_min_confidence, validate_min_lift},
    error::Result,
    itemset::Itemset,
    itemsets::ItemsetLattice,
    rules::{nonzero_support, Measure, Rule, RuleStrategy},
};

/// Association rules scored by confidence and lift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleDeriver {
    min_confidence: f64,
    min_lift: f64,
}

impl RuleDeriver {
    pub fn new(min_confidence: f64, min_lift: f64) -> Result<Self> {
        validate_min_confidence(min_confidence)?;
        validate_min_lift(min_lift)?;
        Ok(RuleDeriver {
            min_confidence,
            min_lift,
        })
    }

    /// Generate rules from every frequent itemset of length 2 or more.
    pub fn generate_rules(&self, lattice: &ItemsetLattice<'_>) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();

        for (_, itemsets) in lattice.levels().iter().filter(|&(size, _)| size > 1) {
            for itemset in itemsets.iter().sorted() {
                rules.extend(self.split(itemset, lattice)?);
            }
        }

        debug!(
            "{} rules meet confidence {} and lift {}",
            rules.len(),
            self.min_confidence,
            self.min_lift
        );

        Ok(rules)
    }

    /// Every `antecedent => itemset \ antecedent` split of one frequent
    /// itemset that meets both thresholds.
    pub fn split(&self, itemset: &Itemset, lattice: &ItemsetLattice<'_>) -> Result<Vec<Rule>> {
        let union_support = lattice.support(itemset)?;
        let mut rules = Vec::new();

        for antecedent in itemset.proper_subsets() {
            let consequent = itemset.difference(&antecedent);
            let confidence = union_support / nonzero_support(lattice, &antecedent)?;
            let lift = confidence / nonzero_support(lattice, &consequent)?;

            trace!(
                "{} => {}: confidence {:.3}, lift {:.3}",
                antecedent,
                consequent,
                confidence,
                lift
            );

            if confidence >= self.min_confidence && lift >= self.min_lift {
                rules.push(Rule {
                    antecedent,
                    consequent,
                    confidence,
                    measure: Measure::Lift(lift),
                });
            }
        }

        Ok(rules)
    }
}

impl RuleStrategy for RuleDeriver {
    fn derive(&self, lattice: &mut ItemsetLattice<'_>) -> Result<Vec<Rule>> {
        self.generate_rules(lattice)
    }
}
