use std::fmt::{Display, Formatter};

use crate::{itemset::Itemset, transactions::TransactionIndex};

/// Interestingness score attached to a rule, depending on the strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    Lift(f64),
    Kulczynski(f64),
}

impl Measure {
    pub fn value(&self) -> f64 {
        match *self {
            Measure::Lift(value) | Measure::Kulczynski(value) => value,
        }
    }
}

/// `antecedent => consequent`, two disjoint itemsets.
///
/// `confidence` is `support(antecedent ∪ consequent) / support(antecedent)`
/// in both modes; for co-occurrence pairs that is P(union | left).
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub confidence: f64,
    pub measure: Measure,
}

impl Rule {
    pub fn lift(&self) -> Option<f64> {
        match self.measure {
            Measure::Lift(lift) => Some(lift),
            Measure::Kulczynski(_) => None,
        }
    }

    pub fn kulczynski(&self) -> Option<f64> {
        match self.measure {
            Measure::Kulczynski(kulczynski) => Some(kulczynski),
            Measure::Lift(_) => None,
        }
    }

    /// The itemset the rule was split from.
    pub fn itemset(&self) -> Itemset {
        self.antecedent.union(&self.consequent)
    }

    /// Antecedent and consequent as item names.
    pub fn names<'i>(&self, index: &'i TransactionIndex) -> (Vec<&'i str>, Vec<&'i str>) {
        (index.names(&self.antecedent), index.names(&self.consequent))
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {}", self.antecedent, self.consequent)
    }
}
