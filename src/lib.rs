//! Frequent itemset mining with the Apriori level-wise search, and two rule
//! strategies on top of the mined itemsets:
//!
//! - association rules kept by minimum confidence and lift
//! - disjoint itemset pairs kept by a maximum Kulczynski measure
//!
//! ```
//! use apriori_rules::{run, MiningConfig};
//!
//! let transactions = vec![
//!     vec!["milk", "bread"],
//!     vec!["milk", "bread", "butter"],
//!     vec!["bread", "butter"],
//!     vec!["milk"],
//! ];
//! let report = run(transactions, &MiningConfig::confidence_lift(0.5, 0.6, 0.8)).unwrap();
//!
//! assert_eq!(report.levels.max_level(), Some(2));
//! assert_eq!(report.rules.len(), 4);
//! ```

pub mod combi;
pub mod config;
pub mod error;
pub mod itemset;
pub mod itemsets;
pub mod rules;
pub mod transactions;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

use log::info;

pub use config::{MiningConfig, PairOrdering, ScoringMode};
pub use error::{Error, Result};
pub use itemset::Itemset;
pub use itemsets::{FrequencyTable, FrequentItemset, ItemsetLattice, LevelResult};
pub use rules::{CoOccurrenceScorer, Measure, Rule, RuleDeriver, RuleStrategy};
pub use transactions::{Transaction, TransactionIndex};

/// Mine every itemset whose support is at least `min_support`.
pub fn mine_frequent_itemsets(
    index: &TransactionIndex,
    min_support: f64,
) -> Result<ItemsetLattice<'_>> {
    ItemsetLattice::mine(index, min_support)
}

/// Association rules with `confidence >= min_confidence` and `lift >= min_lift`.
pub fn derive_association_rules(
    lattice: &ItemsetLattice<'_>,
    min_confidence: f64,
    min_lift: f64,
) -> Result<Vec<Rule>> {
    RuleDeriver::new(min_confidence, min_lift)?.generate_rules(lattice)
}

/// Disjoint frequent itemset pairs with a Kulczynski measure below
/// `max_kulczynski`.
pub fn score_co_occurrence(
    lattice: &mut ItemsetLattice<'_>,
    max_kulczynski: f64,
    ordering: PairOrdering,
) -> Result<Vec<Rule>> {
    CoOccurrenceScorer::new(max_kulczynski, ordering)?.score(lattice)
}

/// Everything one run produces. Owns its data; nothing points back into the
/// lattice that built it.
#[derive(Debug, Clone)]
pub struct MiningReport {
    pub index: TransactionIndex,
    pub levels: LevelResult,
    pub frequency: FrequencyTable,
    pub itemsets: Vec<FrequentItemset>,
    pub rules: Vec<Rule>,
}

/// Index the records, mine the frequent itemsets and run the rule strategy
/// selected by `config.mode`. Thresholds are checked before any record is
/// read.
pub fn run<I, R, T>(records: I, config: &MiningConfig) -> Result<MiningReport>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    config.validate()?;
    let strategy = rules::strategy_for(&config.mode)?;
    let index = TransactionIndex::new(records)?;

    let (levels, frequency, itemsets, rules) = {
        let mut lattice = ItemsetLattice::mine_with(&index, config.min_support, config.parallel)?;
        let itemsets = lattice.frequent_itemsets()?;
        let rules = strategy.derive(&mut lattice)?;
        let (levels, frequency) = lattice.into_parts();
        (levels, frequency, itemsets, rules)
    };

    info!(
        "Mined {} frequent itemsets and {} rules from {} transactions",
        itemsets.len(),
        rules.len(),
        index.len()
    );

    Ok(MiningReport {
        index,
        levels,
        frequency,
        itemsets,
        rules,
    })
}
