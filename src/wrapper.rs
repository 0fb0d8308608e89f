use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::{
    config::{MiningConfig, PairOrdering},
    error::Error,
    itemset::Itemset,
    run, MiningReport,
};

type PyItemset = Vec<String>;
type PyItemsets = Vec<(PyItemset, f64)>;
type PyRules = Vec<(PyItemset, PyItemset, f64, f64)>;

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pymodule]
fn apriori_rules(_: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(association_rules, m)?)?;
    m.add_function(wrap_pyfunction!(co_occurrence, m)?)?;
    Ok(())
}

/// Apriori with association rules kept by confidence and lift.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_support, min_confidence, min_lift, /)")]
fn association_rules(
    transactions: Vec<Vec<String>>,
    min_support: f64,
    min_confidence: f64,
    min_lift: f64,
) -> PyResult<(PyItemsets, PyRules)> {
    let config = MiningConfig::confidence_lift(min_support, min_confidence, min_lift);
    Ok(convert_report(&run(transactions, &config)?))
}

/// Apriori with disjoint itemset pairs kept below a Kulczynski maximum.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_support, max_kulczynski, deduplicate, /)")]
fn co_occurrence(
    transactions: Vec<Vec<String>>,
    min_support: f64,
    max_kulczynski: f64,
    deduplicate: bool,
) -> PyResult<(PyItemsets, PyRules)> {
    let ordering = if deduplicate {
        PairOrdering::Deduplicated
    } else {
        PairOrdering::Both
    };
    let config = MiningConfig::kulczynski(min_support, max_kulczynski).with_pair_ordering(ordering);
    Ok(convert_report(&run(transactions, &config)?))
}

fn convert_report(report: &MiningReport) -> (PyItemsets, PyRules) {
    let names = |itemset: &Itemset| -> PyItemset {
        report
            .index
            .names(itemset)
            .into_iter()
            .map(String::from)
            .collect()
    };

    let itemsets = report
        .itemsets
        .iter()
        .map(|item| (names(&item.itemset), item.support))
        .collect();
    let rules = report
        .rules
        .iter()
        .map(|rule| {
            (
                names(&rule.antecedent),
                names(&rule.consequent),
                rule.confidence,
                rule.measure.value(),
            )
        })
        .collect();

    (itemsets, rules)
}
