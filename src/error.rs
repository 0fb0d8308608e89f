//! Error types for the mining pipeline

use thiserror::Error;

use crate::itemset::Itemset;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("no transactions supplied")]
    EmptyInput,

    #[error("invalid threshold: {name} = {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// Zero support on a subset of a frequent itemset. Points at a bug in
    /// candidate generation, never at the data.
    #[error("zero support for {itemset} while deriving rules")]
    DegenerateDivision { itemset: Itemset },

    #[error("itemset {itemset} was read before it was scanned")]
    UnscannedItemset { itemset: Itemset },
}

pub type Result<T> = std::result::Result<T, Error>;
