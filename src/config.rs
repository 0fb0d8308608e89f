//! Mining parameters and their validation

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_MIN_SUPPORT: f64 = 0.15;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.6;
pub const DEFAULT_MIN_LIFT: f64 = 1.0;
pub const DEFAULT_MAX_KULCZYNSKI: f64 = 0.1;

/// Which orderings of a disjoint pair the co-occurrence scorer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairOrdering {
    /// Both (X, Y) and (Y, X).
    Both,
    /// Only the ordering whose left itemset sorts first.
    Deduplicated,
}

impl Default for PairOrdering {
    fn default() -> Self {
        PairOrdering::Both
    }
}

/// Rule strategy run on top of the frequent itemsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScoringMode {
    /// Association rules with confidence and lift at or above the minimums.
    ConfidenceLift { min_confidence: f64, min_lift: f64 },
    /// Disjoint itemset pairs with a Kulczynski measure below the maximum.
    Kulczynski {
        max_kulczynski: f64,
        #[serde(default)]
        ordering: PairOrdering,
    },
}

impl Default for ScoringMode {
    fn default() -> Self {
        ScoringMode::ConfidenceLift {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            min_lift: DEFAULT_MIN_LIFT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiningConfig {
    pub min_support: f64,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub mode: ScoringMode,
}

impl Default for MiningConfig {
    fn default() -> Self {
        MiningConfig {
            min_support: DEFAULT_MIN_SUPPORT,
            parallel: false,
            mode: ScoringMode::default(),
        }
    }
}

impl MiningConfig {
    pub fn confidence_lift(min_support: f64, min_confidence: f64, min_lift: f64) -> Self {
        MiningConfig {
            min_support,
            parallel: false,
            mode: ScoringMode::ConfidenceLift {
                min_confidence,
                min_lift,
            },
        }
    }

    pub fn kulczynski(min_support: f64, max_kulczynski: f64) -> Self {
        MiningConfig {
            min_support,
            parallel: false,
            mode: ScoringMode::Kulczynski {
                max_kulczynski,
                ordering: PairOrdering::default(),
            },
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// No effect outside Kulczynski mode.
    pub fn with_pair_ordering(mut self, pair_ordering: PairOrdering) -> Self {
        if let ScoringMode::Kulczynski { ordering, .. } = &mut self.mode {
            *ordering = pair_ordering;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_min_support(self.min_support)?;
        match self.mode {
            ScoringMode::ConfidenceLift {
                min_confidence,
                min_lift,
            } => {
                validate_min_confidence(min_confidence)?;
                validate_min_lift(min_lift)
            }
            ScoringMode::Kulczynski { max_kulczynski, .. } => {
                validate_max_kulczynski(max_kulczynski)
            }
        }
    }
}

fn invalid(name: &'static str, value: f64) -> Error {
    Error::InvalidThreshold { name, value }
}

/// Support must lie in (0, 1].
pub fn validate_min_support(value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(invalid("min_support", value))
    }
}

pub fn validate_min_confidence(value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid("min_confidence", value))
    }
}

pub fn validate_min_lift(value: f64) -> Result<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid("min_lift", value))
    }
}

pub fn validate_max_kulczynski(value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid("max_kulczynski", value))
    }
}
