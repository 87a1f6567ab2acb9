use crate::config::{StrategyWeights, SweepParams};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The eight high/low combinations of the three weights.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownStrategy {
    AllHigh,
    HistoryBalance,
    HistoryPattern,
    HistoryHeavy,
    BalancePattern,
    BalanceHeavy,
    PatternHeavy,
    AllLow,
}

impl KnownStrategy {
    /// Which of (history, balance, pattern) take the high weight.
    pub fn emphasis(&self) -> (bool, bool, bool) {
        match self {
            Self::AllHigh => (true, true, true),
            Self::HistoryBalance => (true, true, false),
            Self::HistoryPattern => (true, false, true),
            Self::HistoryHeavy => (true, false, false),
            Self::BalancePattern => (false, true, true),
            Self::BalanceHeavy => (false, true, false),
            Self::PatternHeavy => (false, false, true),
            Self::AllLow => (false, false, false),
        }
    }

    pub fn weights(&self, high: f64, low: f64) -> StrategyWeights {
        let pick = |emphasized: bool| if emphasized { high } else { low };
        let (h, b, p) = self.emphasis();
        StrategyWeights::new(pick(h), pick(b), pick(p))
    }
}

/// A labelled weight configuration fed to the sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategySpec {
    pub label: String,
    pub weights: StrategyWeights,
}

impl StrategySpec {
    pub fn new(label: impl Into<String>, weights: StrategyWeights) -> Self {
        Self {
            label: label.into(),
            weights,
        }
    }
}

pub fn catalogue(params: &SweepParams) -> Vec<StrategySpec> {
    KnownStrategy::iter()
        .map(|s| {
            StrategySpec::new(
                s.to_string(),
                s.weights(params.weight_high, params.weight_low),
            )
        })
        .collect()
}
