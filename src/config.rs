use crate::consts::default_cutoff;
use crate::error::{LfResult, LottoError};
use chrono::NaiveDate;
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum_macros::Display;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub dataset: DatasetParams,
    #[command(flatten)]
    pub weights: StrategyWeights,
    #[command(flatten)]
    pub selection: SelectionParams,
}

#[derive(Args, Debug, Clone)]
pub struct DatasetParams {
    #[arg(long, default_value = "data/lottery_results.csv")]
    pub data: PathBuf,

    /// First date of the current draw mechanism; earlier draws are ignored.
    #[arg(long, default_value = crate::consts::DEFAULT_CUTOFF)]
    pub cutoff: NaiveDate,
}

impl Default for DatasetParams {
    fn default() -> Self {
        Self {
            data: PathBuf::from("data/lottery_results.csv"),
            cutoff: default_cutoff(),
        }
    }
}

/// Linear combination weights of the three sub-scores. They need not sum to 1.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyWeights {
    #[arg(long = "w-history", default_value_t = 0.2)]
    pub history: f64,
    #[arg(long = "w-balance", default_value_t = 0.7)]
    pub balance: f64,
    #[arg(long = "w-pattern", default_value_t = 0.2)]
    pub pattern: f64,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            history: 0.2,
            balance: 0.7,
            pattern: 0.2,
        }
    }
}

impl StrategyWeights {
    pub fn new(history: f64, balance: f64, pattern: f64) -> Self {
        Self {
            history,
            balance,
            pattern,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LfResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlay the weights the user typed on the command line; defaults are ignored.
    pub fn merge_from_cli(&mut self, cli_weights: &StrategyWeights, matches: &ArgMatches) {
        let explicit = |id: &str| matches.value_source(id) == Some(ValueSource::CommandLine);

        if explicit("history") {
            self.history = cli_weights.history;
        }
        if explicit("balance") {
            self.balance = cli_weights.balance;
        }
        if explicit("pattern") {
            self.pattern = cli_weights.pattern;
        }
    }

    pub fn validate(&self, label: &str) -> LfResult<()> {
        for (name, w) in [
            ("history", self.history),
            ("balance", self.balance),
            ("pattern", self.pattern),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(LottoError::InvalidWeights {
                    label: label.to_string(),
                    reason: format!("{} weight must be a non-negative number, got {}", name, w),
                });
            }
        }
        Ok(())
    }
}

#[derive(ValueEnum, Display, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BalancePolicy {
    /// Drive the high/low and even/odd ratios toward 50/50.
    Proportional,
    /// Aim for exactly three high numbers out of seven.
    FixedHighTarget,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionParams {
    /// Upper bound of the uniform tie-breaking noise added to each score.
    #[arg(long, default_value_t = 0.1)]
    pub jitter: f64,

    /// Allowed distance from the average gap for a full gap score.
    #[arg(long, default_value_t = 3.0)]
    pub gap_tolerance: f64,

    /// Balance multiplier for candidates that lock in an all-high or all-low ticket.
    #[arg(long, default_value_t = 0.1)]
    pub extreme_split_penalty: f64,

    #[arg(long, value_enum, default_value_t = BalancePolicy::Proportional)]
    pub balance_policy: BalancePolicy,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            jitter: 0.1,
            gap_tolerance: 3.0,
            extreme_split_penalty: 0.1,
            balance_policy: BalancePolicy::Proportional,
        }
    }
}

impl SelectionParams {
    /// Same parameters without noise, for fully deterministic runs.
    pub fn without_jitter(mut self) -> Self {
        self.jitter = 0.0;
        self
    }

    /// Rejects non-finite or out-of-range values.
    pub fn validate(&self) -> LfResult<()> {
        let bad = |field: &str, value: f64, expected: &str| {
            Err(LottoError::Config(format!(
                "{} must be {}, got {}",
                field, expected, value
            )))
        };

        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return bad("jitter", self.jitter, "a non-negative number");
        }
        if !self.gap_tolerance.is_finite() || self.gap_tolerance < 0.0 {
            return bad("gap_tolerance", self.gap_tolerance, "a non-negative number");
        }
        if !(0.0..=1.0).contains(&self.extreme_split_penalty) {
            return bad(
                "extreme_split_penalty",
                self.extreme_split_penalty,
                "between 0 and 1",
            );
        }
        Ok(())
    }
}

#[derive(Args, Debug, Clone)]
pub struct SweepParams {
    #[arg(long, default_value_t = 5)]
    pub runs_per_strategy: usize,
    #[arg(long, default_value_t = 0.7)]
    pub weight_high: f64,
    #[arg(long, default_value_t = 0.2)]
    pub weight_low: f64,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            runs_per_strategy: 5,
            weight_high: 0.7,
            weight_low: 0.2,
        }
    }
}
