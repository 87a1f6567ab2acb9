pub mod balance;
pub mod frequency;
pub mod pattern;
pub mod types;

pub use self::types::ScoreDetails;
use crate::config::{SelectionParams, StrategyWeights};
use crate::stats::FrequencyStatistics;

/// Composite scorer over a fixed, read-only set of statistics.
///
/// Shared between concurrent selection runs; every call takes its own RNG.
#[derive(Debug, Clone)]
pub struct Scorer {
    stats: FrequencyStatistics,
    params: SelectionParams,
    // Cached once per statistics table
    max_pair_frequency: u32,
}

impl Scorer {
    pub fn new(stats: FrequencyStatistics, params: SelectionParams) -> Self {
        let max_pair_frequency = stats.max_pair_frequency();
        Self {
            stats,
            params,
            max_pair_frequency,
        }
    }

    pub fn stats(&self) -> &FrequencyStatistics {
        &self.stats
    }

    pub fn params(&self) -> &SelectionParams {
        &self.params
    }

    pub fn max_pair_frequency(&self) -> u32 {
        self.max_pair_frequency
    }

    /// Composite score used by the selection loop.
    #[inline(always)]
    pub fn score(
        &self,
        candidate: u8,
        selected: &[u8],
        weights: &StrategyWeights,
        rng: &mut fastrand::Rng,
    ) -> f64 {
        let (freq, bal, pat) = self.sub_scores(candidate, selected);
        let jitter = rng.f64() * self.params.jitter;
        weights.history * freq + weights.balance * bal + weights.pattern * pat + jitter
    }

    /// Weighted components of `score` without the jitter term.
    pub fn breakdown(
        &self,
        candidate: u8,
        selected: &[u8],
        weights: &StrategyWeights,
    ) -> ScoreDetails {
        let frequency = frequency::frequency_score(&self.stats, candidate);
        let bal = balance::balance_score(candidate, selected, &self.params);
        let (pat, pair, gap) = pattern::pattern_score(
            &self.stats,
            candidate,
            selected,
            self.max_pair_frequency,
            self.params.gap_tolerance,
        );

        ScoreDetails {
            candidate,
            frequency,
            balance: bal,
            pattern: pat,
            pair,
            gap,
            jitter: 0.0,
            total: weights.history * frequency + weights.balance * bal + weights.pattern * pat,
        }
    }

    #[inline(always)]
    fn sub_scores(&self, candidate: u8, selected: &[u8]) -> (f64, f64, f64) {
        let freq = frequency::frequency_score(&self.stats, candidate);
        let bal = balance::balance_score(candidate, selected, &self.params);
        let (pat, _, _) = pattern::pattern_score(
            &self.stats,
            candidate,
            selected,
            self.max_pair_frequency,
            self.params.gap_tolerance,
        );
        (freq, bal, pat)
    }
}
