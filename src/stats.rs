use crate::consts::{PICK_COUNT, POOL_MAX};
use crate::draws::HistoricalDataset;
use crate::error::{LfResult, LottoError};
use std::collections::BTreeMap;
use tracing::debug;

/// Aggregate statistics over a `HistoricalDataset`.
///
/// Always recomputed from scratch; nothing here is updated incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyStatistics {
    /// Indexed by number; slot 0 is unused.
    number_frequency: [u32; POOL_MAX as usize + 1],
    /// Keyed by `(low, high)` with `low < high`.
    pair_frequency: BTreeMap<(u8, u8), u32>,
    average_gap: f64,
    total_draws: usize,
}

impl FrequencyStatistics {
    pub fn compute(dataset: &HistoricalDataset) -> LfResult<Self> {
        if dataset.is_empty() {
            return Err(LottoError::EmptyDataset {
                dataset: dataset.label().to_string(),
                cutoff: dataset.cutoff(),
            });
        }

        let mut number_frequency = [0u32; POOL_MAX as usize + 1];
        let mut pair_frequency = BTreeMap::new();
        let mut gap_sum = 0u64;
        let mut gap_count = 0u64;

        for record in dataset.records() {
            let sorted = record.sorted_numbers();

            for &n in &sorted {
                number_frequency[n as usize] += 1;
            }

            // 21 unordered pairs; sorted input keeps i < j => a < b.
            for i in 0..PICK_COUNT {
                for j in (i + 1)..PICK_COUNT {
                    *pair_frequency.entry((sorted[i], sorted[j])).or_insert(0) += 1;
                }
            }

            for w in sorted.windows(2) {
                gap_sum += (w[1] - w[0]) as u64;
                gap_count += 1;
            }
        }

        let average_gap = if gap_count > 0 {
            gap_sum as f64 / gap_count as f64
        } else {
            0.0
        };

        debug!(
            "📈 Stats: {} draws, {} distinct pairs, avg gap {:.3}",
            dataset.len(),
            pair_frequency.len(),
            average_gap
        );

        Ok(Self {
            number_frequency,
            pair_frequency,
            average_gap,
            total_draws: dataset.len(),
        })
    }

    /// Appearances of `n`; 0 for numbers outside the pool.
    pub fn number_frequency(&self, n: u8) -> u32 {
        self.number_frequency.get(n as usize).copied().unwrap_or(0)
    }

    /// Co-appearances of two numbers, in either order. 0 when `a == b`.
    pub fn pair_frequency(&self, a: u8, b: u8) -> u32 {
        let key = if a < b { (a, b) } else { (b, a) };
        self.pair_frequency.get(&key).copied().unwrap_or(0)
    }

    pub fn pairs(&self) -> &BTreeMap<(u8, u8), u32> {
        &self.pair_frequency
    }

    pub fn average_gap(&self) -> f64 {
        self.average_gap
    }

    pub fn total_draws(&self) -> usize {
        self.total_draws
    }

    /// `(number, count)` for every number in the pool, ascending by number.
    pub fn frequencies(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        (1..=POOL_MAX).map(move |n| (n, self.number_frequency[n as usize]))
    }

    pub fn total_appearances(&self) -> u64 {
        self.number_frequency.iter().map(|&c| c as u64).sum()
    }

    /// Largest pair count, or 1 when there are no observed pairs so that
    /// normalized pair scores stay finite.
    pub fn max_pair_frequency(&self) -> u32 {
        self.pair_frequency
            .values()
            .copied()
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// Pairs sorted by descending count, ties by ascending pair.
    pub fn top_pairs(&self, limit: usize) -> Vec<((u8, u8), u32)> {
        let mut pairs: Vec<((u8, u8), u32)> =
            self.pair_frequency.iter().map(|(&k, &v)| (k, v)).collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        pairs.truncate(limit);
        pairs
    }

    /// Stats with an empty pair table, for exercising the degenerate path.
    #[doc(hidden)]
    pub fn from_parts(
        number_frequency: [u32; POOL_MAX as usize + 1],
        pair_frequency: BTreeMap<(u8, u8), u32>,
        average_gap: f64,
        total_draws: usize,
    ) -> Self {
        Self {
            number_frequency,
            pair_frequency,
            average_gap,
            total_draws,
        }
    }
}
