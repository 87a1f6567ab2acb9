use crate::consts::{GAP_MISS_SCORE, NEUTRAL_PATTERN_SCORE};
use crate::stats::FrequencyStatistics;

/// Mean normalized co-occurrence of `candidate` with each selected number.
#[inline(always)]
pub fn pair_score(
    stats: &FrequencyStatistics,
    candidate: u8,
    selected: &[u8],
    max_pair_frequency: u32,
) -> f64 {
    if selected.is_empty() {
        return NEUTRAL_PATTERN_SCORE;
    }
    let max = max_pair_frequency.max(1) as f64;
    let sum: f64 = selected
        .iter()
        .map(|&s| stats.pair_frequency(s, candidate) as f64 / max)
        .sum();
    sum / selected.len() as f64
}

/// 1.0 when the step from the current maximum lands near the historical
/// average gap, `GAP_MISS_SCORE` otherwise.
#[inline(always)]
pub fn gap_score(average_gap: f64, candidate: u8, selected: &[u8], tolerance: f64) -> f64 {
    let Some(&max) = selected.iter().max() else {
        return NEUTRAL_PATTERN_SCORE;
    };
    let distance = (candidate as f64 - max as f64).abs();
    if (distance - average_gap).abs() <= tolerance {
        1.0
    } else {
        GAP_MISS_SCORE
    }
}

/// Returns `(pattern, pair, gap)`. Neutral across the board for an empty selection.
pub fn pattern_score(
    stats: &FrequencyStatistics,
    candidate: u8,
    selected: &[u8],
    max_pair_frequency: u32,
    tolerance: f64,
) -> (f64, f64, f64) {
    if selected.is_empty() {
        return (
            NEUTRAL_PATTERN_SCORE,
            NEUTRAL_PATTERN_SCORE,
            NEUTRAL_PATTERN_SCORE,
        );
    }
    let pair = pair_score(stats, candidate, selected, max_pair_frequency);
    let gap = gap_score(stats.average_gap(), candidate, selected, tolerance);
    ((pair + gap) / 2.0, pair, gap)
}
