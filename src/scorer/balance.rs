use crate::config::{BalancePolicy, SelectionParams};
use crate::consts::{is_even, is_high, FIXED_HIGH_TARGET, PICK_COUNT, POOL_MIDPOINT};

/// Balance sub-score for adding `candidate` to `selected`.
pub fn balance_score(candidate: u8, selected: &[u8], params: &SelectionParams) -> f64 {
    if selected.is_empty() {
        return midpoint_proximity(candidate);
    }

    let total = selected.len() + 1;
    let high = selected.iter().filter(|&&n| is_high(n)).count() + is_high(candidate) as usize;
    let even = selected.iter().filter(|&&n| is_even(n)).count() + is_even(candidate) as usize;

    let high_low = match params.balance_policy {
        BalancePolicy::Proportional => ratio_balance(high, total),
        BalancePolicy::FixedHighTarget => fixed_target_balance(high, total),
    };
    let even_odd = ratio_balance(even, total);

    let mut score = (high_low + even_odd) / 2.0;
    if locks_extreme_split(high, total) {
        score *= params.extreme_split_penalty;
    }
    score
}

/// 1.0 at the pool midpoint, 0.0 at either end.
#[inline(always)]
pub fn midpoint_proximity(candidate: u8) -> f64 {
    let half_span = POOL_MIDPOINT - 1.0;
    let d = (candidate as f64 - POOL_MIDPOINT).abs();
    (1.0 - d / half_span).clamp(0.0, 1.0)
}

/// `1 - 2|0.5 - count/total|`: 1.0 for an even split, 0.0 when one-sided.
#[inline(always)]
pub fn ratio_balance(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    let ratio = count as f64 / total as f64;
    1.0 - 2.0 * (0.5 - ratio).abs()
}

/// 1.0 while a final split of exactly `FIXED_HIGH_TARGET` high numbers is still reachable.
#[inline(always)]
pub fn fixed_target_balance(high: usize, total: usize) -> f64 {
    let low = total - high;
    if high <= FIXED_HIGH_TARGET && low <= PICK_COUNT - FIXED_HIGH_TARGET {
        1.0
    } else {
        0.0
    }
}

/// True when no choice for the remaining slots can avoid an all-high or all-low ticket.
#[inline(always)]
pub fn locks_extreme_split(high: usize, total: usize) -> bool {
    let remaining = PICK_COUNT.saturating_sub(total);
    // Reachable final high counts are high..=high + remaining.
    high >= PICK_COUNT || high + remaining == 0
}
