use chrono::NaiveDate;

/// Highest number in the draw pool. Numbers run `1..=POOL_MAX`.
pub const POOL_MAX: u8 = 50;

/// Main numbers per draw and per generated ticket.
pub const PICK_COUNT: usize = 7;

/// Numbers `<= LOW_MAX` are "low", the rest are "high".
pub const LOW_MAX: u8 = 25;

pub const POOL_MIDPOINT: f64 = 25.5;

/// Neutral pattern score used before anything is selected.
pub const NEUTRAL_PATTERN_SCORE: f64 = 0.5;

/// Gap score when the candidate's distance misses the average gap.
pub const GAP_MISS_SCORE: f64 = 0.5;

/// High-number target of the fixed balance policy.
pub const FIXED_HIGH_TARGET: usize = 3;

/// Heatmap grid layout (row-major).
pub const GRID_ROWS: usize = 10;
pub const GRID_COLS: usize = 5;

pub const DEFAULT_CUTOFF: &str = "2019-07-01";

pub fn default_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 7, 1).unwrap_or_default()
}

#[inline(always)]
pub fn is_high(n: u8) -> bool {
    n > LOW_MAX
}

#[inline(always)]
pub fn is_even(n: u8) -> bool {
    n % 2 == 0
}
