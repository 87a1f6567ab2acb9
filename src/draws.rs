use crate::consts::{GRID_COLS, PICK_COUNT, POOL_MAX};
use crate::error::{LfResult, LottoError};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::info;

/// One historical draw. Validated on construction and never mutated after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRecord {
    date: NaiveDate,
    numbers: [u8; PICK_COUNT],
    bonus: Option<u8>,
}

impl DrawRecord {
    pub fn new(date: NaiveDate, numbers: &[u8]) -> LfResult<Self> {
        Self::with_bonus(date, numbers, None)
    }

    pub fn with_bonus(date: NaiveDate, numbers: &[u8], bonus: Option<u8>) -> LfResult<Self> {
        let invalid = |reason: String| LottoError::InvalidDraw { date, reason };

        if numbers.len() != PICK_COUNT {
            return Err(invalid(format!(
                "expected {} numbers, found {}",
                PICK_COUNT,
                numbers.len()
            )));
        }

        let mut seen = [false; POOL_MAX as usize + 1];
        for &n in numbers {
            if n < 1 || n > POOL_MAX {
                return Err(invalid(format!("number {} outside 1-{}", n, POOL_MAX)));
            }
            if seen[n as usize] {
                return Err(invalid(format!("duplicate number {}", n)));
            }
            seen[n as usize] = true;
        }

        if let Some(b) = bonus {
            if b < 1 || b > POOL_MAX {
                return Err(invalid(format!("bonus {} outside 1-{}", b, POOL_MAX)));
            }
        }

        let mut arr = [0u8; PICK_COUNT];
        arr.copy_from_slice(numbers);

        Ok(Self {
            date,
            numbers: arr,
            bonus,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Numbers in storage order.
    pub fn numbers(&self) -> &[u8; PICK_COUNT] {
        &self.numbers
    }

    pub fn sorted_numbers(&self) -> [u8; PICK_COUNT] {
        let mut sorted = self.numbers;
        sorted.sort_unstable();
        sorted
    }

    pub fn bonus(&self) -> Option<u8> {
        self.bonus
    }
}

/// Chronologically ordered draws on or after `cutoff`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalDataset {
    label: String,
    cutoff: NaiveDate,
    records: Vec<DrawRecord>,
}

impl HistoricalDataset {
    pub fn new(label: impl Into<String>, records: Vec<DrawRecord>, cutoff: NaiveDate) -> Self {
        let label = label.into();
        let total = records.len();

        let mut records: Vec<DrawRecord> =
            records.into_iter().filter(|r| r.date >= cutoff).collect();
        records.sort_by_key(|r| r.date);

        info!(
            "🗂️  Dataset '{}': kept {} of {} draws on or after {}",
            label,
            records.len(),
            total,
            cutoff
        );

        Self {
            label,
            cutoff,
            records,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }
}

/// Draws run on Wednesday and Saturday.
pub fn next_draw_date(latest: NaiveDate) -> NaiveDate {
    let weekday = latest.weekday().num_days_from_monday() as i64;
    let wednesday = Weekday::Wed.num_days_from_monday() as i64;

    let mut days = (wednesday - weekday).rem_euclid(7);
    if days == 0 {
        days = 3;
    }
    latest + Duration::days(days)
}

/// 1-based (row, col) of a number on the 10x5 heatmap grid.
pub fn grid_position(n: u8) -> Option<(usize, usize)> {
    if n < 1 || n > POOL_MAX {
        return None;
    }
    let idx = (n - 1) as usize;
    Some((idx / GRID_COLS + 1, idx % GRID_COLS + 1))
}
