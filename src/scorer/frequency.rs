use crate::stats::FrequencyStatistics;

/// Share of historical draws containing `candidate`. Never-drawn numbers score 0.
#[inline(always)]
pub fn frequency_score(stats: &FrequencyStatistics, candidate: u8) -> f64 {
    let total = stats.total_draws();
    if total == 0 {
        return 0.0;
    }
    stats.number_frequency(candidate) as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draws::{DrawRecord, HistoricalDataset};
    use chrono::NaiveDate;

    #[test]
    fn test_frequency_score_ratio() {
        let d = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let records = vec![
            DrawRecord::new(d, &[1, 2, 3, 4, 5, 6, 7]).unwrap(),
            DrawRecord::new(d, &[1, 12, 13, 14, 15, 16, 17]).unwrap(),
        ];
        let ds = HistoricalDataset::new("t", records, d);
        let stats = FrequencyStatistics::compute(&ds).unwrap();

        assert_eq!(frequency_score(&stats, 1), 1.0);
        assert_eq!(frequency_score(&stats, 2), 0.5);
        assert_eq!(frequency_score(&stats, 50), 0.0);
    }
}
