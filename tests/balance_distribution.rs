//! Distribution checks over many runs on a synthetic history.

use chrono::{Duration, NaiveDate};
use lottoforge::config::{BalancePolicy, SelectionParams, StrategyWeights};
use lottoforge::draws::{DrawRecord, HistoricalDataset};
use lottoforge::scorer::Scorer;
use lottoforge::selector::Selector;
use lottoforge::stats::FrequencyStatistics;
use std::sync::Arc;

const RUNS: usize = 1000;

fn synthetic_history() -> HistoricalDataset {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let start = NaiveDate::from_ymd_opt(2019, 7, 3).unwrap();
    let records = (0..300)
        .map(|i| {
            let mut pool: Vec<u8> = (1..=50).collect();
            rng.shuffle(&mut pool);
            DrawRecord::new(start + Duration::days(i * 3), &pool[..7]).unwrap()
        })
        .collect();
    HistoricalDataset::new("synthetic", records, start)
}

fn high_counts(policy: BalancePolicy) -> Vec<usize> {
    let stats = FrequencyStatistics::compute(&synthetic_history()).unwrap();
    let params = SelectionParams {
        balance_policy: policy,
        ..SelectionParams::default()
    };
    let selector = Selector::new(Arc::new(Scorer::new(stats, params)));
    let weights = StrategyWeights::default();
    let mut rng = fastrand::Rng::with_seed(1234);

    (0..RUNS)
        .map(|_| selector.run(&weights, &mut rng).high_count())
        .collect()
}

fn mean(values: &[usize]) -> f64 {
    values.iter().sum::<usize>() as f64 / values.len() as f64
}

#[test]
fn test_proportional_policy_centres_high_count() {
    let counts = high_counts(BalancePolicy::Proportional);
    let m = mean(&counts);
    println!("proportional mean high count: {:.3}", m);

    assert!((2.75..=4.25).contains(&m), "mean high count {}", m);
    let extremes = counts.iter().filter(|&&h| h == 0 || h == 7).count();
    assert_eq!(extremes, 0, "all-high or all-low tickets produced");
}

#[test]
fn test_fixed_target_policy_aims_for_three() {
    let counts = high_counts(BalancePolicy::FixedHighTarget);
    let m = mean(&counts);
    println!("fixed-target mean high count: {:.3}", m);

    assert!((2.5..=3.5).contains(&m), "mean high count {}", m);
    assert!(counts.iter().all(|&h| h > 0 && h < 7));
}
