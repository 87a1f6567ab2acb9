use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use lottoforge::api;
use lottoforge::config::{SelectionParams, StrategyWeights, SweepParams};
use lottoforge::draws::{DrawRecord, HistoricalDataset};
use lottoforge::scorer::Scorer;
use lottoforge::selector::Selector;
use lottoforge::stats::FrequencyStatistics;
use std::hint::black_box;
use std::sync::Arc;

fn setup_dataset() -> HistoricalDataset {
    let mut rng = fastrand::Rng::with_seed(1);
    let start = NaiveDate::from_ymd_opt(2019, 7, 3).unwrap();
    let records = (0..600)
        .map(|i| {
            let mut pool: Vec<u8> = (1..=50).collect();
            rng.shuffle(&mut pool);
            DrawRecord::new(start + Duration::days(i * 3), &pool[..7]).unwrap()
        })
        .collect();
    HistoricalDataset::new("bench", records, start)
}

fn criterion_benchmark(c: &mut Criterion) {
    let dataset = setup_dataset();

    c.bench_function("compute stats (600 draws)", |b| {
        b.iter(|| FrequencyStatistics::compute(black_box(&dataset)))
    });

    let stats = FrequencyStatistics::compute(&dataset).expect("stats");
    let scorer = Arc::new(Scorer::new(stats, SelectionParams::default()));
    let selector = Selector::new(scorer.clone());
    let weights = StrategyWeights::default();
    let mut rng = fastrand::Rng::with_seed(7);

    c.bench_function("single selection run", |b| {
        b.iter(|| selector.run(black_box(&weights), &mut rng))
    });

    let params = SweepParams::default();
    c.bench_function("sweep (8 x 5)", |b| {
        b.iter(|| api::run_sweep(scorer.clone(), black_box(&params), Some(3)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
