use crate::config::{DatasetParams, SelectionParams, StrategyWeights, SweepParams};
use crate::draws::HistoricalDataset;
use crate::error::LfResult;
use crate::loader;
use crate::scorer::Scorer;
use crate::selector::sweep::{Sweep, SweepEntry, SweepOptions};
use crate::selector::Selector;
use crate::stats::FrequencyStatistics;
use crate::strategies;
use std::sync::Arc;
use tracing::{info, warn};

pub const CUSTOM_LABEL: &str = "custom";

/// Load the results table and keep draws from the cutoff onward.
pub fn load_dataset(params: &DatasetParams) -> LfResult<HistoricalDataset> {
    let report = loader::load_draws_from_file(&params.data)?;
    if report.skipped > 0 {
        warn!(
            "⚠️  Skipped {} of {} rows in '{}'",
            report.skipped,
            report.rows_read,
            params.data.display()
        );
    }
    Ok(HistoricalDataset::new(
        params.data.display().to_string(),
        report.records,
        params.cutoff,
    ))
}

pub fn build_scorer(dataset: &HistoricalDataset, params: SelectionParams) -> LfResult<Arc<Scorer>> {
    params.validate()?;
    let stats = FrequencyStatistics::compute(dataset)?;
    info!(
        "📊 {} draws, average gap {:.3}",
        stats.total_draws(),
        stats.average_gap()
    );
    Ok(Arc::new(Scorer::new(stats, params)))
}

/// `count` tickets under one configuration, drawn from a single generator.
pub fn generate_tickets(
    scorer: Arc<Scorer>,
    weights: &StrategyWeights,
    count: usize,
    seed: Option<u64>,
) -> LfResult<Vec<SweepEntry>> {
    weights.validate(CUSTOM_LABEL)?;

    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let selector = Selector::new(scorer);

    Ok((1..=count)
        .map(|run| SweepEntry::new(CUSTOM_LABEL, run, selector.run(weights, &mut rng)))
        .collect())
}

/// Every catalogue strategy, `runs_per_strategy` times each.
pub fn run_sweep(
    scorer: Arc<Scorer>,
    params: &SweepParams,
    seed: Option<u64>,
) -> LfResult<Vec<SweepEntry>> {
    let catalogue = strategies::catalogue(params);
    Sweep::new(scorer, SweepOptions::new(params, seed)).run(&catalogue)
}
