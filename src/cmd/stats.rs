use crate::reports;
use clap::Args;
use lottoforge::config::DatasetParams;
use lottoforge::draws::{next_draw_date, HistoricalDataset};
use lottoforge::error::LfResult;
use lottoforge::stats::FrequencyStatistics;

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub dataset: DatasetParams,

    /// Rows shown in the frequency and pair tables.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    #[arg(long, default_value_t = 5)]
    pub recent: usize,
}

pub fn run(args: StatsArgs, dataset: &HistoricalDataset) -> LfResult<()> {
    let stats = FrequencyStatistics::compute(dataset)?;

    reports::print_dataset_summary(dataset, &stats);
    if let Some(latest) = dataset.latest_date() {
        println!("Next draw: {}", next_draw_date(latest).format("%A %Y-%m-%d"));
    }
    reports::print_recent_draws(dataset, args.recent);
    reports::print_frequency_table(&stats, args.top);
    reports::print_pair_table(&stats, args.top);
    reports::print_heatmap(&stats);
    Ok(())
}
