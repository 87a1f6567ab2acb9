use crate::reports;
use clap::Args;
use lottoforge::api;
use lottoforge::config::{DatasetParams, SelectionParams, SweepParams};
use lottoforge::draws::{next_draw_date, HistoricalDataset};
use lottoforge::error::LfResult;
use lottoforge::export;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub dataset: DatasetParams,
    #[command(flatten)]
    pub selection: SelectionParams,
    #[command(flatten)]
    pub sweep: SweepParams,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Write every ticket to <DIR>/<next-draw>_recommendations.csv.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

pub fn run(args: SweepArgs, dataset: &HistoricalDataset) -> LfResult<()> {
    let scorer = api::build_scorer(dataset, args.selection.clone())?;
    let entries = api::run_sweep(scorer, &args.sweep, args.seed)?;

    reports::print_tickets("STRATEGY SWEEP", &entries);
    reports::print_sweep_summary(&entries);

    if let (Some(dir), Some(latest)) = (&args.export_dir, dataset.latest_date()) {
        export::export_to_dir(dir, next_draw_date(latest), &entries)?;
    }
    Ok(())
}
