use crate::reports;
use clap::{ArgMatches, Args};
use lottoforge::api;
use lottoforge::config::{Config, StrategyWeights};
use lottoforge::draws::{next_draw_date, HistoricalDataset};
use lottoforge::error::LfResult;
use lottoforge::export;
use lottoforge::selector::Selector;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON file with history/balance/pattern weights; CLI flags override it.
    #[arg(long = "weights")]
    pub weights_file: Option<PathBuf>,

    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Print the per-step score breakdown of the first ticket.
    #[arg(long, default_value_t = false)]
    pub explain: bool,

    /// Print the --explain breakdown as JSON instead of a table.
    #[arg(long, default_value_t = false, requires = "explain")]
    pub json: bool,

    /// Write the tickets to <DIR>/<next-draw>_recommendations.csv.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

pub fn run(
    args: GenerateArgs,
    sub_matches: Option<&ArgMatches>,
    dataset: &HistoricalDataset,
) -> LfResult<()> {
    let weights = resolve_weights(&args, sub_matches)?;
    weights.validate(api::CUSTOM_LABEL)?;
    info!(
        "⚖️  Weights: history {:.2}, balance {:.2}, pattern {:.2}",
        weights.history, weights.balance, weights.pattern
    );

    let scorer = api::build_scorer(dataset, args.config.selection.clone())?;

    // The trace replays the first ticket, so both runs need the same seed.
    let seed = args.seed.unwrap_or_else(|| fastrand::u64(..));
    info!("🎲 Seed: {}", seed);

    if args.explain {
        let mut rng = fastrand::Rng::with_seed(seed);
        let (ticket, trace) = Selector::new(scorer.clone()).run_traced(&weights, &mut rng);
        if args.json {
            reports::print_trace_json(&ticket, &trace)?;
        } else {
            reports::print_trace(&ticket, &trace);
        }
    }

    let entries = api::generate_tickets(scorer, &weights, args.count, Some(seed))?;
    reports::print_tickets("GENERATED", &entries);

    if let (Some(dir), Some(latest)) = (&args.export_dir, dataset.latest_date()) {
        export::export_to_dir(dir, next_draw_date(latest), &entries)?;
    }
    Ok(())
}

fn resolve_weights(args: &GenerateArgs, sub_matches: Option<&ArgMatches>) -> LfResult<StrategyWeights> {
    let Some(path) = &args.weights_file else {
        return Ok(args.config.weights);
    };

    info!("⚖️  Loading Weights from: {}", path.display());
    let mut weights = StrategyWeights::load_from_file(path)?;
    match sub_matches {
        Some(m) => weights.merge_from_cli(&args.config.weights, m),
        None => warn!("No argument matches available; CLI weight overrides ignored."),
    }
    Ok(weights)
}
