use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use lottoforge::api;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize the historical dataset.
    Stats(cmd::stats::StatsArgs),
    /// Generate tickets under one weight configuration.
    Generate(cmd::generate::GenerateArgs),
    /// Generate tickets under every catalogue strategy.
    Sweep(cmd::sweep::SweepArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🎱 Initializing LottoForge...");

    let dataset_params = match &cli.command {
        Commands::Stats(args) => &args.dataset,
        Commands::Generate(args) => &args.config.dataset,
        Commands::Sweep(args) => &args.dataset,
    };

    let dataset = api::load_dataset(dataset_params).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Stats(args) => cmd::stats::run(args, &dataset),
        Commands::Generate(args) => {
            let sub_matches = matches.subcommand_matches("generate");
            cmd::generate::run(args, sub_matches, &dataset)
        }
        Commands::Sweep(args) => cmd::sweep::run(args, &dataset),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
