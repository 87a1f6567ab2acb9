use crate::config::SweepParams;
use crate::error::LfResult;
use crate::scorer::Scorer;
use crate::selector::{Selector, Ticket};
use crate::strategies::StrategySpec;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

pub struct SweepOptions {
    pub runs_per_strategy: usize,
    /// Base seed; each run derives its own generator from it.
    pub seed: Option<u64>,
}

impl SweepOptions {
    pub fn new(params: &SweepParams, seed: Option<u64>) -> Self {
        Self {
            runs_per_strategy: params.runs_per_strategy,
            seed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepEntry {
    pub label: String,
    /// 1-based run index within the strategy.
    pub run: usize,
    pub ticket: Ticket,
    pub high: usize,
    pub low: usize,
    pub even: usize,
    pub odd: usize,
}

impl SweepEntry {
    pub fn new(label: impl Into<String>, run: usize, ticket: Ticket) -> Self {
        Self {
            label: label.into(),
            run,
            high: ticket.high_count(),
            low: ticket.low_count(),
            even: ticket.even_count(),
            odd: ticket.odd_count(),
            ticket,
        }
    }
}

/// Runs the selection loop repeatedly under every configuration in a catalogue.
pub struct Sweep {
    scorer: Arc<Scorer>,
    options: SweepOptions,
}

impl Sweep {
    pub fn new(scorer: Arc<Scorer>, options: SweepOptions) -> Self {
        Self { scorer, options }
    }

    /// Entries come back grouped by strategy in catalogue order, then by run.
    pub fn run(&self, catalogue: &[StrategySpec]) -> LfResult<Vec<SweepEntry>> {
        for spec in catalogue {
            spec.weights.validate(&spec.label)?;
        }

        let runs = self.options.runs_per_strategy;
        info!(
            "🧮 Sweeping {} strategies x {} runs",
            catalogue.len(),
            runs
        );

        let jobs: Vec<(usize, &StrategySpec, usize)> = catalogue
            .iter()
            .enumerate()
            .flat_map(|(si, spec)| (0..runs).map(move |r| (si * runs + r, spec, r)))
            .collect();

        let start = Instant::now();
        let selector = Selector::new(self.scorer.clone());

        // Each job owns its generator; the scorer is only read.
        let entries: Vec<SweepEntry> = jobs
            .par_iter()
            .map(|&(job, spec, r)| {
                let mut rng = match self.options.seed {
                    Some(s) => fastrand::Rng::with_seed(s.wrapping_add(job as u64)),
                    None => fastrand::Rng::new(),
                };
                let ticket = selector.run(&spec.weights, &mut rng);
                SweepEntry::new(spec.label.clone(), r + 1, ticket)
            })
            .collect();

        info!(
            "Sweep produced {} tickets in {:.2?}",
            entries.len(),
            start.elapsed()
        );
        Ok(entries)
    }
}
