pub mod sweep;
pub mod ticket;

pub use self::ticket::Ticket;
use crate::config::StrategyWeights;
use crate::consts::{PICK_COUNT, POOL_MAX};
use crate::scorer::{ScoreDetails, Scorer};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Empty,
    /// 1 to 6 numbers chosen.
    Partial(usize),
    Complete,
}

/// Working state of one generation run. Never shared between runs.
#[derive(Debug, Clone)]
pub struct SelectionState {
    selected: [u8; PICK_COUNT],
    len: usize,
    // Ascending; shrinks by one per commit
    remaining: Vec<u8>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected: [0; PICK_COUNT],
            len: 0,
            remaining: (1..=POOL_MAX).collect(),
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        match self.len {
            0 => SelectionPhase::Empty,
            PICK_COUNT => SelectionPhase::Complete,
            n => SelectionPhase::Partial(n),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == SelectionPhase::Complete
    }

    /// Chosen numbers in the order they were picked.
    pub fn selected(&self) -> &[u8] {
        &self.selected[..self.len]
    }

    pub fn remaining(&self) -> &[u8] {
        &self.remaining
    }

    /// Moves `n` from remaining to selected. Returns false if `n` is not
    /// available or the selection is already complete.
    pub fn commit(&mut self, n: u8) -> bool {
        if self.is_complete() {
            return false;
        }
        let Some(pos) = self.remaining.iter().position(|&r| r == n) else {
            return false;
        };
        self.remaining.remove(pos);
        self.selected[self.len] = n;
        self.len += 1;
        true
    }

    /// The chosen numbers as a sorted ticket, once complete.
    pub fn finish(&self) -> Option<Ticket> {
        if self.is_complete() {
            Some(Ticket::from_unsorted(self.selected))
        } else {
            None
        }
    }
}

/// Greedy selection loop: commit the best-scoring remaining number until
/// seven are chosen.
pub struct Selector {
    scorer: Arc<Scorer>,
}

impl Selector {
    pub fn new(scorer: Arc<Scorer>) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn run(&self, weights: &StrategyWeights, rng: &mut fastrand::Rng) -> Ticket {
        self.select(weights, rng, None)
    }

    /// Runs the loop and also returns the winning breakdown of every step.
    pub fn run_traced(
        &self,
        weights: &StrategyWeights,
        rng: &mut fastrand::Rng,
    ) -> (Ticket, Vec<ScoreDetails>) {
        let mut trace = Vec::with_capacity(PICK_COUNT);
        let ticket = self.select(weights, rng, Some(&mut trace));
        (ticket, trace)
    }

    fn select(
        &self,
        weights: &StrategyWeights,
        rng: &mut fastrand::Rng,
        mut trace: Option<&mut Vec<ScoreDetails>>,
    ) -> Ticket {
        let mut state = SelectionState::new();

        // Exactly PICK_COUNT steps: the pool starts at POOL_MAX and loses one per step.
        while !state.is_complete() {
            let Some((pick, total)) = self.best_candidate(&state, weights, rng) else {
                break;
            };

            if let Some(trace) = trace.as_mut() {
                let mut details = self.scorer.breakdown(pick, state.selected(), weights);
                details.jitter = total - details.total;
                details.total = total;
                trace.push(details);
            }

            debug!("{:?}: committing {:2} ({:.4})", state.phase(), pick, total);
            if !state.commit(pick) {
                break;
            }
        }

        match state.finish() {
            Some(ticket) => ticket,
            None => unreachable!("pool of {} always fills {} slots", POOL_MAX, PICK_COUNT),
        }
    }

    /// Strictly highest score wins; ties keep the lowest-numbered candidate.
    fn best_candidate(
        &self,
        state: &SelectionState,
        weights: &StrategyWeights,
        rng: &mut fastrand::Rng,
    ) -> Option<(u8, f64)> {
        let selected = state.selected();
        let mut best: Option<(u8, f64)> = None;

        for &candidate in state.remaining() {
            let score = self.scorer.score(candidate, selected, weights, rng);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((candidate, score)),
            }
        }
        best
    }
}
