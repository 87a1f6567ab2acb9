use serde::Serialize;

/// Per-candidate breakdown of one scoring call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreDetails {
    pub candidate: u8,

    // Sub-scores, each roughly in [0, 1]
    pub frequency: f64,
    pub balance: f64,
    pub pattern: f64,

    // Pattern components
    pub pair: f64,
    pub gap: f64,

    pub jitter: f64,
    // Weighted sum plus jitter
    pub total: f64,
}
