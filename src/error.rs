use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Dataset '{dataset}' has no draws on or after {cutoff}")]
    EmptyDataset { dataset: String, cutoff: NaiveDate },

    #[error("Invalid draw on {date}: {reason}")]
    InvalidDraw { date: NaiveDate, reason: String },

    #[error("Invalid weights for '{label}': {reason}")]
    InvalidWeights { label: String, reason: String },
}

pub type LfResult<T> = Result<T, LottoError>;
