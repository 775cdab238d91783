//! Error types for LazyLedger

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    /// Aggregation was asked to reduce zero usable transactions.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    /// True when the failure means "nothing to aggregate" rather than bad data
    pub fn is_empty_input(&self) -> bool {
        matches!(self, LedgerError::EmptyInput(_))
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
