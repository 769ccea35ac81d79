//! Error types for loan validation and loading

use thiserror::Error;

/// Errors raised at the boundary before the amortization engine runs
#[derive(Debug, Error)]
pub enum LoanError {
    #[error("invalid principal {0}: must be a finite amount greater than zero")]
    InvalidPrincipal(f64),

    #[error("invalid annual rate {0}%: must be a finite, non-negative percentage")]
    InvalidRate(f64),

    #[error("invalid term {0} years: must be between 1 and 50 years")]
    InvalidTerm(u32),

    #[error("row {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: Box<LoanError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoanError>;
