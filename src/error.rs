// src/error.rs

use thiserror::Error;

/// Errors raised while validating inputs or exporting results.
///
/// A trial itself never fails: once a configuration validates, every trial
/// runs to the end of its horizon.
#[derive(Debug, Error)]
pub enum SimError {
    /// A configuration was rejected before any trial ran.
    #[error("invalid configuration `{label}`: {reason}")]
    InvalidConfiguration { label: String, reason: String },

    /// Distribution parameters that `rand_distr` refuses.
    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),

    /// Aggregation was asked for zero trials.
    #[error("configuration `{label}` requested zero trials")]
    NoTrials { label: String },

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
