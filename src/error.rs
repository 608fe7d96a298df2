//! Error types for risewatch.

use thiserror::Error;

/// Errors produced while recording and analysing observations.
#[derive(Debug, Error)]
pub enum Error {
    /// Raw input text could not be read as a real number.
    #[error("not a valid number: {input:?}")]
    InvalidInput { input: String },

    /// Statistics were requested before anything was recorded.
    #[error("no results to show yet")]
    EmptyLog,

    /// Threshold configuration is inconsistent.
    #[error("invalid thresholds: {0}")]
    InvalidThresholds(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
