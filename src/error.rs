//! Error types for loading inputs and building reports.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while reading candles or configuration.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A file could not be read.
    #[error("Failed to read '{path}'")]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The candle file is not valid JSON of the expected shape.
    #[error("Failed to parse candle data")]
    Json(#[from] serde_json::Error),

    /// The configuration file is not valid TOML of the expected shape.
    #[error("Failed to parse configuration")]
    Toml(#[from] toml::de::Error),

    /// An OHLCV column has a different length than the close column.
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    LengthMismatch {
        /// Name of the offending column.
        column: &'static str,
        /// Length of the close column.
        expected: usize,
        /// Length of the offending column.
        actual: usize,
    },
}
