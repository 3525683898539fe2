//! Error types for the case_chart crate

use thiserror::Error;
use trend_math::MathError;

/// Custom error types for the case_chart crate
#[derive(Debug, Error)]
pub enum ChartError {
    /// Error raised by the numeric core
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from parsing text values
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV decoding
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Error from JSON encoding or decoding
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Error from configuration files
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl ChartError {
    /// Whether the error only means the series is too short to project.
    ///
    /// Callers use this to fall back to a raw-only chart.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, ChartError::Math(MathError::InsufficientData(_)))
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ChartError>;

impl From<csv::Error> for ChartError {
    fn from(err: csv::Error) -> Self {
        ChartError::CsvError(err.to_string())
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::JsonError(err.to_string())
    }
}

impl From<toml::de::Error> for ChartError {
    fn from(err: toml::de::Error) -> Self {
        ChartError::ConfigError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for ChartError {
    fn from(err: std::num::ParseIntError) -> Self {
        ChartError::ParseError(err.to_string())
    }
}
