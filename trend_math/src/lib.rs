//! # Trend Math
//!
//! Numeric core for daily count series.
//! This crate provides the smoothing, rate-of-change estimation, projection
//! and scale selection stages used to chart a series and extrapolate it.
//!
//! Every stage is a pure function over plain slices; nothing here performs
//! I/O or holds state between calls.

use thiserror::Error;

pub mod moving_averages;
pub mod projection;
pub mod rates;
pub mod scale;

pub use moving_averages::{smooth, SimpleMovingAverage};
pub use projection::{project, projected_len};
pub use rates::{first_order_change, second_order_change, TrendEstimate, VelocityDivisor};
pub use scale::select_scale;

/// Window length used to smooth the raw series before estimating a trend.
pub const DEFAULT_SMOOTHING_WINDOW: usize = 15;

/// Number of trailing smoothed points the velocity estimate looks at.
pub const VELOCITY_LOOKBACK: usize = 8;

/// Smallest smoothed series accepted by the velocity estimate.
pub const MIN_VELOCITY_POINTS: usize = VELOCITY_LOOKBACK + 1;

/// Number of trailing smoothed points the acceleration estimate looks at.
pub const ACCELERATION_LOOKBACK: usize = 7;

/// Smallest smoothed series accepted by the acceleration estimate.
pub const MIN_ACCELERATION_POINTS: usize = ACCELERATION_LOOKBACK;

/// Projected steps sharing one velocity before acceleration is applied.
pub const PROJECTION_GROUP_SIZE: usize = 3;

/// Fraction of the series maximum represented by one bar glyph.
pub const SCALE_RATIO: f64 = 0.02;

/// Errors that can occur in series calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Arithmetic error: {0}")]
    Arithmetic(String),
}

/// Result type for series math operations
pub type Result<T> = std::result::Result<T, MathError>;
