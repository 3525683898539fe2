//! Rate-of-change estimates over the tail of a smoothed series
//!
//! - Velocity: averaged first differences near the end of the series
//! - Acceleration: mean of the second differences near the end of the series

use crate::{
    MathError, Result, ACCELERATION_LOOKBACK, MIN_ACCELERATION_POINTS, MIN_VELOCITY_POINTS,
    VELOCITY_LOOKBACK,
};
use serde::{Deserialize, Serialize};

/// Divisor applied to the summed first differences of the velocity estimate.
///
/// The summed window always covers seven differences, but the established
/// behaviour divides by the full smoothed length minus one. That scaling is
/// kept as the default so charts stay comparable with earlier output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityDivisor {
    /// Divide by `len(series) - 1`.
    #[default]
    SeriesLength,
    /// Divide by the number of differences actually summed.
    DifferenceCount,
}

/// First- and second-order trend derived from a smoothed series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendEstimate {
    /// Estimated change per day
    pub velocity: f64,
    /// Estimated change of the velocity
    pub acceleration: f64,
}

impl TrendEstimate {
    /// Estimate velocity and acceleration with the default velocity divisor
    pub fn from_smoothed(smoothed: &[f64]) -> Result<Self> {
        Self::from_smoothed_with(smoothed, VelocityDivisor::default())
    }

    /// Estimate velocity and acceleration with an explicit velocity divisor
    pub fn from_smoothed_with(smoothed: &[f64], divisor: VelocityDivisor) -> Result<Self> {
        Ok(Self {
            velocity: first_order_change_with(smoothed, divisor)?,
            acceleration: second_order_change(smoothed)?,
        })
    }
}

fn differences(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Velocity of the series using the default divisor.
///
/// Sums the seven adjacent differences ending at the last point and divides
/// by `len - 1`. For `S[i] = i` with nine points this yields `7 / 8`.
pub fn first_order_change(smoothed: &[f64]) -> Result<f64> {
    first_order_change_with(smoothed, VelocityDivisor::default())
}

/// Velocity of the series using the given divisor.
pub fn first_order_change_with(smoothed: &[f64], divisor: VelocityDivisor) -> Result<f64> {
    let len = smoothed.len();
    if len < MIN_VELOCITY_POINTS {
        return Err(MathError::InsufficientData(format!(
            "Velocity needs at least {} smoothed points, have {}",
            MIN_VELOCITY_POINTS, len
        )));
    }

    let window = &smoothed[len - VELOCITY_LOOKBACK..];
    let diffs = differences(window);
    let change: f64 = diffs.iter().sum();

    let denominator = match divisor {
        VelocityDivisor::SeriesLength => len - 1,
        VelocityDivisor::DifferenceCount => diffs.len(),
    };

    Ok(change / denominator as f64)
}

/// Acceleration of the series.
///
/// Takes the six first differences among the last seven points, then the
/// five differences of those, and returns their mean.
pub fn second_order_change(smoothed: &[f64]) -> Result<f64> {
    let len = smoothed.len();
    if len < MIN_ACCELERATION_POINTS {
        return Err(MathError::InsufficientData(format!(
            "Acceleration needs at least {} smoothed points, have {}",
            MIN_ACCELERATION_POINTS, len
        )));
    }

    let changes = differences(&smoothed[len - ACCELERATION_LOOKBACK..]);
    let second = differences(&changes);

    if second.is_empty() {
        return Err(MathError::Arithmetic(
            "No second differences to average".to_string(),
        ));
    }

    Ok(second.iter().sum::<f64>() / second.len() as f64)
}
