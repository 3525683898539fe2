//! Moving average smoothing
//!
//! Contains the streaming Simple Moving Average (SMA) and the batch
//! [`smooth`] helper built on top of it.

use crate::{MathError, Result};
use std::collections::VecDeque;

/// Simple Moving Average (SMA) implementation
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    period: usize,
    values: VecDeque<f64>,
    sum: f64,
}

impl SimpleMovingAverage {
    /// Create a new Simple Moving Average with the specified period
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(MathError::DegenerateInput(
                "Smoothing window must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            period,
            values: VecDeque::with_capacity(period),
            sum: 0.0,
        })
    }

    /// Update the SMA with a new value
    pub fn update(&mut self, value: f64) {
        self.values.push_back(value);
        self.sum += value;

        // Drop the oldest value once the window overflows
        if self.values.len() > self.period {
            if let Some(old_value) = self.values.pop_front() {
                self.sum -= old_value;
            }
        }
    }

    /// Whether a full window of values has been seen
    pub fn is_ready(&self) -> bool {
        self.values.len() == self.period
    }

    /// Get the current SMA value
    pub fn value(&self) -> Result<f64> {
        if !self.is_ready() {
            return Err(MathError::InsufficientData(format!(
                "Not enough data for SMA calculation. Need {} values, have {}.",
                self.period,
                self.values.len()
            )));
        }

        Ok(self.sum / self.period as f64)
    }

    /// Get the current period
    pub fn period(&self) -> usize {
        self.period
    }

    /// Reset the SMA, clearing all values
    pub fn reset(&mut self) {
        self.values.clear();
        self.sum = 0.0;
    }
}

/// Smooth a raw daily series with a sliding arithmetic mean.
///
/// Element `i` of the result is the mean of `series[i..i + window]`, so the
/// output holds `series.len() - window + 1` values. A window longer than the
/// series is not an error: the result is simply empty and callers decide how
/// to treat the shortfall.
///
/// # Errors
///
/// Returns [`MathError::DegenerateInput`] when `window` is zero.
pub fn smooth(series: &[u64], window: usize) -> Result<Vec<f64>> {
    let mut sma = SimpleMovingAverage::new(window)?;

    if window > series.len() {
        return Ok(Vec::new());
    }

    let mut smoothed = Vec::with_capacity(series.len() - window + 1);
    for &value in series {
        sma.update(value as f64);
        if sma.is_ready() {
            smoothed.push(sma.value()?);
        }
    }

    Ok(smoothed)
}
