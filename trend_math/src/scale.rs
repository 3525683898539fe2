//! Display scale selection

use crate::{MathError, Result, SCALE_RATIO};

/// Pick how many units one bar glyph represents for a raw series.
///
/// The scale is `floor(max * SCALE_RATIO)`, raised to 1 when that rounds
/// down to zero.
pub fn select_scale(series: &[u64]) -> Result<u64> {
    let max = series.iter().copied().max().ok_or_else(|| {
        MathError::DegenerateInput("Cannot select a scale for an empty series".to_string())
    })?;

    let scale = (max as f64 * SCALE_RATIO) as u64;
    Ok(scale.max(1))
}
