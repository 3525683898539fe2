//! Text bar rendering

use crate::error::{ChartError, Result};

/// Glyph drawn for each scale unit
pub const DEFAULT_GLYPH: char = '|';

/// Draw `value / scale` copies of `glyph`.
///
/// Values below one scale unit, including negative projections, draw an
/// empty bar. `scale` must be at least 1; a zero scale draws nothing, use
/// [`BarRenderer::new`] to have it rejected instead.
pub fn render_bar(value: i64, scale: u64, glyph: char) -> String {
    if scale == 0 || value < 0 || (value as u64) < scale {
        return String::new();
    }

    let count = value as u64 / scale;
    std::iter::repeat(glyph).take(count as usize).collect()
}

/// Renders bars against a scale shared by every row of a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarRenderer {
    scale: u64,
    glyph: char,
}

impl BarRenderer {
    /// Create a renderer for the given scale
    pub fn new(scale: u64, glyph: char) -> Result<Self> {
        if scale == 0 {
            return Err(ChartError::InvalidParameter(
                "Scale must be greater than zero".to_string(),
            ));
        }

        Ok(Self { scale, glyph })
    }

    /// Render one value
    pub fn render(&self, value: i64) -> String {
        render_bar(value, self.scale, self.glyph)
    }

    pub fn scale(&self) -> u64 {
        self.scale
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }
}
