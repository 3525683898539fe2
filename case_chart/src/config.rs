//! Chart configuration

use crate::error::{ChartError, Result};
use crate::render::DEFAULT_GLYPH;
use serde::{Deserialize, Serialize};
use std::path::Path;
use trend_math::{VelocityDivisor, DEFAULT_SMOOTHING_WINDOW};

/// Longest projection accepted, ten years of days
pub const MAX_HORIZON: usize = 3650;

/// Parameters for building a chart.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// window = 15
/// horizon = 14
/// history_days = 150
/// glyph = "|"
/// velocity_divisor = "series_length"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Smoothing window length in days
    pub window: usize,
    /// Number of days to project
    pub horizon: usize,
    /// Only chart this many of the most recent days
    pub history_days: Option<usize>,
    /// Character repeated to draw a bar
    pub glyph: char,
    /// Divisor used by the velocity estimate
    pub velocity_divisor: VelocityDivisor,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_SMOOTHING_WINDOW,
            horizon: 0,
            history_days: None,
            glyph: DEFAULT_GLYPH,
            velocity_divisor: VelocityDivisor::default(),
        }
    }
}

impl ChartConfig {
    /// Load configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ChartConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(ChartError::InvalidParameter(
                "window must be greater than 0".to_string(),
            ));
        }

        if self.horizon > MAX_HORIZON {
            return Err(ChartError::InvalidParameter(format!(
                "horizon must be at most {} days, got {}",
                MAX_HORIZON, self.horizon
            )));
        }

        if self.history_days == Some(0) {
            return Err(ChartError::InvalidParameter(
                "history_days must be greater than 0".to_string(),
            ));
        }

        if self.glyph.is_whitespace() || self.glyph.is_control() {
            return Err(ChartError::InvalidParameter(format!(
                "glyph {:?} would draw an invisible bar",
                self.glyph
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChartConfig::default();
        assert_eq!(config.window, 15);
        assert_eq!(config.horizon, 0);
        assert_eq!(config.glyph, '|');
        assert_eq!(config.velocity_divisor, VelocityDivisor::SeriesLength);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ChartConfig::default();

        config.window = 0;
        assert!(config.validate().is_err());

        config.window = 7;
        config.history_days = Some(0);
        assert!(config.validate().is_err());

        config.history_days = Some(60);
        config.glyph = ' ';
        assert!(config.validate().is_err());

        config.glyph = '|';
        config.horizon = MAX_HORIZON;
        assert!(config.validate().is_ok());

        config.horizon = usize::MAX;
        assert!(config.validate().is_err());
    }
}
