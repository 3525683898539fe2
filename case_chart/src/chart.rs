//! Chart assembly
//!
//! Runs a [`CaseSeries`] through the numeric pipeline and lays out one dated
//! row per real or projected day:
//!
//! raw → scale, raw → smooth → trend → projection (seeded with the last raw
//! value). Every row is drawn against the same scale.

use crate::config::ChartConfig;
use crate::data::{CaseField, CaseSeries};
use crate::error::{ChartError, Result};
use crate::render::BarRenderer;
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::fmt;
use tracing::debug;
use trend_math::{project, select_scale, smooth, MathError, TrendEstimate};

/// Width of the line separating real rows from projected rows
const SEPARATOR_WIDTH: usize = 40;

/// One charted day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartRow {
    /// Day the value belongs to
    pub date: NaiveDate,
    /// Real or projected count
    pub value: i64,
    /// Rendered bar
    pub bar: String,
    /// Whether the value is extrapolated
    pub projected: bool,
}

/// A rendered series with its projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseChart {
    field: CaseField,
    scale: u64,
    glyph: char,
    trend: Option<TrendEstimate>,
    rows: Vec<ChartRow>,
}

impl CaseChart {
    /// Build the full chart: real rows followed by projected rows.
    ///
    /// # Errors
    ///
    /// Any failure of the numeric core is returned unchanged inside
    /// [`ChartError::Math`]. A series shorter than the smoothing window, or
    /// too short to estimate a trend from, yields
    /// [`MathError::InsufficientData`]; callers can check
    /// [`ChartError::is_insufficient_data`] and fall back to
    /// [`CaseChart::raw_only`].
    pub fn build(series: &CaseSeries, config: &ChartConfig) -> Result<Self> {
        config.validate()?;
        let series = recent(series, config);
        let raw = series.values();

        let scale = select_scale(raw)?;
        debug!(scale, days = raw.len(), "selected chart scale");

        let smoothed = smooth(raw, config.window)?;
        if smoothed.is_empty() {
            return Err(MathError::InsufficientData(format!(
                "Series of {} days is shorter than the {} day smoothing window",
                raw.len(),
                config.window
            ))
            .into());
        }
        debug!(points = smoothed.len(), window = config.window, "smoothed series");

        let trend = TrendEstimate::from_smoothed_with(&smoothed, config.velocity_divisor)?;
        debug!(
            velocity = trend.velocity,
            acceleration = trend.acceleration,
            "estimated trend"
        );

        let seed = raw.last().copied().ok_or_else(|| {
            ChartError::DataError("Cannot seed a projection from an empty series".to_string())
        })?;
        let projection = project(
            seed as f64,
            config.horizon,
            trend.velocity,
            trend.acceleration,
        )?;
        debug!(
            horizon = config.horizon,
            projected = projection.len(),
            "projected series"
        );

        let renderer = BarRenderer::new(scale, config.glyph)?;
        let mut rows = real_rows(&series, &renderer)?;
        let first_projected = raw.len();
        for (offset, value) in projection.into_iter().enumerate() {
            rows.push(ChartRow {
                date: day_at(series.start(), first_projected + offset)?,
                value,
                bar: renderer.render(value),
                projected: true,
            });
        }

        Ok(Self {
            field: series.field(),
            scale,
            glyph: config.glyph,
            trend: Some(trend),
            rows,
        })
    }

    /// Build a chart of the real days only, without smoothing or projection.
    pub fn raw_only(series: &CaseSeries, config: &ChartConfig) -> Result<Self> {
        config.validate()?;
        let series = recent(series, config);

        let scale = select_scale(series.values())?;
        let renderer = BarRenderer::new(scale, config.glyph)?;
        let rows = real_rows(&series, &renderer)?;

        Ok(Self {
            field: series.field(),
            scale,
            glyph: config.glyph,
            trend: None,
            rows,
        })
    }

    /// All rows, real days first
    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    /// Rows holding observed values
    pub fn raw_rows(&self) -> impl Iterator<Item = &ChartRow> {
        self.rows.iter().filter(|row| !row.projected)
    }

    /// Rows holding projected values
    pub fn projected_rows(&self) -> impl Iterator<Item = &ChartRow> {
        self.rows.iter().filter(|row| row.projected)
    }

    /// Units represented by one glyph
    pub fn scale(&self) -> u64 {
        self.scale
    }

    pub fn field(&self) -> CaseField {
        self.field
    }

    /// Trend used for the projection, absent for raw-only charts
    pub fn trend(&self) -> Option<TrendEstimate> {
        self.trend
    }

    /// Legend line, e.g. `| = 20 New Cases`
    pub fn legend(&self) -> String {
        format!("{} = {} {}", self.glyph, self.scale, self.field.label())
    }

    /// Serialize the chart to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for CaseChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.raw_rows() {
            writeln!(f, "{}: {}", row.date.format("%m/%d/%Y"), row.bar)?;
        }

        let mut projected = self.projected_rows().peekable();
        if projected.peek().is_some() {
            writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;
            for row in projected {
                writeln!(f, "{}: {}", row.date.format("%m/%d/%Y"), row.bar)?;
            }
        }

        write!(f, "\n{}", self.legend())
    }
}

fn recent(series: &CaseSeries, config: &ChartConfig) -> CaseSeries {
    match config.history_days {
        Some(days) => series.tail(days),
        None => series.clone(),
    }
}

fn day_at(start: NaiveDate, offset: usize) -> Result<NaiveDate> {
    start
        .checked_add_days(Days::new(offset as u64))
        .ok_or_else(|| {
            ChartError::DataError(format!("Date overflow {} days after {}", offset, start))
        })
}

fn real_rows(series: &CaseSeries, renderer: &BarRenderer) -> Result<Vec<ChartRow>> {
    series
        .values()
        .iter()
        .enumerate()
        .map(|(offset, &count)| {
            let value = i64::try_from(count).map_err(|_| {
                ChartError::DataError(format!("Count {} does not fit a chart row", count))
            })?;
            Ok(ChartRow {
                date: day_at(series.start(), offset)?,
                value,
                bar: renderer.render(value),
                projected: false,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 7, 1).unwrap()
    }

    #[test]
    fn test_legend_uses_glyph_and_field() {
        let series = CaseSeries::new(start(), CaseField::TotalCases, vec![1000; 3]);
        let chart = CaseChart::raw_only(&series, &ChartConfig::default()).unwrap();
        assert_eq!(chart.legend(), "| = 20 Total Cases");
        assert!(chart.trend().is_none());
    }

    #[test]
    fn test_raw_only_has_no_separator() {
        let series = CaseSeries::new(start(), CaseField::NewCases, vec![2, 4]);
        let chart = CaseChart::raw_only(&series, &ChartConfig::default()).unwrap();
        assert_eq!(
            chart.to_string(),
            "07/01/2020: ||\n07/02/2020: ||||\n\n| = 1 New Cases"
        );
    }

    #[test]
    fn test_short_series_is_insufficient() {
        let series = CaseSeries::new(start(), CaseField::NewCases, vec![5; 14]);
        let err = CaseChart::build(&series, &ChartConfig::default()).unwrap_err();
        assert!(err.is_insufficient_data());
    }
}
