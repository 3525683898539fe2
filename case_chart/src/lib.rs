//! # Case Chart
//!
//! Charts a daily case-count series as text bars and extends it with a short
//! projection derived from the smoothed trend.
//!
//! ## Features
//!
//! - Typed loading of daily records from CSV or covidtracking-style JSON
//! - Moving-average smoothing and velocity/acceleration estimates (via `trend_math`)
//! - Grouped projection seeded with the last observed day
//! - One scale shared by every rendered row
//!
//! ## Quick Start
//!
//! ```no_run
//! use case_chart::{CaseChart, CaseField, CaseSeries, ChartConfig, DataLoader};
//!
//! let records = DataLoader::from_path("daily.json")?;
//! let series = CaseSeries::from_records(records, CaseField::NewCases)?;
//!
//! let config = ChartConfig {
//!     horizon: 14,
//!     ..ChartConfig::default()
//! };
//!
//! let chart = match CaseChart::build(&series, &config) {
//!     Ok(chart) => chart,
//!     // Too little history to project; chart what we have
//!     Err(err) if err.is_insufficient_data() => CaseChart::raw_only(&series, &config)?,
//!     Err(err) => return Err(err),
//! };
//!
//! println!("{}", chart);
//! # Ok::<(), case_chart::ChartError>(())
//! ```

pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod region;
pub mod render;

// Re-export commonly used types
pub use crate::chart::{CaseChart, ChartRow};
pub use crate::config::ChartConfig;
pub use crate::data::{CaseField, CaseSeries, DailyRecord, DataLoader};
pub use crate::error::ChartError;
pub use crate::region::Region;
pub use crate::render::{render_bar, BarRenderer, DEFAULT_GLYPH};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
