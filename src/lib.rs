//! # Case Projection
//!
//! Facade over the workspace crates:
//!
//! - [`trend_math`]: smoothing, trend estimation, projection and scale selection
//! - [`case_chart`]: daily record loading, configuration and chart rendering
//!
//! ## Example
//!
//! ```
//! use case_projection_workspace::{project, render_bar, select_scale, smooth};
//!
//! let raw: Vec<u64> = (0..30).map(|d| 100 + d * 10).collect();
//! let scale = select_scale(&raw).unwrap();
//! assert_eq!(scale, 7);
//!
//! let smoothed = smooth(&raw, 15).unwrap();
//! assert_eq!(smoothed.len(), 16);
//!
//! let projection = project(100.0, 3, 2.0, 0.0).unwrap();
//! assert_eq!(projection, vec![102, 104, 106]);
//! assert_eq!(render_bar(projection[0], scale, '|'), "||||||||||||||");
//! ```

pub use case_chart::{
    render_bar, BarRenderer, CaseChart, CaseField, CaseSeries, ChartConfig, ChartError,
    ChartRow, DailyRecord, DataLoader, Region,
};
pub use trend_math::{
    first_order_change, project, second_order_change, select_scale, smooth, MathError,
    TrendEstimate, VelocityDivisor,
};
