//! # EV Forecast
//!
//! A Rust library for EV adoption time series forecasting: trend models over
//! year-indexed sales or market-share data, per-region batch forecasting,
//! and in-sample fit metrics.
//!
//! ## Features
//!
//! - Tabular data handling over polars DataFrames (CSV or in-memory)
//! - Per-period aggregation of multi-row datasets
//! - Linear and polynomial trend models (ordinary least squares)
//! - Extrapolation over a caller-chosen horizon with labeled output rows
//! - Independent per-region batch forecasting with skip-on-insufficient-data
//! - Synthetic sample-data generation for demos and tests
//!
//! All failure modes of the forecasting surface are sentinel return values
//! (empty rows plus error-tagged metrics), never panics, so a presentation
//! layer can render "insufficient data" without special-casing errors.
//!
//! ## Quick Start
//!
//! ```
//! use ev_forecast::{forecast_linear, EvSalesData};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = EvSalesData::from_records(&[
//!     (2020, "Europe", 100.0),
//!     (2021, "Europe", 200.0),
//!     (2022, "Europe", 300.0),
//! ])?;
//!
//! let output = forecast_linear(&data, "year", "sales", 2);
//! assert!(!output.is_insufficient());
//! assert_eq!(output.forecast_rows().count(), 2);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod data;
pub mod error;
pub mod forecast;
pub mod metrics;
pub mod models;
pub mod regional;
pub mod sample;

// Re-export commonly used types
pub use crate::aggregate::SeriesPoint;
pub use crate::data::{DataLoader, EvSalesData};
pub use crate::error::ForecastError;
pub use crate::forecast::{
    forecast_linear, forecast_polynomial, ForecastOutput, ForecastRow, SeriesKind,
};
pub use crate::metrics::ModelMetrics;
pub use crate::models::{FittedModel, TrendModel};
pub use crate::regional::{forecast_by_region, ForecastMethod};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
