//! Batch per-region forecasting

use crate::data::EvSalesData;
use crate::error::ForecastError;
use crate::forecast::{linear_series, polynomial_series, ForecastRow};
use std::collections::HashMap;
use std::str::FromStr;

/// Polynomial degree used when the batch forecaster runs in polynomial mode
pub const DEFAULT_POLYNOMIAL_DEGREE: usize = 2;

/// Minimum observations a region needs to be forecast at all
const MIN_REGION_ROWS: usize = 3;

/// Forecasting method for the batch forecaster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastMethod {
    /// Ordinary least squares line
    Linear,
    /// Degree-2 polynomial fit
    Polynomial,
}

impl FromStr for ForecastMethod {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(ForecastMethod::Linear),
            "polynomial" => Ok(ForecastMethod::Polynomial),
            other => Err(ForecastError::InvalidParameter(format!(
                "Unknown forecasting method: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastMethod::Linear => write!(f, "linear"),
            ForecastMethod::Polynomial => write!(f, "polynomial"),
        }
    }
}

/// Forecast every region in the dataset independently.
///
/// Partitions the rows by distinct region value in first-seen order, runs
/// the single-series pipeline for each region with at least 3 observations,
/// tags every output row with its region, and concatenates the per-region
/// sequences. Regions with too little history are silently skipped, as is
/// any region whose fit fails; no region influences another.
///
/// A missing column, or every region being skipped, yields an empty
/// sequence. Interpreting emptiness (no chart to draw) is the caller's
/// concern; this core formats no user-facing text.
pub fn forecast_by_region(
    data: &EvSalesData,
    region_col: &str,
    time_col: &str,
    target_col: &str,
    periods: usize,
    method: ForecastMethod,
) -> Vec<ForecastRow> {
    let rows = match data.region_rows(region_col, time_col, target_col) {
        Ok(rows) => rows,
        Err(_) => return Vec::new(),
    };

    // Partition by region, keeping first-seen order for stable output
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<(i64, f64)>> = HashMap::new();
    for (region, period, value) in rows {
        if !groups.contains_key(&region) {
            order.push(region.clone());
        }
        groups.entry(region).or_default().push((period, value));
    }

    let mut all_forecasts = Vec::new();
    for region in &order {
        let pairs = &groups[region];
        if pairs.len() < MIN_REGION_ROWS {
            continue; // Skip regions with insufficient data
        }

        let output = match method {
            ForecastMethod::Linear => linear_series(pairs, periods),
            ForecastMethod::Polynomial => {
                polynomial_series(pairs, periods, DEFAULT_POLYNOMIAL_DEGREE)
            }
        };

        // A failed fit drops this region only, never the whole batch
        if let Ok(output) = output {
            all_forecasts.extend(output.rows.into_iter().map(|mut row| {
                row.region = Some(region.clone());
                row
            }));
        }
    }

    all_forecasts
}
