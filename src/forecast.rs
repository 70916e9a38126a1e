//! Single-series forecasting: extrapolation, assembly, and the
//! caller-facing entry points

use crate::aggregate::{aggregate_by_period, SeriesPoint};
use crate::data::EvSalesData;
use crate::error::{ForecastError, Result};
use crate::metrics::{fit_metrics, FitMetrics, ModelMetrics};
use crate::models::{FittedModel, LinearRegression, PolynomialRegression, TrendModel};
use serde::Serialize;

/// Whether a row is an observed value or an extrapolated one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Aggregated actual observation
    Historical,
    /// Model prediction beyond the last observed period
    Forecast,
}

/// One labeled row of a forecast sequence.
///
/// Immutable once assembled; `region` is populated only by the batch
/// forecaster. Serializes with the kind under the `type` key, matching the
/// column name the dashboard's chart layer reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRow {
    /// Integer time period
    pub period: i64,
    /// Observed (historical) or predicted (forecast) value
    pub value: f64,
    /// Row label
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    /// Region key, present only in batch output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Result of a single-series forecast call.
///
/// Every failure mode is a sentinel value: empty rows, error-tagged metrics,
/// no model. The forecasting surface never panics and never returns a
/// `Result`, so a renderer can detect "insufficient data" without
/// special-casing error control flow.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastOutput {
    /// Historical rows followed by forecast rows
    pub rows: Vec<ForecastRow>,
    /// Fit metrics, or the error sentinel
    pub metrics: ModelMetrics,
    /// The fitted model, absent when fitting failed
    #[serde(skip)]
    pub model: Option<FittedModel>,
}

impl ForecastOutput {
    /// Build the sentinel output for a failed fit
    fn from_error(err: ForecastError) -> Self {
        Self {
            rows: Vec::new(),
            metrics: ModelMetrics::Error {
                error: err.to_string(),
            },
            model: None,
        }
    }

    /// Whether this output is the insufficient-data sentinel
    pub fn is_insufficient(&self) -> bool {
        self.metrics.is_error()
    }

    /// Iterate over the historical rows
    pub fn historical_rows(&self) -> impl Iterator<Item = &ForecastRow> {
        self.rows
            .iter()
            .filter(|row| row.kind == SeriesKind::Historical)
    }

    /// Iterate over the forecast rows
    pub fn forecast_rows(&self) -> impl Iterator<Item = &ForecastRow> {
        self.rows
            .iter()
            .filter(|row| row.kind == SeriesKind::Forecast)
    }

    /// Serialize the rows and metrics to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ForecastError::DataError(format!("Serialization error: {}", e)))
    }
}

/// Forecast with a linear trend model.
///
/// Aggregates the target per period, fits a line by ordinary least squares,
/// extrapolates `periods` future periods, and returns historical plus
/// forecast rows with in-sample metrics. Missing columns or fewer than 3
/// distinct periods yield the sentinel output.
pub fn forecast_linear(
    data: &EvSalesData,
    time_col: &str,
    target_col: &str,
    periods: usize,
) -> ForecastOutput {
    data.year_value_pairs(time_col, target_col)
        .and_then(|pairs| linear_series(&pairs, periods))
        .unwrap_or_else(ForecastOutput::from_error)
}

/// Forecast with a polynomial trend model of the given degree (>= 2).
///
/// Same pipeline as [`forecast_linear`] with a power-basis fit; a degree-D
/// fit needs at least D+1 distinct periods.
pub fn forecast_polynomial(
    data: &EvSalesData,
    time_col: &str,
    target_col: &str,
    periods: usize,
    degree: usize,
) -> ForecastOutput {
    data.year_value_pairs(time_col, target_col)
        .and_then(|pairs| polynomial_series(&pairs, periods, degree))
        .unwrap_or_else(ForecastOutput::from_error)
}

/// Run the linear pipeline over raw (period, value) pairs
pub(crate) fn linear_series(pairs: &[(i64, f64)], periods: usize) -> Result<ForecastOutput> {
    let series = aggregate_by_period(pairs);
    let model = LinearRegression::fit(&series)?;

    let base = in_sample_metrics(&series, &model)?;
    let metrics = ModelMetrics::Linear {
        mse: base.mse,
        rmse: base.rmse,
        r2: base.r2,
        coefficient: model.coefficient(),
        intercept: model.intercept(),
    };

    let rows = extrapolate_and_assemble(&series, &model, periods);

    Ok(ForecastOutput {
        rows,
        metrics,
        model: Some(FittedModel::Linear(model)),
    })
}

/// Run the polynomial pipeline over raw (period, value) pairs
pub(crate) fn polynomial_series(
    pairs: &[(i64, f64)],
    periods: usize,
    degree: usize,
) -> Result<ForecastOutput> {
    let series = aggregate_by_period(pairs);
    let model = PolynomialRegression::new(degree)?.fit(&series)?;

    let base = in_sample_metrics(&series, &model)?;
    let metrics = ModelMetrics::Polynomial {
        mse: base.mse,
        rmse: base.rmse,
        r2: base.r2,
        degree,
    };

    let rows = extrapolate_and_assemble(&series, &model, periods);

    Ok(ForecastOutput {
        rows,
        metrics,
        model: Some(FittedModel::Polynomial(model)),
    })
}

/// Compute in-sample metrics for a fitted model over its training series
fn in_sample_metrics<M: TrendModel>(series: &[SeriesPoint], model: &M) -> Result<FitMetrics> {
    let actual: Vec<f64> = series.iter().map(|p| p.value).collect();
    let predicted: Vec<f64> = series.iter().map(|p| model.predict(p.period)).collect();
    fit_metrics(&actual, &predicted)
}

/// Extrapolate future periods and assemble the labeled output sequence.
///
/// The fit gates guarantee a non-empty series by the time this runs.
fn extrapolate_and_assemble<M: TrendModel>(
    series: &[SeriesPoint],
    model: &M,
    periods: usize,
) -> Vec<ForecastRow> {
    let last_period = series[series.len() - 1].period;
    let future = extrapolate(model, last_period, periods);
    assemble(series, &future)
}

/// Predict the next `periods` consecutive periods after `last_period`.
///
/// The result covers `last_period + 1 ..= last_period + periods`,
/// contiguous and ascending; a zero horizon yields an empty segment.
fn extrapolate<M: TrendModel>(model: &M, last_period: i64, periods: usize) -> Vec<SeriesPoint> {
    (1..=periods as i64)
        .map(|step| {
            let period = last_period + step;
            SeriesPoint {
                period,
                value: model.predict(period),
            }
        })
        .collect()
}

/// Concatenate historical actuals and future predictions into one labeled
/// sequence. Pure labeling: no values are recomputed and nothing is
/// re-sorted, so historical rows always precede forecast rows.
fn assemble(history: &[SeriesPoint], future: &[SeriesPoint]) -> Vec<ForecastRow> {
    let mut rows = Vec::with_capacity(history.len() + future.len());

    rows.extend(history.iter().map(|point| ForecastRow {
        period: point.period,
        value: point.value,
        kind: SeriesKind::Historical,
        region: None,
    }));

    rows.extend(future.iter().map(|point| ForecastRow {
        period: point.period,
        value: point.value,
        kind: SeriesKind::Forecast,
        region: None,
    }));

    rows
}
