//! Closed-form ordinary least squares line fitting

use crate::aggregate::SeriesPoint;
use crate::error::{ForecastError, Result};
use crate::models::TrendModel;
use statrs::statistics::Statistics;

/// Minimum distinct periods required to fit a line
pub const MIN_POINTS: usize = 3;

/// Linear regression fitter: `value = coefficient * period + intercept`
#[derive(Debug, Clone)]
pub struct LinearRegression;

/// Fitted linear trend model
#[derive(Debug, Clone)]
pub struct LinearModel {
    /// Slope of the fitted line
    coefficient: f64,
    /// Intercept of the fitted line
    intercept: f64,
}

impl LinearRegression {
    /// Fit a line to an aggregated series by ordinary least squares.
    ///
    /// The series must come from the aggregator: unique periods, ascending.
    /// Fewer than [`MIN_POINTS`] points is rejected before any arithmetic.
    pub fn fit(series: &[SeriesPoint]) -> Result<LinearModel> {
        if series.len() < MIN_POINTS {
            return Err(ForecastError::InsufficientData(format!(
                "linear regression needs at least {} distinct periods, got {}",
                MIN_POINTS,
                series.len()
            )));
        }

        let xs: Vec<f64> = series.iter().map(|p| p.period as f64).collect();
        let ys: Vec<f64> = series.iter().map(|p| p.value).collect();

        let x_mean = xs.iter().mean();
        let y_mean = ys.iter().mean();

        let sxx: f64 = xs.iter().map(|x| (x - x_mean).powi(2)).sum();
        if sxx == 0.0 {
            return Err(ForecastError::MathError(
                "all periods are identical; cannot fit a trend".to_string(),
            ));
        }

        let sxy: f64 = xs
            .iter()
            .zip(ys.iter())
            .map(|(x, y)| (x - x_mean) * (y - y_mean))
            .sum();

        let coefficient = sxy / sxx;
        let intercept = y_mean - coefficient * x_mean;

        Ok(LinearModel {
            coefficient,
            intercept,
        })
    }
}

impl LinearModel {
    /// Slope of the fitted line
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Intercept of the fitted line
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl TrendModel for LinearModel {
    fn predict(&self, period: i64) -> f64 {
        self.coefficient * period as f64 + self.intercept
    }

    fn name(&self) -> &str {
        "Linear Regression"
    }
}
