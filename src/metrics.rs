//! In-sample fit-quality metrics

use crate::error::{ForecastError, Result};
use serde::Serialize;
use statrs::statistics::Statistics;

/// In-sample fit metrics computed over the training series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitMetrics {
    /// Mean squared error
    pub mse: f64,
    /// Root mean squared error
    pub rmse: f64,
    /// Coefficient of determination
    pub r2: f64,
}

/// Compute in-sample fit metrics for a model's predictions on its own
/// training data.
///
/// R-squared is `1 - SS_res / SS_tot`. A constant series has `SS_tot == 0`;
/// the result is then 1.0 for a perfect fit and 0.0 otherwise.
pub fn fit_metrics(actual: &[f64], predicted: &[f64]) -> Result<FitMetrics> {
    if actual.len() != predicted.len() || actual.is_empty() {
        return Err(ForecastError::DataError(
            "Actual and predicted values must have the same non-zero length".to_string(),
        ));
    }

    let n = actual.len() as f64;

    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    let mse = ss_res / n;
    let rmse = mse.sqrt();

    let mean = actual.iter().mean();
    let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();

    let r2 = if ss_tot == 0.0 {
        if ss_res == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - ss_res / ss_tot
    };

    Ok(FitMetrics { mse, rmse, r2 })
}

/// Caller-facing metrics mapping for a forecast.
///
/// Serializes to the flat key/value shape the dashboard consumed:
/// `{"mse", "rmse", "r2", "coefficient", "intercept"}` for linear fits,
/// `{"mse", "rmse", "r2", "degree"}` for polynomial fits, and a single
/// `{"error"}` key when fitting could not proceed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelMetrics {
    /// Metrics for a linear fit
    Linear {
        /// Mean squared error
        mse: f64,
        /// Root mean squared error
        rmse: f64,
        /// Coefficient of determination
        r2: f64,
        /// Slope of the fitted line
        coefficient: f64,
        /// Intercept of the fitted line
        intercept: f64,
    },
    /// Metrics for a polynomial fit
    Polynomial {
        /// Mean squared error
        mse: f64,
        /// Root mean squared error
        rmse: f64,
        /// Coefficient of determination
        r2: f64,
        /// Degree of the polynomial
        degree: usize,
    },
    /// Sentinel carried instead of metrics when fitting failed
    Error {
        /// Descriptive reason the fit could not proceed
        error: String,
    },
}

impl ModelMetrics {
    /// Whether this is the error sentinel
    pub fn is_error(&self) -> bool {
        matches!(self, ModelMetrics::Error { .. })
    }

    /// The error message, if this is the error sentinel
    pub fn error(&self) -> Option<&str> {
        match self {
            ModelMetrics::Error { error } => Some(error),
            _ => None,
        }
    }

    /// Mean squared error, if the fit succeeded
    pub fn mse(&self) -> Option<f64> {
        match self {
            ModelMetrics::Linear { mse, .. } | ModelMetrics::Polynomial { mse, .. } => Some(*mse),
            ModelMetrics::Error { .. } => None,
        }
    }

    /// Root mean squared error, if the fit succeeded
    pub fn rmse(&self) -> Option<f64> {
        match self {
            ModelMetrics::Linear { rmse, .. } | ModelMetrics::Polynomial { rmse, .. } => {
                Some(*rmse)
            }
            ModelMetrics::Error { .. } => None,
        }
    }

    /// Coefficient of determination, if the fit succeeded
    pub fn r2(&self) -> Option<f64> {
        match self {
            ModelMetrics::Linear { r2, .. } | ModelMetrics::Polynomial { r2, .. } => Some(*r2),
            ModelMetrics::Error { .. } => None,
        }
    }
}

impl std::fmt::Display for ModelMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelMetrics::Linear {
                mse,
                rmse,
                r2,
                coefficient,
                intercept,
            } => {
                writeln!(f, "Linear Model Fit:")?;
                writeln!(f, "  MSE:         {:.4}", mse)?;
                writeln!(f, "  RMSE:        {:.4}", rmse)?;
                writeln!(f, "  R2:          {:.4}", r2)?;
                writeln!(f, "  Coefficient: {:.4}", coefficient)?;
                writeln!(f, "  Intercept:   {:.4}", intercept)?;
                Ok(())
            }
            ModelMetrics::Polynomial {
                mse,
                rmse,
                r2,
                degree,
            } => {
                writeln!(f, "Polynomial Model Fit:")?;
                writeln!(f, "  MSE:    {:.4}", mse)?;
                writeln!(f, "  RMSE:   {:.4}", rmse)?;
                writeln!(f, "  R2:     {:.4}", r2)?;
                writeln!(f, "  Degree: {}", degree)?;
                Ok(())
            }
            ModelMetrics::Error { error } => writeln!(f, "Fit failed: {}", error),
        }
    }
}
