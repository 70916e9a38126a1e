//! Regression models for trend forecasting

use std::fmt::Debug;

pub mod linear;
pub mod polynomial;

pub use linear::{LinearModel, LinearRegression};
pub use polynomial::{PolynomialModel, PolynomialRegression};

/// A fitted trend model mapping a period to a predicted value
pub trait TrendModel: Debug {
    /// Predict the target value for a period
    fn predict(&self, period: i64) -> f64;

    /// Name of the model
    fn name(&self) -> &str;
}

/// A fitted model of either supported kind.
///
/// Transient by design: produced by a fit, returned to the caller alongside
/// the forecast, never persisted.
#[derive(Debug, Clone)]
pub enum FittedModel {
    /// Ordinary least squares line
    Linear(LinearModel),
    /// Least squares fit on a power basis
    Polynomial(PolynomialModel),
}

impl TrendModel for FittedModel {
    fn predict(&self, period: i64) -> f64 {
        match self {
            FittedModel::Linear(model) => model.predict(period),
            FittedModel::Polynomial(model) => model.predict(period),
        }
    }

    fn name(&self) -> &str {
        match self {
            FittedModel::Linear(model) => model.name(),
            FittedModel::Polynomial(model) => model.name(),
        }
    }
}
