//! Polynomial trend fitting on an explicit power basis

use crate::aggregate::SeriesPoint;
use crate::error::{ForecastError, Result};
use crate::models::TrendModel;
use nalgebra::{DMatrix, DVector};
use statrs::statistics::Statistics;

/// Polynomial regression fitter of a caller-chosen degree (>= 2)
#[derive(Debug, Clone)]
pub struct PolynomialRegression {
    /// Name of the model
    name: String,
    /// Degree of the polynomial
    degree: usize,
}

/// Fitted polynomial trend model
#[derive(Debug, Clone)]
pub struct PolynomialModel {
    /// Name of the model
    name: String,
    /// Degree of the polynomial
    degree: usize,
    /// Coefficients for the centered basis, constant term first
    coefficients: Vec<f64>,
    /// Period offset applied before basis expansion
    offset: f64,
}

impl PolynomialRegression {
    /// Create a new polynomial regression fitter
    pub fn new(degree: usize) -> Result<Self> {
        if degree < 2 {
            return Err(ForecastError::InvalidParameter(
                "Polynomial degree must be at least 2".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Polynomial Regression (degree={})", degree),
            degree,
        })
    }

    /// Degree of the polynomial
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Fit a degree-D polynomial to an aggregated series.
    ///
    /// The period axis is expanded into the power basis
    /// `[1, x, x^2, .., x^D]` and the coefficients are solved by SVD least
    /// squares. Periods are centered about their mean first: calendar years
    /// raised to the fifth power would otherwise make the design matrix
    /// hopelessly ill-conditioned. The offset is stored in the model, so
    /// predictions are unaffected.
    ///
    /// A degree-D fit needs at least D+1 distinct periods; fewer is rejected
    /// before any arithmetic.
    pub fn fit(&self, series: &[SeriesPoint]) -> Result<PolynomialModel> {
        if series.len() < self.degree + 1 {
            return Err(ForecastError::InsufficientData(format!(
                "polynomial regression of degree {} needs at least {} distinct periods, got {}",
                self.degree,
                self.degree + 1,
                series.len()
            )));
        }

        let offset = series.iter().map(|p| p.period as f64).mean();

        let n = series.len();
        let cols = self.degree + 1;
        let mut design = DMatrix::<f64>::zeros(n, cols);
        for (row, point) in series.iter().enumerate() {
            let x = point.period as f64 - offset;
            let mut power = 1.0;
            for col in 0..cols {
                design[(row, col)] = power;
                power *= x;
            }
        }

        let y = DVector::from_iterator(n, series.iter().map(|p| p.value));

        let beta = solve_least_squares(&design, &y).ok_or_else(|| {
            ForecastError::MathError(
                "polynomial design matrix is too ill-conditioned to solve".to_string(),
            )
        })?;

        Ok(PolynomialModel {
            name: self.name.clone(),
            degree: self.degree,
            coefficients: beta.iter().copied().collect(),
            offset,
        })
    }
}

impl PolynomialModel {
    /// Degree of the polynomial
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Coefficients for the centered basis, constant term first
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl TrendModel for PolynomialModel {
    fn predict(&self, period: i64) -> f64 {
        let x = period as f64 - self.offset;
        // Horner evaluation, highest order first
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if the strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}
