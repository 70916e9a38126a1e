//! Synthetic EV adoption dataset generation
//!
//! Produces a realistic multi-region dataset for demos and tests when no
//! external data is provided: yearly EV sales and market share per region
//! over 2010-2023, with exponential growth curves and multiplicative noise.

use crate::data::EvSalesData;
use crate::error::{ForecastError, Result};
use polars::prelude::*;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand_distr::Normal;

/// Years covered by the generated dataset
const FIRST_YEAR: i64 = 2010;
const LAST_YEAR: i64 = 2023;

/// Per-region growth pattern for the synthetic data
struct GrowthPattern {
    region: &'static str,
    /// Sales in the first year
    base: f64,
    /// Year-over-year growth factor
    growth: f64,
    /// How quickly the growth factor itself increases
    acceleration: f64,
    /// Market share in the first year, percent
    share_base: f64,
    /// Market share growth rate over the decade
    share_growth: f64,
}

const PATTERNS: &[GrowthPattern] = &[
    GrowthPattern { region: "China", base: 5000.0, growth: 1.65, acceleration: 0.15, share_base: 0.1, share_growth: 0.5 },
    GrowthPattern { region: "Europe", base: 8000.0, growth: 1.55, acceleration: 0.12, share_base: 0.2, share_growth: 0.45 },
    GrowthPattern { region: "United States", base: 4000.0, growth: 1.45, acceleration: 0.08, share_base: 0.1, share_growth: 0.35 },
    GrowthPattern { region: "Norway", base: 1000.0, growth: 1.70, acceleration: 0.20, share_base: 1.0, share_growth: 0.70 },
    GrowthPattern { region: "Germany", base: 2000.0, growth: 1.60, acceleration: 0.14, share_base: 0.3, share_growth: 0.50 },
    GrowthPattern { region: "France", base: 1500.0, growth: 1.58, acceleration: 0.13, share_base: 0.2, share_growth: 0.48 },
    GrowthPattern { region: "United Kingdom", base: 1800.0, growth: 1.57, acceleration: 0.12, share_base: 0.25, share_growth: 0.47 },
    GrowthPattern { region: "Japan", base: 1200.0, growth: 1.40, acceleration: 0.07, share_base: 0.15, share_growth: 0.30 },
    GrowthPattern { region: "South Korea", base: 900.0, growth: 1.50, acceleration: 0.10, share_base: 0.12, share_growth: 0.40 },
    GrowthPattern { region: "Canada", base: 800.0, growth: 1.48, acceleration: 0.09, share_base: 0.1, share_growth: 0.38 },
];

const VEHICLE_TYPES: &[&str] = &["BEV", "PHEV"];
const VEHICLE_TYPE_WEIGHTS: &[f64] = &[0.7, 0.3];

const VEHICLE_SEGMENTS: &[&str] = &["Sedan", "SUV", "Hatchback", "Truck", "Van"];
const VEHICLE_SEGMENT_WEIGHTS: &[f64] = &[0.3, 0.4, 0.15, 0.1, 0.05];

/// Generate a synthetic EV adoption dataset.
///
/// Deterministic for a given seed, so tests and demos are reproducible.
/// Columns: `year`, `region`, `sales`, `market_share`, `vehicle_type`,
/// `vehicle_segment`.
pub fn generate_sample_data(seed: u64) -> Result<EvSalesData> {
    let mut rng = StdRng::seed_from_u64(seed);

    let sales_noise =
        Normal::new(1.0, 0.1).map_err(|e| ForecastError::MathError(e.to_string()))?;
    let share_noise =
        Normal::new(1.0, 0.05).map_err(|e| ForecastError::MathError(e.to_string()))?;
    let type_weights = WeightedIndex::new(VEHICLE_TYPE_WEIGHTS)
        .map_err(|e| ForecastError::MathError(e.to_string()))?;
    let segment_weights = WeightedIndex::new(VEHICLE_SEGMENT_WEIGHTS)
        .map_err(|e| ForecastError::MathError(e.to_string()))?;

    let row_count = PATTERNS.len() * (LAST_YEAR - FIRST_YEAR + 1) as usize;
    let mut years: Vec<i64> = Vec::with_capacity(row_count);
    let mut regions: Vec<&str> = Vec::with_capacity(row_count);
    let mut sales: Vec<i64> = Vec::with_capacity(row_count);
    let mut shares: Vec<f64> = Vec::with_capacity(row_count);
    let mut types: Vec<&str> = Vec::with_capacity(row_count);
    let mut segments: Vec<&str> = Vec::with_capacity(row_count);

    for pattern in PATTERNS {
        for year in FIRST_YEAR..=LAST_YEAR {
            let t = (year - FIRST_YEAR) as f64;

            // Exponential growth with acceleration, plus multiplicative noise
            let growth_multiplier = pattern
                .growth
                .powf(t * (1.0 + pattern.acceleration * t / 10.0));
            let noisy_sales = pattern.base * growth_multiplier * sales_noise.sample(&mut rng);
            let units = (noisy_sales as i64).max(10);

            // Market share grows over the decade and is capped at 100%
            let share = pattern.share_base
                * (1.0 + pattern.share_growth).powf(t / 10.0)
                * share_noise.sample(&mut rng);
            let share = share.min(100.0);

            years.push(year);
            regions.push(pattern.region);
            sales.push(units);
            shares.push(share);
            types.push(VEHICLE_TYPES[type_weights.sample(&mut rng)]);
            segments.push(VEHICLE_SEGMENTS[segment_weights.sample(&mut rng)]);
        }
    }

    let df = DataFrame::new(vec![
        Series::new("year", years),
        Series::new("region", regions),
        Series::new("sales", sales),
        Series::new("market_share", shares),
        Series::new("vehicle_type", types),
        Series::new("vehicle_segment", segments),
    ])?;

    Ok(EvSalesData::new(df))
}
