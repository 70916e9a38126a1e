//! Tabular EV adoption data handling

use crate::error::{ForecastError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Tabular EV adoption data backed by a polars DataFrame.
///
/// The frame is expected to carry one row per (year, region) observation,
/// with the year and target columns numeric. Column names are not fixed
/// here; every forecasting entry point receives them from the caller.
#[derive(Debug, Clone)]
pub struct EvSalesData {
    /// Data frame containing the observations
    df: DataFrame,
}

/// Data loader for EV adoption data
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load EV adoption data from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<EvSalesData> {
        let file = File::open(path)?;
        // Use polars DataFrame reader directly
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        Ok(EvSalesData::new(df))
    }

    /// Create EV adoption data from an existing DataFrame
    pub fn from_dataframe(df: DataFrame) -> Result<EvSalesData> {
        Ok(EvSalesData::new(df))
    }
}

impl EvSalesData {
    /// Wrap an existing DataFrame
    pub fn new(df: DataFrame) -> Self {
        Self { df }
    }

    /// Create a dataset from (year, region, sales) records (for testing and demos)
    pub fn from_records(records: &[(i64, &str, f64)]) -> Result<Self> {
        let years: Vec<i64> = records.iter().map(|(y, _, _)| *y).collect();
        let regions: Vec<&str> = records.iter().map(|(_, r, _)| *r).collect();
        let sales: Vec<f64> = records.iter().map(|(_, _, s)| *s).collect();

        let df = DataFrame::new(vec![
            Series::new("year", years),
            Series::new("region", regions),
            Series::new("sales", sales),
        ])?;

        Ok(Self { df })
    }

    /// Get the underlying DataFrame
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Number of rows in the dataset
    pub fn len(&self) -> usize {
        self.df.height()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Check whether a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.df.get_column_names().iter().any(|c| *c == name)
    }

    /// Look up a column, mapping the polars error to `MissingColumn`
    fn column(&self, name: &str) -> Result<&Series> {
        self.df
            .column(name)
            .map_err(|_| ForecastError::MissingColumn(name.to_string()))
    }

    /// Extract aligned (period, value) pairs from the time and target columns.
    ///
    /// Rows with a null in either column are dropped; the upstream cleaning
    /// step normally guarantees there are none.
    pub fn year_value_pairs(&self, time_col: &str, target_col: &str) -> Result<Vec<(i64, f64)>> {
        let periods = numeric_rows(self.column(time_col)?)?;
        let values = numeric_rows(self.column(target_col)?)?;

        Ok(periods
            .into_iter()
            .zip(values)
            .filter_map(|(period, value)| Some((period? as i64, value?)))
            .collect())
    }

    /// Extract aligned (region, period, value) triples for batch forecasting.
    pub fn region_rows(
        &self,
        region_col: &str,
        time_col: &str,
        target_col: &str,
    ) -> Result<Vec<(String, i64, f64)>> {
        let regions = string_rows(self.column(region_col)?)?;
        let periods = numeric_rows(self.column(time_col)?)?;
        let values = numeric_rows(self.column(target_col)?)?;

        Ok(regions
            .into_iter()
            .zip(periods.into_iter().zip(values))
            .filter_map(|(region, (period, value))| Some((region?, period? as i64, value?)))
            .collect())
    }
}

/// Convert a numeric Series into per-row `Option<f64>` values, preserving
/// row positions so columns can be zipped back together.
fn numeric_rows(col: &Series) -> Result<Vec<Option<f64>>> {
    match col.dtype() {
        DataType::Float64 => Ok(col.f64().unwrap().into_iter().collect()),
        DataType::Float32 => Ok(col
            .f32()
            .unwrap()
            .into_iter()
            .map(|v| v.map(|v| v as f64))
            .collect()),
        DataType::Int64 => Ok(col
            .i64()
            .unwrap()
            .into_iter()
            .map(|v| v.map(|v| v as f64))
            .collect()),
        DataType::Int32 => Ok(col
            .i32()
            .unwrap()
            .into_iter()
            .map(|v| v.map(|v| v as f64))
            .collect()),
        DataType::UInt64 => Ok(col
            .u64()
            .unwrap()
            .into_iter()
            .map(|v| v.map(|v| v as f64))
            .collect()),
        DataType::UInt32 => Ok(col
            .u32()
            .unwrap()
            .into_iter()
            .map(|v| v.map(|v| v as f64))
            .collect()),
        _ => Err(ForecastError::DataError(format!(
            "Column '{}' cannot be converted to f64",
            col.name()
        ))),
    }
}

/// Convert a string Series into per-row `Option<String>` values.
fn string_rows(col: &Series) -> Result<Vec<Option<String>>> {
    match col.dtype() {
        DataType::Utf8 => Ok(col
            .utf8()
            .unwrap()
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect()),
        _ => Err(ForecastError::DataError(format!(
            "Column '{}' is not a string column",
            col.name()
        ))),
    }
}
