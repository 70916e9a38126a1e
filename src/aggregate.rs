//! Per-period aggregation of raw observations

use std::collections::BTreeMap;

/// One aggregated observation: a period and its summed value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    /// Integer time period (calendar year in the sample domain)
    pub period: i64,
    /// Summed target value for the period
    pub value: f64,
}

/// Collapse raw (period, value) rows into one summed value per distinct
/// period, sorted ascending by period.
///
/// Multiple rows sharing a period (e.g. several vehicle types in the same
/// region and year) are summed, matching the upstream dashboard semantics.
pub fn aggregate_by_period(pairs: &[(i64, f64)]) -> Vec<SeriesPoint> {
    let mut totals: BTreeMap<i64, f64> = BTreeMap::new();
    for &(period, value) in pairs {
        *totals.entry(period).or_insert(0.0) += value;
    }

    totals
        .into_iter()
        .map(|(period, value)| SeriesPoint { period, value })
        .collect()
}
