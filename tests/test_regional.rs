use ev_forecast::{forecast_by_region, EvSalesData, ForecastMethod, SeriesKind};
use pretty_assertions::assert_eq;
use std::str::FromStr;

fn two_region_data() -> EvSalesData {
    // Norway has five years of history, Canada only two
    EvSalesData::from_records(&[
        (2010, "Norway", 100.0),
        (2011, "Norway", 150.0),
        (2012, "Norway", 225.0),
        (2013, "Norway", 340.0),
        (2014, "Norway", 510.0),
        (2010, "Canada", 80.0),
        (2011, "Canada", 95.0),
    ])
    .unwrap()
}

#[test]
fn short_history_regions_are_skipped_not_fatal() {
    let data = two_region_data();

    let rows = forecast_by_region(&data, "region", "year", "sales", 3, ForecastMethod::Linear);

    assert!(!rows.is_empty());
    assert!(rows.iter().all(|row| row.region.as_deref() == Some("Norway")));
    assert_eq!(
        rows.iter()
            .filter(|row| row.kind == SeriesKind::Forecast)
            .count(),
        3
    );
}

#[test]
fn every_row_is_tagged_with_its_region() {
    let data = EvSalesData::from_records(&[
        (2010, "China", 1000.0),
        (2011, "China", 2000.0),
        (2012, "China", 3500.0),
        (2010, "Germany", 200.0),
        (2011, "Germany", 350.0),
        (2012, "Germany", 600.0),
    ])
    .unwrap();

    let rows = forecast_by_region(&data, "region", "year", "sales", 2, ForecastMethod::Linear);

    assert!(rows.iter().all(|row| row.region.is_some()));
    // Historical and forecast rows alike carry the tag
    assert!(rows
        .iter()
        .filter(|row| row.kind == SeriesKind::Historical)
        .all(|row| row.region.is_some()));
}

#[test]
fn regions_appear_in_first_seen_order() {
    let data = EvSalesData::from_records(&[
        (2010, "Japan", 10.0),
        (2010, "France", 20.0),
        (2011, "Japan", 20.0),
        (2011, "France", 40.0),
        (2012, "Japan", 30.0),
        (2012, "France", 60.0),
    ])
    .unwrap();

    let rows = forecast_by_region(&data, "region", "year", "sales", 1, ForecastMethod::Linear);

    let mut seen: Vec<&str> = Vec::new();
    for row in &rows {
        let region = row.region.as_deref().unwrap();
        if seen.last() != Some(&region) {
            seen.push(region);
        }
    }
    assert_eq!(seen, vec!["Japan", "France"]);
}

#[test]
fn rows_within_a_region_are_historical_then_forecast_ascending() {
    let data = two_region_data();

    let rows = forecast_by_region(&data, "region", "year", "sales", 2, ForecastMethod::Linear);

    let periods: Vec<i64> = rows.iter().map(|row| row.period).collect();
    assert_eq!(periods, vec![2010, 2011, 2012, 2013, 2014, 2015, 2016]);

    let kinds: Vec<SeriesKind> = rows.iter().map(|row| row.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SeriesKind::Historical,
            SeriesKind::Historical,
            SeriesKind::Historical,
            SeriesKind::Historical,
            SeriesKind::Historical,
            SeriesKind::Forecast,
            SeriesKind::Forecast,
        ]
    );
}

#[test]
fn all_regions_skipped_yields_empty_result() {
    let data = EvSalesData::from_records(&[
        (2010, "Norway", 100.0),
        (2011, "Norway", 150.0),
        (2010, "Canada", 80.0),
    ])
    .unwrap();

    let rows = forecast_by_region(&data, "region", "year", "sales", 5, ForecastMethod::Linear);

    assert!(rows.is_empty());
}

#[test]
fn missing_region_column_yields_empty_result() {
    let data = two_region_data();

    let rows = forecast_by_region(&data, "country", "year", "sales", 5, ForecastMethod::Linear);

    assert!(rows.is_empty());
}

#[test]
fn polynomial_method_runs_with_default_degree() {
    let data = EvSalesData::from_records(&[
        (2010, "China", 1000.0),
        (2011, "China", 1800.0),
        (2012, "China", 3200.0),
        (2013, "China", 5500.0),
    ])
    .unwrap();

    let rows = forecast_by_region(
        &data,
        "region",
        "year",
        "sales",
        2,
        ForecastMethod::Polynomial,
    );

    assert_eq!(
        rows.iter()
            .filter(|row| row.kind == SeriesKind::Forecast)
            .count(),
        2
    );
}

#[test]
fn duplicate_periods_within_a_region_are_summed() {
    let data = EvSalesData::from_records(&[
        (2010, "Norway", 30.0),
        (2010, "Norway", 70.0),
        (2011, "Norway", 150.0),
        (2012, "Norway", 200.0),
    ])
    .unwrap();

    let rows = forecast_by_region(&data, "region", "year", "sales", 1, ForecastMethod::Linear);

    let year_2010 = rows
        .iter()
        .find(|row| row.period == 2010 && row.kind == SeriesKind::Historical)
        .unwrap();
    assert_eq!(year_2010.value, 100.0);
}

#[test]
fn method_parses_case_insensitively() {
    assert_eq!(
        ForecastMethod::from_str("linear").unwrap(),
        ForecastMethod::Linear
    );
    assert_eq!(
        ForecastMethod::from_str("Linear").unwrap(),
        ForecastMethod::Linear
    );
    assert_eq!(
        ForecastMethod::from_str("POLYNOMIAL").unwrap(),
        ForecastMethod::Polynomial
    );
    assert!(ForecastMethod::from_str("cubic").is_err());
}

#[test]
fn method_displays_lowercase() {
    assert_eq!(ForecastMethod::Linear.to_string(), "linear");
    assert_eq!(ForecastMethod::Polynomial.to_string(), "polynomial");
}

#[test]
fn regional_rows_serialize_with_region_key() {
    let data = two_region_data();

    let rows = forecast_by_region(&data, "region", "year", "sales", 1, ForecastMethod::Linear);
    let json = serde_json::to_value(&rows).unwrap();

    assert_eq!(json[0]["region"], "Norway");
    assert_eq!(json[0]["type"], "historical");
}
