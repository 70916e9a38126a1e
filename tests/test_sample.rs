use ev_forecast::sample::generate_sample_data;
use ev_forecast::{forecast_by_region, forecast_linear, ForecastMethod, SeriesKind};

#[test]
fn generated_dataset_has_expected_shape() {
    let data = generate_sample_data(42).unwrap();

    // Ten regions over 2010-2023
    assert_eq!(data.len(), 10 * 14);
    for column in [
        "year",
        "region",
        "sales",
        "market_share",
        "vehicle_type",
        "vehicle_segment",
    ] {
        assert!(data.has_column(column), "missing column {}", column);
    }
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let first = generate_sample_data(7).unwrap();
    let second = generate_sample_data(7).unwrap();

    assert!(first.dataframe().frame_equal(second.dataframe()));

    let different = generate_sample_data(8).unwrap();
    assert!(!first.dataframe().frame_equal(different.dataframe()));
}

#[test]
fn generated_values_respect_domain_bounds() {
    let data = generate_sample_data(1).unwrap();

    let sales = data.year_value_pairs("year", "sales").unwrap();
    assert!(sales.iter().all(|&(year, units)| {
        (2010..=2023).contains(&year) && units >= 10.0
    }));

    let shares = data.year_value_pairs("year", "market_share").unwrap();
    assert!(shares.iter().all(|&(_, share)| share <= 100.0));
}

#[test]
fn generated_dataset_is_forecastable() {
    let data = generate_sample_data(42).unwrap();

    let global = forecast_linear(&data, "year", "sales", 5);
    assert!(!global.is_insufficient());
    assert_eq!(global.forecast_rows().count(), 5);

    let regional = forecast_by_region(&data, "region", "year", "sales", 5, ForecastMethod::Linear);
    assert!(!regional.is_empty());
    // Every region has a full history, so all ten forecast
    let forecast_rows = regional
        .iter()
        .filter(|row| row.kind == SeriesKind::Forecast)
        .count();
    assert_eq!(forecast_rows, 10 * 5);
}
