use assert_approx_eq::assert_approx_eq;
use ev_forecast::metrics::{fit_metrics, ModelMetrics};

#[test]
fn perfect_predictions_give_zero_error_and_unit_r2() {
    let actual = vec![100.0, 200.0, 300.0];
    let predicted = actual.clone();

    let metrics = fit_metrics(&actual, &predicted).unwrap();

    assert_approx_eq!(metrics.mse, 0.0);
    assert_approx_eq!(metrics.rmse, 0.0);
    assert_approx_eq!(metrics.r2, 1.0);
}

#[test]
fn known_residuals_give_known_metrics() {
    let actual = vec![1.0, 2.0, 3.0];
    let predicted = vec![2.0, 2.0, 2.0];

    let metrics = fit_metrics(&actual, &predicted).unwrap();

    // SS_res = 1 + 0 + 1 = 2, SS_tot = 2
    assert_approx_eq!(metrics.mse, 2.0 / 3.0);
    assert_approx_eq!(metrics.rmse, (2.0f64 / 3.0).sqrt());
    assert_approx_eq!(metrics.r2, 0.0);
}

#[test]
fn rmse_is_square_root_of_mse() {
    let actual = vec![10.0, 14.0, 11.0, 19.0];
    let predicted = vec![11.0, 13.0, 13.0, 17.0];

    let metrics = fit_metrics(&actual, &predicted).unwrap();

    assert_approx_eq!(metrics.rmse, metrics.mse.sqrt());
}

#[test]
fn constant_series_r2_follows_residuals() {
    let actual = vec![5.0, 5.0, 5.0];

    let perfect = fit_metrics(&actual, &[5.0, 5.0, 5.0]).unwrap();
    assert_approx_eq!(perfect.r2, 1.0);

    let imperfect = fit_metrics(&actual, &[5.0, 6.0, 5.0]).unwrap();
    assert_approx_eq!(imperfect.r2, 0.0);
}

#[test]
fn mismatched_lengths_are_rejected() {
    assert!(fit_metrics(&[1.0, 2.0], &[1.0]).is_err());
    assert!(fit_metrics(&[], &[]).is_err());
}

#[test]
fn metrics_accessors_distinguish_error_sentinel() {
    let linear = ModelMetrics::Linear {
        mse: 1.0,
        rmse: 1.0,
        r2: 0.9,
        coefficient: 2.0,
        intercept: 3.0,
    };
    assert!(!linear.is_error());
    assert_eq!(linear.mse(), Some(1.0));
    assert_eq!(linear.rmse(), Some(1.0));
    assert_eq!(linear.r2(), Some(0.9));
    assert_eq!(linear.error(), None);

    let error = ModelMetrics::Error {
        error: "Insufficient data".to_string(),
    };
    assert!(error.is_error());
    assert_eq!(error.mse(), None);
    assert_eq!(error.error(), Some("Insufficient data"));
}

#[test]
fn polynomial_metrics_serialize_with_degree() {
    let metrics = ModelMetrics::Polynomial {
        mse: 4.0,
        rmse: 2.0,
        r2: 0.8,
        degree: 3,
    };

    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(json["degree"], 3);
    assert!(json.get("coefficient").is_none());
}
