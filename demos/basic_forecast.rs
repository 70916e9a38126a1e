use ev_forecast::sample::generate_sample_data;
use ev_forecast::{forecast_linear, forecast_polynomial, SeriesKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("EV Forecast: Basic Forecasting Example");
    println!("======================================\n");

    // Create sample data
    println!("Generating sample EV adoption data...");
    let data = generate_sample_data(42)?;
    println!("Sample data created: {} rows\n", data.len());

    // Global linear forecast, five years ahead
    println!("Fitting a linear trend to global sales...");
    let linear = forecast_linear(&data, "year", "sales", 5);
    println!("{}", linear.metrics);

    println!("Forecasted global sales:");
    for row in linear.forecast_rows() {
        println!("  {}: {:.0}", row.period, row.value);
    }
    println!();

    // Polynomial forecast for comparison
    println!("Fitting a degree-3 polynomial for comparison...");
    let polynomial = forecast_polynomial(&data, "year", "sales", 5, 3);
    println!("{}", polynomial.metrics);

    println!("Forecasted global sales (polynomial):");
    for row in polynomial.forecast_rows() {
        println!("  {}: {:.0}", row.period, row.value);
    }
    println!();

    // The historical segment passes through unchanged
    let historical_years = linear
        .rows
        .iter()
        .filter(|row| row.kind == SeriesKind::Historical)
        .count();
    println!("Historical periods in the output: {}", historical_years);

    Ok(())
}
