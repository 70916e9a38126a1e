use ev_forecast::sample::generate_sample_data;
use ev_forecast::{forecast_by_region, ForecastMethod, SeriesKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("EV Forecast: Regional Forecasting Example");
    println!("=========================================\n");

    println!("Generating sample EV adoption data...");
    let data = generate_sample_data(42)?;
    println!("Sample data created: {} rows\n", data.len());

    println!("Forecasting every region independently (3 years ahead)...\n");
    let rows = forecast_by_region(&data, "region", "year", "sales", 3, ForecastMethod::Linear);

    if rows.is_empty() {
        println!("Insufficient data for regional forecasting");
        return Ok(());
    }

    let mut current_region: Option<&str> = None;
    for row in &rows {
        let region = row.region.as_deref().unwrap_or("unknown");
        if current_region != Some(region) {
            println!("{}:", region);
            current_region = Some(region);
        }
        if row.kind == SeriesKind::Forecast {
            println!("  {} (forecast): {:.0}", row.period, row.value);
        }
    }

    Ok(())
}
