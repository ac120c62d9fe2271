//! Basic example forecasting a few business metrics
//!
//! Run with: cargo run --example basic -p metricast-facade

use metricast_facade::prelude::*;
use std::collections::BTreeMap;

fn main() -> Result<()> {
    println!("=== metricast Basic Examples ===\n");

    let revenue = vec![
        DataPoint::new("2025-01", 1000.0),
        DataPoint::new("2025-02", 1100.0),
        DataPoint::new("2025-03", 1210.0),
        DataPoint::new("2025-04", 1331.0),
    ];

    // 1. Monthly forecast with the default engine
    println!("1. Monthly revenue");
    let result = forecast_monthly(&revenue, Some(3));
    for point in &result.forecasts {
        println!(
            "   {}: {:.2} [{:.2}, {:.2}]",
            point.period, point.predicted, point.lower, point.upper
        );
    }
    println!(
        "   trend={} strength={} growth={}% r2={}\n",
        result.trend, result.trend_strength, result.avg_growth_rate, result.r2
    );

    // 2. Yearly forecast
    println!("2. Yearly orders");
    let orders = vec![
        DataPoint::new("2022", 480.0),
        DataPoint::new("2023", 530.0),
        DataPoint::new("2024", 610.0),
    ];
    let result = forecast_yearly(&orders);
    println!("   periods: {:?}", result.periods());
    println!("   predicted: {:?}\n", result.predicted());

    // 3. Tuned engine with wider bands
    println!("3. Tuned engine (alpha=0.6, 95% bands)");
    let engine = EngineBuilder::new().alpha(0.6).confidence_level(0.95).build()?;
    let result = engine.forecast(&revenue, Cadence::Monthly, 2);
    for point in &result.forecasts {
        println!("   {}: [{:.2}, {:.2}]", point.period, point.lower, point.upper);
    }
    println!();

    // 4. Several metrics at once
    println!("4. Dashboard metrics");
    let mut metrics = BTreeMap::new();
    metrics.insert("revenue".to_string(), revenue);
    metrics.insert(
        "customers".to_string(),
        vec![DataPoint::new("2025-03", 12.0), DataPoint::new("2025-04", 14.0)],
    );
    for (name, result) in forecast_multiple_metrics(&metrics, None) {
        if result.is_empty() {
            println!("   {}: not enough history", name);
        } else {
            println!("   {}: {} over {} periods", name, result.trend, result.forecasts.len());
        }
    }

    // 5. Period labels
    println!("\n5. Period labels");
    println!("   after 2025-11: {:?}", generate_future_periods("2025-11", Cadence::Monthly, 3)?);

    println!("\n=== Examples Complete ===");
    Ok(())
}
