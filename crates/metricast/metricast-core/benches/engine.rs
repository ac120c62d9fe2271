//! Benchmark suite for the forecasting engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use metricast_core::{linear_fit, Cadence, DataPoint, ForecastConfig, ForecastEngine, HoltLinear, Smoother};
use std::collections::BTreeMap;

fn create_series(size: usize) -> Vec<DataPoint> {
    (0..size)
        .map(|i| {
            let trend = 1000.0 + i as f64 * 12.0;
            let season = ((i % 12) as f64 / 12.0 * std::f64::consts::TAU).sin() * 80.0;
            DataPoint::new(format!("{}-{:02}", 2000 + i / 12, i % 12 + 1), trend + season)
        })
        .collect()
}

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("Components");

    for size in [24, 120, 600].iter() {
        let values = DataPoint::values(&create_series(*size));

        group.bench_with_input(BenchmarkId::new("linear_fit", size), &values, |b, values| {
            b.iter(|| linear_fit(black_box(values)))
        });

        let holt = HoltLinear::default();
        group.bench_with_input(BenchmarkId::new("holt", size), &values, |b, values| {
            b.iter(|| holt.forecast(black_box(values), 6))
        });
    }

    group.finish();
}

fn bench_forecast(c: &mut Criterion) {
    let engine = ForecastEngine::default();
    let mut group = c.benchmark_group("Forecast");

    for size in [6, 24, 120].iter() {
        let series = create_series(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &series, |b, series| {
            b.iter(|| engine.forecast(black_box(series), Cadence::Monthly, 6))
        });
    }

    group.finish();
}

fn bench_forecast_many(c: &mut Criterion) {
    let series: BTreeMap<String, Vec<DataPoint>> = (0..64)
        .map(|m| (format!("metric_{:02}", m), create_series(36 + m)))
        .collect();

    let mut group = c.benchmark_group("ForecastMany");

    for parallel in [false, true] {
        let engine = ForecastEngine::new(ForecastConfig {
            parallel,
            ..ForecastConfig::default()
        })
        .unwrap();
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| engine.forecast_many(black_box(&series), Cadence::Monthly, 6))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_components, bench_forecast, bench_forecast_many);
criterion_main!(benches);
