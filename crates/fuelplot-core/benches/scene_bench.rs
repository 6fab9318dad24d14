// File: crates/fuelplot-core/benches/scene_bench.rs
// Summary: Scene assembly throughput over a year of weekly fillups.

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fuelplot_core::record::annotate_days_since_fillup;
use fuelplot_core::{ChartConfig, ChartContext, FillupRecord};

fn synthetic_log(n: usize) -> Vec<FillupRecord> {
    let start = NaiveDate::from_ymd_opt(2019, 1, 5)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time");
    let mut records: Vec<FillupRecord> = (0..n)
        .map(|i| {
            let date = start + Duration::days(7 * i as i64 + (i % 3) as i64);
            let mileage = 280.0 + (i % 11) as f64 * 7.0;
            let miles_remaining = 30.0 + (i % 5) as f64 * 12.0;
            let gallons_filled = 9.0 + (i % 4) as f64 * 0.5;
            let price_per_gallon = 2.40 + (i % 9) as f64 * 0.08;
            let mpg = mileage / gallons_filled;
            FillupRecord {
                date_key: date.format("%Y/%m/%d").to_string(),
                date,
                mileage,
                miles_remaining,
                gallons_filled,
                price_per_gallon,
                mpg,
                price_per_mile: price_per_gallon / mpg,
                gas_utilization: mileage / (mileage + miles_remaining),
                days_since_fillup: None,
            }
        })
        .collect();
    annotate_days_since_fillup(&mut records);
    records
}

fn bench_assemble(c: &mut Criterion) {
    let records = synthetic_log(52);
    let full = ChartContext::full();
    let half = ChartContext::half_height();

    let mut group = c.benchmark_group("assemble");
    group.bench_function("mileage_lines_52", |b| {
        let config = ChartConfig::mileage_lines();
        b.iter(|| config.assemble(black_box(&records), &full).unwrap())
    });
    group.bench_function("average_mpg_52", |b| {
        let config = ChartConfig::average_mpg();
        b.iter(|| config.assemble(black_box(&records), &full).unwrap())
    });
    group.bench_function("fillup_frequency_52", |b| {
        let config = ChartConfig::fillup_frequency();
        b.iter(|| config.assemble(black_box(&records), &half).unwrap())
    });

    let daily = synthetic_log(365);
    group.bench_function("price_per_mile_365", |b| {
        let config = ChartConfig::price_per_mile();
        b.iter(|| config.assemble(black_box(&daily), &full).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
