// ABOUTME: Criterion benchmarks for series aggregation and carry-forward building
// ABOUTME: Measures bucket reduction throughput over month-scale sample sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

//! Criterion benchmarks for the aggregation hot paths.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fasten_core::constants::units::KG_TO_LB;
use fasten_core::models::TimedAmount;
use fasten_intelligence::carry_forward::carry_forward_series;
use fasten_intelligence::series::{aggregate, Reducer};
use fasten_intelligence::ReportRange;

/// Generate timestamped amounts spread across the reference month
fn generate_amounts(count: usize) -> Vec<TimedAmount> {
    let base = Utc.with_ymd_and_hms(2025, 3, 1, 6, 0, 0).unwrap();
    (0..count)
        .map(|index| {
            let offset_minutes = (index * 97) % (31 * 24 * 60);
            TimedAmount::new(
                base + Duration::minutes(offset_minutes as i64),
                100.0 + (index % 700) as f64,
            )
        })
        .collect()
}

fn reference_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 16).unwrap_or_default()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_aggregate");
    for size in [100_usize, 1_000, 10_000] {
        let amounts = generate_amounts(size);
        group.throughput(Throughput::Elements(size as u64));
        for reducer in [Reducer::Sum, Reducer::Max] {
            group.bench_with_input(
                BenchmarkId::new(format!("{reducer:?}"), size),
                &amounts,
                |b, amounts| {
                    b.iter(|| {
                        aggregate(
                            black_box(amounts),
                            ReportRange::Month,
                            reference_today(),
                            &Utc,
                            reducer,
                        )
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_carry_forward(c: &mut Criterion) {
    let mut samples = generate_amounts(365);
    samples.sort_by_key(|s| s.timestamp);

    c.bench_function("carry_forward_year", |b| {
        b.iter(|| {
            carry_forward_series(
                black_box(&samples),
                ReportRange::Year,
                reference_today(),
                &Utc,
                KG_TO_LB,
            )
        });
    });
}

criterion_group!(benches, bench_aggregate, bench_carry_forward);
criterion_main!(benches);
