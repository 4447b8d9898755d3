use criterion::{Criterion, criterion_group, criterion_main};
use horizon_rs::api::{MemorySeries, ResampleRequest, resample_all};
use horizon_rs::core::{RawSeries, Sample, SummaryPolicy, TargetGrid, downsample, upsample};
use std::hint::black_box;

fn dense_series(count: i64, step_ms: i64) -> RawSeries {
    let samples: Vec<Sample> = (0..count)
        .map(|i| {
            let value = 100.0 + (i as f64 * 0.25).sin() * 40.0;
            Sample::new(i * step_ms, value)
        })
        .collect();
    RawSeries::new(samples).expect("valid generated series")
}

fn bench_upsample_sparse_onto_10k_grid(c: &mut Criterion) {
    let raw = dense_series(500, 1_000);
    let grid = TargetGrid::from_range(0, 500_000, 10_000).expect("valid grid");

    c.bench_function("upsample_sparse_onto_10k_grid", |b| {
        b.iter(|| {
            let _ = upsample(black_box(&raw), black_box(&grid));
        })
    });
}

fn bench_downsample_100k_onto_1k_grid(c: &mut Criterion) {
    let raw = dense_series(100_000, 10);
    let grid = TargetGrid::from_range(0, 1_000_000, 1_000).expect("valid grid");

    c.bench_function("downsample_100k_onto_1k_grid", |b| {
        b.iter(|| {
            let _ = downsample(
                black_box(&raw),
                black_box(&grid),
                black_box(SummaryPolicy::Avg),
                black_box(1_000),
            );
        })
    });
}

fn bench_batch_of_8_series(c: &mut Criterion) {
    let grid = TargetGrid::from_range(0, 600_000, 1_200).expect("valid grid");
    let sources: Vec<MemorySeries> = (0..8)
        .map(|series_index| {
            let timestamps: Vec<i64> = (0..5_000).map(|i| i * 120).collect();
            let values: Vec<f64> = (0..5_000)
                .map(|i| f64::from(series_index) + (f64::from(i) * 0.1).cos())
                .collect();
            MemorySeries::new(format!("series-{series_index}"), timestamps, values)
        })
        .collect();
    let request = ResampleRequest::new();

    c.bench_function("batch_of_8_series", |b| {
        b.iter(|| {
            let _ = resample_all(black_box(&sources), black_box(&grid), black_box(&request))
                .expect("batch should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_upsample_sparse_onto_10k_grid,
    bench_downsample_100k_onto_1k_grid,
    bench_batch_of_8_series
);
criterion_main!(benches);
