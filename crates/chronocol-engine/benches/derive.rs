use chrono::{Duration as ChronoDuration, NaiveDate};
use chronocol_columnar::DateTimeColumn;
use chronocol_engine::{DateTimeMapFunctions, TemporalUnit};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

fn bench_rows() -> usize {
    std::env::var("CHRONOCOL_DERIVE_BENCH_ROWS")
        .ok()
        .and_then(|v| v.replace('_', "").parse::<usize>().ok())
        .filter(|&v| (10_000..=10_000_000).contains(&v))
        .unwrap_or(1_000_000)
}

fn build_column(rows: usize) -> DateTimeColumn {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let mut column = DateTimeColumn::with_capacity("ts", rows);
    for row in 0..rows {
        // Every 97th row is missing so the sentinel path stays warm.
        if row % 97 == 0 {
            column.append_missing();
        } else {
            let offset = ChronoDuration::minutes(row as i64 * 37);
            column.append(start + offset).unwrap();
        }
    }
    column
}

fn bench_derive(c: &mut Criterion) {
    let rows = bench_rows();
    let column = build_column(rows);
    let shifted = column.derive().lag(1);

    let mut group = c.benchmark_group("derive");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(5));
    group.throughput(Throughput::Elements(rows as u64));

    group.bench_with_input(BenchmarkId::new("hour", rows), &rows, |b, _| {
        b.iter(|| black_box(column.derive().hour()))
    });

    group.bench_with_input(BenchmarkId::new("week_of_year", rows), &rows, |b, _| {
        b.iter(|| black_box(column.derive().week_of_year()))
    });

    group.bench_with_input(BenchmarkId::new("year_month", rows), &rows, |b, _| {
        b.iter(|| black_box(column.derive().year_month()))
    });

    group.bench_with_input(BenchmarkId::new("difference_days", rows), &rows, |b, _| {
        b.iter(|| black_box(shifted.derive().difference_in_days(&column).unwrap()))
    });

    group.bench_with_input(BenchmarkId::new("window_from_min", rows), &rows, |b, _| {
        b.iter(|| {
            black_box(
                column
                    .derive()
                    .time_window_from_min(TemporalUnit::Weeks, 2)
                    .unwrap(),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
