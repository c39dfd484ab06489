//! Performance benchmarks for the work-time accounting engine.
//!
//! Shifts are bounded to 24 hours, so a single classification is a handful
//! of closed-form segment sums; the history aggregation is the only path
//! whose cost grows with data volume. These benchmarks keep an eye on both.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{NaiveDate, NaiveTime};

use worktime_engine::calculation::classify;
use worktime_engine::models::{ShiftDraft, ShiftRecord};
use worktime_engine::policy::PayPolicy;
use worktime_engine::report::{HistoryFilter, filter_and_group};

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Builds a year's worth of synthetic records cycling through the week.
fn build_records(count: usize) -> Vec<ShiftRecord> {
    let policy = PayPolicy::default();
    let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let date = base + chrono::Duration::days((i % 365) as i64);
            ShiftDraft {
                date: date.format("%Y-%m-%d").to_string(),
                start_time: "09:00".to_string(),
                end_time: "17:30".to_string(),
                break_minutes: 30,
                project_id: format!("proj_{:02}", i % 7),
                ..ShiftDraft::default()
            }
            .finalize(&format!("rec_{i:05}"), &policy)
            .unwrap()
        })
        .collect()
}

fn bench_classification(c: &mut Criterion) {
    let policy = PayPolicy::default();
    let mut group = c.benchmark_group("classification");

    // 2026-01-14 is a Wednesday, 2026-01-17 a Saturday.
    let cases = [
        ("weekday_day", "2026-01-14", (9, 0), (17, 0)),
        ("weekday_into_evening", "2026-01-14", (8, 0), (19, 0)),
        ("saturday_into_sunday", "2026-01-17", (22, 0), (6, 0)),
    ];

    for (name, date_str, start, end) in cases {
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                classify(
                    black_box(date),
                    black_box(time(start.0, start.1)),
                    black_box(time(end.0, end.1)),
                    &policy,
                )
            })
        });
    }
    group.finish();
}

fn bench_history_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_aggregation");

    for count in [100usize, 1000] {
        let records = build_records(count);
        let filter = HistoryFilter {
            year: Some(2025),
            month: None,
            week: None,
        };
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("filter_and_group", count),
            &records,
            |b, records| b.iter(|| filter_and_group(black_box(records), black_box(&filter))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_classification, bench_history_aggregation);
criterion_main!(benches);
