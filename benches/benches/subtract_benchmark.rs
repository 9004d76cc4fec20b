//! Backward-walk benchmarks against the Euronext fixture.
//!
//! Run with: `cargo bench --package biztime-bench`

use biztime_bench::{bench_cases, bench_end, bench_schedule};
use biztime_lib::{LookbackEngine, ScheduleSource};
use biztime_testkit::euronext;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn subtract_benchmark(c: &mut Criterion) {
    let calendar = euronext();
    let schedule = bench_schedule(&calendar).expect("fixture schedule");
    let engine = LookbackEngine::with_defaults();
    let end = bench_end();

    let mut group = c.benchmark_group("subtract");

    for case in bench_cases() {
        group.throughput(Throughput::Elements(u64::from(case.target)));

        // Schedule fetched by the engine on every call
        group.bench_with_input(BenchmarkId::new("live", case.name), case, |b, case| {
            b.iter(|| {
                engine
                    .subtract(
                        black_box(&end),
                        ScheduleSource::live(&calendar),
                        case.interval,
                        case.target,
                    )
                    .unwrap()
            });
        });

        // Pre-fetched schedule
        group.bench_with_input(
            BenchmarkId::new("materialized", case.name),
            case,
            |b, case| {
                b.iter(|| {
                    engine
                        .subtract(
                            black_box(&end),
                            ScheduleSource::materialized(&schedule),
                            case.interval,
                            case.target,
                        )
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn schedule_benchmark(c: &mut Criterion) {
    let calendar = euronext();

    c.bench_function("materialize_one_year", |b| {
        b.iter(|| bench_schedule(black_box(&calendar)).unwrap());
    });
}

criterion_group!(benches, subtract_benchmark, schedule_benchmark);
criterion_main!(benches);
