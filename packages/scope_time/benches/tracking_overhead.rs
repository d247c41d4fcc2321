//! Benchmarks to measure the compute overhead of `scope_time` logic itself.
//!
//! These benchmarks measure the overhead of the tracking infrastructure by
//! timing empty spans - spans that do not do any actual work but still incur
//! the bookkeeping and clock-reading overhead.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use scope_time::Profiler;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope_time_overhead");

    // Baseline measurement - no tracking at all.
    group.bench_function("baseline_empty", |b| {
        b.iter(|| {
            black_box(());
        });
    });

    {
        let profiler = Profiler::new();

        let flat_scope = profiler.scope("empty_span");
        group.bench_function("span_empty", |b| {
            b.iter(|| {
                let _span = flat_scope.measure();
                black_box(());
            });
        });

        let timed_scope = profiler.scope("empty_closure");
        group.bench_function("closure_empty", |b| {
            b.iter(|| {
                timed_scope.time(|| black_box(()));
            });
        });

        let outer = profiler.scope("outer");
        let inner = profiler.scope("inner");
        group.bench_function("nested_span_empty", |b| {
            b.iter(|| {
                let _outer = outer.measure();
                let _inner = inner.measure();
                black_box(());
            });
        });

        // Report construction over the tree the measurements above created.
        group.bench_function("report_build", |b| {
            b.iter(|| {
                black_box(profiler.report());
            });
        });
    }

    group.finish();
}
