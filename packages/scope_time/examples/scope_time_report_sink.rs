//! Sending report lines to a custom sink instead of stdout.
//!
//! `Report::print_to` takes any single-line consumer, which is how an
//! application routes the table through its own logging layer.
//!
//! Run with: `cargo run --example scope_time_report_sink`.

use std::hint::black_box;

use scope_time::Profiler;

fn main() {
    let profiler = Profiler::new();

    profiler.scope("setup").time(|| {
        black_box((0..50_000_u64).sum::<u64>());
    });
    profiler.scope("teardown").time(|| {
        black_box((0..10_000_u64).product::<u64>());
    });

    let report = profiler.report();

    // A logger stand-in: prefix every line, as tracing/log adapters would.
    report.print_to(|line| eprintln!("[profile] {line}"));

    // Or collect the lines for later inspection.
    let mut collected = Vec::new();
    report.print_to(|line| collected.push(line.to_owned()));
    println!("captured {} table lines", collected.len());
}
